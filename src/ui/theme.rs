//! Theme definitions for pagekit
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.
//! Each theme defines colors for all UI elements, including pagination controls.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Pagination controls
    pub page_active_bg: Color,
    pub page_active_fg: Color,
    pub badge: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),           // #282828
            fg: Color::Rgb(235, 219, 178),        // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116),    // #928374

            accent: Color::Rgb(254, 128, 25),     // #fe8019
            accent_dim: Color::Rgb(214, 93, 14),  // #d65d0e

            success: Color::Rgb(184, 187, 38),    // #b8bb26
            error: Color::Rgb(251, 73, 52),       // #fb4934

            border: Color::Rgb(80, 73, 69),       // #504945
            border_focused: Color::Rgb(168, 153, 132), // #a89984
            selection_bg: Color::Rgb(80, 73, 69), // #504945
            selection_fg: Color::Rgb(235, 219, 178), // #ebdbb2

            page_active_bg: Color::Rgb(254, 128, 25), // #fe8019
            page_active_fg: Color::Rgb(40, 40, 40),   // #282828
            badge: Color::Rgb(131, 165, 152),         // #83a598
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            // Polar Night
            bg: Color::Rgb(46, 52, 64),           // #2e3440
            fg: Color::Rgb(236, 239, 244),        // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),      // #4c566a

            // Frost
            accent: Color::Rgb(136, 192, 208),    // #88c0d0
            accent_dim: Color::Rgb(94, 129, 172), // #5e81ac

            // Aurora
            success: Color::Rgb(163, 190, 140),   // #a3be8c
            error: Color::Rgb(191, 97, 106),      // #bf616a

            border: Color::Rgb(59, 66, 82),       // #3b4252
            border_focused: Color::Rgb(136, 192, 208), // #88c0d0
            selection_bg: Color::Rgb(76, 86, 106),    // #4c566a
            selection_fg: Color::Rgb(236, 239, 244),  // #eceff4

            page_active_bg: Color::Rgb(136, 192, 208), // #88c0d0
            page_active_fg: Color::Rgb(46, 52, 64),    // #2e3440
            badge: Color::Rgb(180, 142, 173),          // #b48ead
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            accent: Color::Cyan,
            accent_dim: Color::Blue,

            success: Color::Green,
            error: Color::Red,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,

            page_active_bg: Color::Cyan,
            page_active_fg: Color::Black,
            badge: Color::Magenta,
        }
    }

    // Style helpers for common UI patterns

    /// Background for blocks so themed colors fill the whole area
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Page button for the current page
    pub fn page_active(&self) -> Style {
        Style::default()
            .fg(self.page_active_fg)
            .bg(self.page_active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Page button the keyboard focus is on
    pub fn page_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    /// Clickable page or navigation button
    pub fn page_inactive(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Disabled navigation button
    pub fn nav_disabled(&self) -> Style {
        Style::default()
            .fg(self.border)
            .bg(self.bg)
            .add_modifier(Modifier::DIM)
    }

    /// "N more" counter on the load-more button
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}
