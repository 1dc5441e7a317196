//! Reusable UI widgets
//!
//! Contains common UI components used across multiple tabs:
//! - Popup dialogs (error, page selector)
//! - Pagination controls (page buttons, page list, load more)
//! - Status bar and flash messages

use crate::control::{Controls, LoadMore, NavButton, NavButtons, PageSelector, PageSlot};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, char)], // (label, key)
    theme: &Theme,
    area: Rect,
) {
    // Calculate popup size
    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 8).min(area.height.saturating_sub(4));

    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    // Render popup background and border
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    frame.render_widget(block, popup_area);

    // Inner area for content
    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 2,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(5),
    };

    // Render content
    let content_widget = Paragraph::new(content)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, inner);

    // Render buttons at bottom
    if !buttons.is_empty() {
        let button_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height.saturating_sub(3),
            width: popup_area.width.saturating_sub(4),
            height: 1,
        };

        let button_spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, key))| {
                let mut spans = vec![
                    Span::styled("[", theme.text_dim()),
                    Span::styled(
                        key.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("] ", theme.text_dim()),
                    Span::styled(*label, theme.text()),
                ];
                if i < buttons.len() - 1 {
                    spans.push(Span::raw("    "));
                }
                spans
            })
            .collect();

        let buttons_widget = Paragraph::new(Line::from(button_spans))
            .alignment(Alignment::Center);
        frame.render_widget(buttons_widget, button_area);
    }
}

/// Render an error popup
pub fn render_error_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    theme: &Theme,
    area: Rect,
) {
    let content = vec![
        Line::raw(""),
        Line::styled(message, theme.error()),
        Line::raw(""),
    ];

    render_popup(frame, title, content, &[("OK", 'o')], theme, area);
}

/// Render the page selector of list mode as a dropdown popup
pub fn render_page_selector(
    frame: &mut Frame,
    selector: &PageSelector,
    cursor: usize,
    theme: &Theme,
    area: Rect,
) {
    let height = (selector.entries.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = centered_rect(24.min(area.width), height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Go to page ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    let items: Vec<ListItem> = selector
        .entries
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let marker = if Some(i) == selector.selected { "● " } else { "  " };
            let style = if i == cursor { theme.selected() } else { theme.text() };
            ListItem::new(Line::styled(format!("{}Page {}", marker, page), style))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(List::new(items).block(block), popup_area, &mut state);
}

/// Render pagination controls; draws nothing at all when `controls` is `None`
pub fn render_pagination(
    frame: &mut Frame,
    controls: Option<&Controls>,
    focus: Option<usize>,
    theme: &Theme,
    area: Rect,
) {
    let Some(controls) = controls else {
        return;
    };

    let line = controls_line(controls, focus, theme);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Build the one-line representation of a control surface.
///
/// `focus` is the index of the keyboard-focused page number (buttons mode).
pub fn controls_line(controls: &Controls, focus: Option<usize>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    match controls {
        Controls::Buttons { nav, pages } => {
            push_nav(&mut spans, &nav.leading(), theme);

            let mut page_index = 0;
            for slot in pages {
                match slot {
                    PageSlot::Page { number, active } => {
                        let style = if *active {
                            theme.page_active()
                        } else if focus == Some(page_index) {
                            theme.page_focused()
                        } else {
                            theme.page_inactive()
                        };
                        spans.push(Span::styled(format!(" {} ", number), style));
                        page_index += 1;
                    }
                    PageSlot::Gap => spans.push(Span::styled(" … ", theme.text_dim())),
                }
            }

            push_nav(&mut spans, &nav.trailing(), theme);
        }
        Controls::List { nav, selector } => {
            push_nav(&mut spans, &nav.leading(), theme);
            spans.extend(selector_spans(selector, nav, theme));
            push_nav(&mut spans, &nav.trailing(), theme);
        }
        Controls::LoadMore(load_more) => spans.extend(load_more_spans(load_more, theme)),
    }

    Line::from(spans)
}

fn push_nav(spans: &mut Vec<Span<'static>>, buttons: &[NavButton], theme: &Theme) {
    for button in buttons {
        let style = if button.enabled {
            theme.page_inactive()
        } else {
            theme.nav_disabled()
        };
        spans.push(Span::styled(format!(" {} ", button.action.label()), style));
    }
}

fn selector_spans(selector: &PageSelector, nav: &NavButtons, theme: &Theme) -> Vec<Span<'static>> {
    let current = selector
        .selected
        .and_then(|i| selector.entries.get(i))
        .copied()
        .unwrap_or(nav.back.target);

    let mut spans = vec![Span::styled(format!(" [ Page {} ▾ ] ", current), theme.title())];

    if let (Some(first), Some(last)) = (selector.entries.first(), selector.entries.last()) {
        spans.push(Span::styled(
            format!("{}–{} of {} ", first, last, nav.last.target.max(*last)),
            theme.text_dim(),
        ));
    }

    spans
}

fn load_more_spans(load_more: &LoadMore, theme: &Theme) -> Vec<Span<'static>> {
    let label = if load_more.auto_load {
        "↓ Scroll to load more"
    } else {
        "[ Load more ]"
    };

    vec![
        Span::styled(label, theme.title()),
        Span::styled(format!("  {} more", load_more.items_left), theme.badge()),
    ]
}

/// Render a success flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content)
        .style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content)
        .style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;
    use crate::control::ControlMode;
    use crate::paging::{Paging, PagingOptions};
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn thousand(options: PagingOptions) -> Paging<u32> {
        Paging::new((0..1000).collect(), options).unwrap()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_buttons_line() {
        let theme = Theme::from_name(ThemeName::Gruvbox);
        let paging = thousand(PagingOptions {
            start_page: 11,
            pages_to_show: Some(5),
            ..PagingOptions::default()
        });
        let controls = Controls::derive(ControlMode::Buttons, &paging).unwrap();

        let line = controls_line(&controls, None, &theme);
        assert_eq!(
            line_text(&line),
            " «  ‹  1  …  9  10  11  12  13  …  100  ›  » "
        );

        let active = line
            .spans
            .iter()
            .find(|span| span.content == " 11 ")
            .unwrap();
        assert_eq!(active.style, theme.page_active());
    }

    #[test]
    fn test_disabled_nav_is_dimmed() {
        let theme = Theme::from_name(ThemeName::Nord);
        let paging = thousand(PagingOptions::default());
        let controls = Controls::derive(ControlMode::List, &paging).unwrap();

        let line = controls_line(&controls, None, &theme);
        assert_eq!(line.spans[0].style, theme.nav_disabled());
        assert_eq!(line.spans.last().unwrap().style, theme.page_inactive());
        assert!(line_text(&line).contains("Page 1 ▾"));
        assert!(line_text(&line).contains("1–100 of 100"));
    }

    #[test]
    fn test_load_more_line() {
        let theme = Theme::from_name(ThemeName::Transparent);
        let mut paging = thousand(PagingOptions {
            infinite: true,
            ..PagingOptions::default()
        });
        paging.set_page(5);
        let controls = Controls::derive(ControlMode::Infinite { auto_load: false }, &paging).unwrap();

        assert_eq!(
            line_text(&controls_line(&controls, None, &theme)),
            "[ Load more ]  950 more"
        );
    }

    #[test]
    fn test_no_controls_draws_nothing() {
        let theme = Theme::from_name(ThemeName::Gruvbox);
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_pagination(frame, None, None, &theme, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_render_pagination_draws_line() {
        let theme = Theme::from_name(ThemeName::Gruvbox);
        let paging = thousand(PagingOptions {
            pages_to_show: Some(3),
            ..PagingOptions::default()
        });
        let controls = Controls::derive(ControlMode::Buttons, &paging);
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_pagination(frame, controls.as_ref(), Some(1), &theme, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains(" 1  2  3  …  100 "));
    }

    #[test]
    fn test_error_popup() {
        let theme = Theme::from_name(ThemeName::Nord);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_error_popup(frame, "Save failed", "disk full", &theme, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains(" Save failed "));
        assert!(text.contains("disk full"));
        assert!(text.contains("[o] OK"));
    }
}
