//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with tab bar
//! - The active paged view and its pagination controls
//! - Popups and overlays
//! - Status bar

use crate::app::{App, PagedView, PopupState, SETTINGS};
use crate::control::Controls;
use crate::types::{Record, Tab};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(6),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_tab_content(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);
    render_popups(frame, app, area);
}

/// Render header with tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" pagekit · {} records ", app.dataset.len()))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.active_tab == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, tab.label()), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab.index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the active tab's content
fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_view() {
        Some(view) => render_paged_view(frame, app.active_tab, view, &app.theme, area),
        None => render_settings_tab(frame, app, area),
    }
}

/// Render a paged view: items, then controls (only when there are any)
fn render_paged_view(frame: &mut Frame, tab: Tab, view: &PagedView, theme: &Theme, area: Rect) {
    let controls = view.controls();
    let controls_height = if controls.is_some() { 1 } else { 0 };

    let layout = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(controls_height),
        Constraint::Length(1),
    ])
    .split(area);

    let paging = &view.paging;
    let title = if paging.options().infinite {
        format!(
            " {} · {} of {} shown ",
            tab.label(),
            paging.visible_items().len(),
            paging.items().len()
        )
    } else {
        format!(
            " {} · page {} of {} ",
            tab.label(),
            paging.current_page(),
            paging.page_count()
        )
    };

    let block = Block::default()
        .style(theme.block_style())
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    render_records(frame, paging.visible_items(), view.cursor, theme, inner);

    let focus = match controls {
        Some(Controls::Buttons { .. }) => Some(view.page_focus),
        _ => None,
    };
    widgets::render_pagination(frame, controls.as_ref(), focus, theme, layout[1]);

    let summary = format!(
        "{} per page · {} pages{}",
        paging.options().items_per_page,
        paging.page_count(),
        match paging.options().pages_to_show {
            Some(n) => format!(" · window {}", n),
            None => String::new(),
        }
    );
    frame.render_widget(
        Paragraph::new(summary)
            .style(theme.text_dim())
            .alignment(Alignment::Center),
        layout[2],
    );
}

/// Render the visible slice of records
fn render_records(frame: &mut Frame, records: &[Record], cursor: usize, theme: &Theme, area: Rect) {
    if records.is_empty() {
        let empty_msg = Paragraph::new("No records")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if i == cursor {
                theme.selected()
            } else {
                theme.text()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<5}", record.id), theme.text_dim()),
                Span::styled(format!("{:<18}", record.name), style),
                Span::styled(format!("{:<9}", record.category), theme.text_dim()),
                Span::styled(format!("{}  ", record.formatted_date()), theme.text_dim()),
                Span::styled(record.formatted_size(), theme.text_dim()),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}

/// Settings tab: options and recent page changes
fn render_settings_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let panels = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let values = [
        app.config.theme.as_str().to_string(),
        app.config.paging.items_per_page.to_string(),
        app.config
            .paging
            .pages_to_show
            .map_or_else(|| "all".to_string(), |n| n.to_string()),
        if app.config.auto_load { "on" } else { "off" }.to_string(),
        String::new(),
    ];

    let items: Vec<ListItem> = SETTINGS
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == app.settings_selected {
                theme.selected()
            } else {
                theme.text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", label), style),
                Span::styled(value.clone(), theme.text_dim()),
            ]))
        })
        .collect();

    let settings = List::new(items).block(
        Block::default()
            .style(theme.block_style())
            .title(" Settings ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused()),
    );
    frame.render_widget(settings, panels[0]);

    let activity = app.activity.borrow();
    let log: Vec<ListItem> = activity
        .iter()
        .map(|entry| ListItem::new(Line::styled(entry.clone(), theme.text())))
        .collect();

    let log_widget = List::new(log).block(
        Block::default()
            .style(theme.block_style())
            .title(" Page changes ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(log_widget, panels[1]);
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = match app.active_tab {
        Tab::Buttons => "[h/l] Back/Next  [H/L] First/Last  [Tab] Focus page  [Enter] Go  [r] Refetch  [+/-] Resize  [q] Quit",
        Tab::List => "[h/l] Back/Next  [H/L] First/Last  [Enter] Choose page  [[/]] Page size  [q] Quit",
        Tab::Infinite => "[m] Load more  [j/k] Scroll  [a] Auto load  [r] Refetch  [q] Quit",
        Tab::Settings => "[j/k] Navigate  [Enter] Change  [s] Save  [q] Quit",
    };

    let last = app.last_activity().unwrap_or_default();
    widgets::render_status_bar(frame, hints, &last, theme, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match &app.popup {
        PopupState::None => {}

        PopupState::Error { title, message } => {
            widgets::render_error_popup(frame, title, message, theme, area);
        }

        PopupState::PageSelector => {
            if let Some(Controls::List { selector, .. }) = app.list.controls() {
                widgets::render_page_selector(frame, &selector, app.selector_cursor, theme, area);
            }
        }
    }

    // Flash message (success/error feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}
