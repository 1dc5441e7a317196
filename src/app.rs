//! Application state and event handling
//!
//! This is the core of the pagekit demo, managing:
//! - One independent paged view per control mode
//! - Event handling (keyboard input)
//! - Data changes (refetch, resize) fanned out to every view

use crate::config::Config;
use crate::control::{ControlAction, ControlMode, ControlSurface, Controls, PageChange, ScrollHint};
use crate::data::Dataset;
use crate::paging::{PageEdges, Paging};
use crate::types::{Record, Tab};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;
use tracing::{info, warn};

/// How many page-change entries the activity log keeps
const ACTIVITY_LOG_LEN: usize = 50;

/// Rows added or removed by `+`/`-`
const RESIZE_STEP: usize = 100;

/// Page changes reported by the control surfaces' observers
pub type ActivityLog = Rc<RefCell<VecDeque<String>>>;

/// A paging handle, its control surface and the item cursor of one tab
#[derive(Debug)]
pub struct PagedView {
    pub paging: Paging<Record>,
    pub surface: ControlSurface,
    /// Cursor within the visible items
    pub cursor: usize,
    /// Keyboard focus among the page-number buttons
    pub page_focus: usize,
}

impl PagedView {
    fn new(
        tab: Tab,
        mode: ControlMode,
        records: Vec<Record>,
        config: &Config,
        log: &ActivityLog,
    ) -> Result<Self> {
        let mut options = config.paging.clone();
        options.infinite = mode.is_infinite();
        let paging = Paging::new(records, options)?;

        let log = Rc::clone(log);
        let surface = ControlSurface::new(mode).with_observer(move |page, edges: PageEdges| {
            let edge = match (edges.is_first, edges.is_last) {
                (true, true) => " (only page)",
                (true, false) => " (first)",
                (false, true) => " (last)",
                (false, false) => "",
            };
            let mut log = log.borrow_mut();
            log.push_front(format!("{}: page {}{}", tab.label(), page, edge));
            log.truncate(ACTIVITY_LOG_LEN);
        });

        Ok(Self {
            paging,
            surface,
            cursor: 0,
            page_focus: 0,
        })
    }

    /// Controls to draw, if any
    pub fn controls(&self) -> Option<Controls> {
        self.surface.controls(&self.paging)
    }

    /// Route an action and keep the cursor in step with the new items
    fn dispatch(&mut self, action: ControlAction) -> Option<PageChange> {
        let loaded_from = self.paging.visible_items().len();
        let change = self.surface.dispatch(&mut self.paging, action)?;
        self.apply_scroll(change.scroll, loaded_from);
        self.sync_page_focus();
        Some(change)
    }

    fn apply_scroll(&mut self, scroll: ScrollHint, loaded_from: usize) {
        self.cursor = match scroll {
            ScrollHint::Top => 0,
            ScrollHint::Bottom => loaded_from.min(self.paging.visible_items().len().saturating_sub(1)),
        };
    }

    fn sync_page_focus(&mut self) {
        let pages = self.paging.bracketed_pages();
        self.page_focus = pages
            .iter()
            .position(|page| *page == self.paging.current_page())
            .unwrap_or(0);
    }

    fn move_cursor(&mut self, down: bool) -> Option<PageChange> {
        let len = self.paging.visible_items().len();
        if down {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.update_visibility()
    }

    /// The load-more control sits below the last item; it is in view when the
    /// cursor reaches that item.
    fn update_visibility(&mut self) -> Option<PageChange> {
        let len = self.paging.visible_items().len();
        let at_end = len > 0 && self.cursor + 1 >= len;
        let loaded_from = len;
        let change = self.surface.set_visible(&mut self.paging, at_end)?;
        self.apply_scroll(change.scroll, loaded_from);
        Some(change)
    }

    /// Forget the last visibility signal and send a fresh one. Needed after
    /// the items under the cursor change or the load-more mode is switched.
    fn recheck_visibility(&mut self) -> Option<PageChange> {
        self.surface.set_visible(&mut self.paging, false);
        self.update_visibility()
    }

    fn replace_items(&mut self, records: Vec<Record>) {
        self.paging.set_items(records);
        self.clamp_cursor();
        self.sync_page_focus();
        self.recheck_visibility();
    }

    fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        self.paging.set_items_per_page(items_per_page)?;
        self.clamp_cursor();
        self.sync_page_focus();
        self.recheck_visibility();
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        let len = self.paging.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub active_tab: Tab,
    pub config: Config,
    pub theme: Theme,
    pub dataset: Dataset,

    // One view per control mode, each with its own paging handle
    pub buttons: PagedView,
    pub list: PagedView,
    pub infinite: PagedView,

    // List-mode page selector
    pub selector_cursor: usize,

    // Settings tab state
    pub settings_selected: usize,

    pub activity: ActivityLog,

    // Popup state
    pub popup: PopupState,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Error { title: String, message: String },
    PageSelector,
}

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    SelectorOpen,
    ShowError,
}

/// Settings rows, in display order
pub const SETTINGS: &[&str] = &[
    "Theme",
    "Items per page",
    "Pages to show",
    "Auto load",
    "Save config",
];

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Result<Self> {
        let theme = Theme::from_name(config.theme);
        let dataset = Dataset::generate(config.dataset_size);
        let activity: ActivityLog = Rc::new(RefCell::new(VecDeque::new()));

        let view = |tab: Tab| -> Result<PagedView> {
            let mode = tab
                .control_mode(config.auto_load)
                .unwrap_or(ControlMode::Buttons);
            PagedView::new(tab, mode, dataset.records().to_vec(), &config, &activity)
        };

        let mut buttons = view(Tab::Buttons)?;
        let list = view(Tab::List)?;
        let infinite = view(Tab::Infinite)?;
        buttons.sync_page_focus();

        info!(
            records = dataset.len(),
            items_per_page = config.paging.items_per_page,
            "app initialized"
        );

        Ok(Self {
            should_quit: false,
            active_tab: Tab::Buttons,
            config,
            theme,
            dataset,

            buttons,
            list,
            infinite,

            selector_cursor: 0,
            settings_selected: 0,
            activity,

            popup: PopupState::None,
            flash_message: None,
        })
    }

    /// Get current app state
    pub fn state(&self) -> AppState {
        match &self.popup {
            PopupState::None => AppState::Normal,
            PopupState::Error { .. } => AppState::ShowError,
            PopupState::PageSelector => AppState::SelectorOpen,
        }
    }

    /// View shown on the active tab, if it is a paged tab
    pub fn active_view(&self) -> Option<&PagedView> {
        match self.active_tab {
            Tab::Buttons => Some(&self.buttons),
            Tab::List => Some(&self.list),
            Tab::Infinite => Some(&self.infinite),
            Tab::Settings => None,
        }
    }

    fn active_view_mut(&mut self) -> Option<&mut PagedView> {
        match self.active_tab {
            Tab::Buttons => Some(&mut self.buttons),
            Tab::List => Some(&mut self.list),
            Tab::Infinite => Some(&mut self.infinite),
            Tab::Settings => None,
        }
    }

    fn views_mut(&mut self) -> [&mut PagedView; 3] {
        [&mut self.buttons, &mut self.list, &mut self.infinite]
    }

    /// Most recent page change reported by any observer
    pub fn last_activity(&self) -> Option<String> {
        self.activity.borrow().front().cloned()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear expired flash messages
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match self.state() {
            AppState::ShowError => {
                if matches!(key.code, KeyCode::Char('o') | KeyCode::Enter | KeyCode::Esc) {
                    self.popup = PopupState::None;
                }
                Ok(())
            }
            AppState::SelectorOpen => {
                self.handle_selector_key(key);
                Ok(())
            }
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    /// Handle key in normal state
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global keys (work in all tabs)
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.active_tab = Tab::from_index(c as usize - '1' as usize);
            }
            KeyCode::Char('r') => self.refetch(),
            KeyCode::Char('+') => self.resize_dataset(self.dataset.len() + RESIZE_STEP),
            KeyCode::Char('-') => {
                self.resize_dataset(self.dataset.len().saturating_sub(RESIZE_STEP))
            }
            _ => {}
        }

        if self.active_tab == Tab::Settings {
            return self.handle_settings_key(key);
        }

        self.handle_paged_key(key);
        Ok(())
    }

    /// Keys shared by the paged tabs
    fn handle_paged_key(&mut self, key: KeyEvent) {
        let tab = self.active_tab;
        let Some(view) = self.active_view_mut() else {
            return;
        };

        let action = match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(ControlAction::Back),
            KeyCode::Char('l') | KeyCode::Right => Some(ControlAction::Next),
            KeyCode::Char('H') | KeyCode::Home => Some(ControlAction::First),
            KeyCode::Char('L') | KeyCode::End => Some(ControlAction::Last),
            KeyCode::Char('m') if tab == Tab::Infinite => Some(ControlAction::LoadMore),
            KeyCode::Enter if tab == Tab::Infinite => Some(ControlAction::LoadMore),
            KeyCode::Enter if tab == Tab::Buttons => view
                .paging
                .bracketed_pages()
                .get(view.page_focus)
                .copied()
                .map(ControlAction::Page),
            _ => None,
        };

        if let Some(action) = action {
            view.dispatch(action);
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                view.move_cursor(true);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                view.move_cursor(false);
            }
            KeyCode::Tab if tab == Tab::Buttons => {
                let count = view.paging.bracketed_pages().len();
                view.page_focus = (view.page_focus + 1) % count.max(1);
            }
            KeyCode::BackTab if tab == Tab::Buttons => {
                let count = view.paging.bracketed_pages().len().max(1);
                view.page_focus = (view.page_focus + count - 1) % count;
            }
            KeyCode::Char('a') if tab == Tab::Infinite => self.toggle_auto_load(),
            KeyCode::Char('[') => self.step_items_per_page(false),
            KeyCode::Char(']') => self.step_items_per_page(true),
            KeyCode::Enter if tab == Tab::List => self.open_selector(),
            _ => {}
        }
    }

    fn open_selector(&mut self) {
        match self.list.controls() {
            Some(Controls::List { selector, .. }) => {
                self.selector_cursor = selector.selected.unwrap_or(0);
                self.popup = PopupState::PageSelector;
            }
            _ => self.flash("Nothing to page through", false),
        }
    }

    /// Handle keys while the list-mode page selector is open
    fn handle_selector_key(&mut self, key: KeyEvent) {
        let Some(Controls::List { selector, .. }) = self.list.controls() else {
            self.popup = PopupState::None;
            return;
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selector_cursor + 1 < selector.entries.len() {
                    self.selector_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selector_cursor = self.selector_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(page) = selector.entries.get(self.selector_cursor) {
                    self.list.dispatch(ControlAction::Page(*page));
                }
                self.popup = PopupState::None;
            }
            KeyCode::Esc | KeyCode::Char('q') => self.popup = PopupState::None,
            _ => {}
        }
    }

    /// Handle keys in Settings tab
    fn handle_settings_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.settings_selected + 1 < SETTINGS.len() {
                    self.settings_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.settings_selected = self.settings_selected.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.settings_selected {
                0 => {
                    self.config.theme = self.config.theme.next();
                    self.theme = Theme::from_name(self.config.theme);
                }
                1 => {
                    self.config.cycle_items_per_page();
                    let size = self.config.paging.items_per_page;
                    for view in self.views_mut() {
                        view.set_items_per_page(size)?;
                    }
                }
                2 => {
                    self.config.cycle_pages_to_show();
                    let window = self.config.paging.pages_to_show;
                    for view in self.views_mut() {
                        view.paging.set_pages_to_show(window)?;
                        view.sync_page_focus();
                    }
                }
                3 => self.toggle_auto_load(),
                4 => self.save_config(),
                _ => {}
            },
            KeyCode::Char('s') => self.save_config(),
            _ => {}
        }
        Ok(())
    }

    fn save_config(&mut self) {
        self.config.dataset_size = self.dataset.len();
        match self.config.save() {
            Ok(()) => self.flash("Config saved", false),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "config save failed");
                self.popup = PopupState::Error {
                    title: "Save failed".to_string(),
                    message: format!("{:#}", e),
                };
            }
        }
    }

    fn toggle_auto_load(&mut self) {
        self.config.auto_load = !self.config.auto_load;
        let mode = ControlMode::Infinite {
            auto_load: self.config.auto_load,
        };
        self.infinite.surface.set_mode(mode);
        self.infinite.recheck_visibility();
        self.flash(&format!("Infinite mode: {}", mode.label()), false);
    }

    fn step_items_per_page(&mut self, up: bool) {
        let Some(view) = self.active_view_mut() else {
            return;
        };
        let current = view.paging.options().items_per_page;
        let next = if up { current + 1 } else { current.saturating_sub(1).max(1) };
        if let Err(e) = view.set_items_per_page(next) {
            self.flash(&e.to_string(), true);
        }
    }

    /// Same rows in a new order; every view keeps its page
    pub fn refetch(&mut self) {
        self.dataset.refetch();
        let records = self.dataset.records().to_vec();
        for view in self.views_mut() {
            view.replace_items(records.clone());
        }
        self.flash("Data refetched", false);
    }

    /// Different number of rows; every view goes back to page 1
    pub fn resize_dataset(&mut self, size: usize) {
        if size == self.dataset.len() {
            return;
        }
        self.dataset.resize(size);
        let records = self.dataset.records().to_vec();
        for view in self.views_mut() {
            view.replace_items(records.clone());
        }
        info!(records = size, "dataset resized");
        self.flash(&format!("{} records", size), false);
    }

    fn flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.to_string(), is_error, Instant::now()));
    }
}
