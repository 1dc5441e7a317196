//! Affordances a renderer draws for each control mode.
//!
//! These are plain descriptions derived from a pager: what to show, which
//! entry is active, and what is disabled. Drawing them is up to the host.

use crate::paging::Paging;

use super::mode::{ControlAction, ControlMode};

/// A first/back/next/last button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub action: ControlAction,
    /// Page the button leads to (equal to the current page when disabled).
    pub target: usize,
    pub enabled: bool,
}

/// The four flanking navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub first: NavButton,
    pub back: NavButton,
    pub next: NavButton,
    pub last: NavButton,
}

impl NavButtons {
    fn from_paging<T>(paging: &Paging<T>) -> Self {
        let current = paging.current_page();
        let is_first = paging.is_first_page();
        let is_last = paging.is_last_page();

        let button = |action, target, enabled| NavButton {
            action,
            target: if enabled { target } else { current },
            enabled,
        };

        Self {
            first: button(ControlAction::First, 1, !is_first),
            back: button(ControlAction::Back, current.saturating_sub(1), !is_first),
            next: button(ControlAction::Next, current + 1, !is_last),
            last: button(ControlAction::Last, paging.page_count(), !is_last),
        }
    }

    /// Leading pair (first, back).
    pub fn leading(&self) -> [NavButton; 2] {
        [self.first, self.back]
    }

    /// Trailing pair (next, last).
    pub fn trailing(&self) -> [NavButton; 2] {
        [self.next, self.last]
    }
}

/// One slot in a row of page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page { number: usize, active: bool },
    /// Skipped page numbers between two buttons.
    Gap,
}

/// A selector over the page-number window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelector {
    pub entries: Vec<usize>,
    /// Index into `entries` of the current page.
    pub selected: Option<usize>,
}

/// The load-more action with its "N more" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMore {
    pub items_left: usize,
    pub auto_load: bool,
}

/// Everything a renderer needs for one control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controls {
    Buttons {
        nav: NavButtons,
        pages: Vec<PageSlot>,
    },
    List {
        nav: NavButtons,
        selector: PageSelector,
    },
    LoadMore(LoadMore),
}

impl Controls {
    /// Derive the affordances for `mode`, or `None` when nothing should render.
    pub fn derive<T>(mode: ControlMode, paging: &Paging<T>) -> Option<Self> {
        if !paging.render_controls() {
            return None;
        }

        let controls = match mode {
            ControlMode::Buttons => Controls::Buttons {
                nav: NavButtons::from_paging(paging),
                pages: page_slots(&paging.bracketed_pages(), paging.current_page()),
            },
            ControlMode::List => {
                let entries = paging.visible_pages();
                let selected = entries
                    .iter()
                    .position(|page| *page == paging.current_page());
                Controls::List {
                    nav: NavButtons::from_paging(paging),
                    selector: PageSelector { entries, selected },
                }
            }
            ControlMode::Infinite { auto_load } => Controls::LoadMore(LoadMore {
                items_left: paging.items_left(),
                auto_load,
            }),
        };

        Some(controls)
    }
}

/// Lay out page numbers as buttons, marking jumps in numbering with a gap.
pub fn page_slots(pages: &[usize], current_page: usize) -> Vec<PageSlot> {
    let mut slots = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;

    for &number in pages {
        if let Some(prev) = previous {
            if number > prev + 1 {
                slots.push(PageSlot::Gap);
            }
        }
        slots.push(PageSlot::Page {
            number,
            active: number == current_page,
        });
        previous = Some(number);
    }

    slots
}
