//! Control surface: routes user actions into a pager and reports page changes.

use std::fmt;

use tracing::debug;

use crate::paging::{PageEdges, Paging};

use super::affordance::Controls;
use super::mode::{ControlAction, ControlMode};

/// Callback invoked with the new page after every effective page change.
pub type PageObserver = Box<dyn FnMut(usize, PageEdges)>;

/// Where the host should scroll its item list after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollHint {
    /// A new page replaced the items: back to the top.
    Top,
    /// More items were appended: towards the newly loaded ones.
    Bottom,
}

/// A page change caused by a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub page: usize,
    pub edges: PageEdges,
    pub scroll: ScrollHint,
}

/// Behavior layer between a renderer and one [`Paging`] handle.
///
/// Disabled or absent affordances never reach the pager, and the observer
/// fires exactly once per action that actually moved the page.
pub struct ControlSurface {
    mode: ControlMode,
    observer: Option<PageObserver>,
    visible: bool,
}

impl fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlSurface")
            .field("mode", &self.mode)
            .field("observer", &self.observer.is_some())
            .field("visible", &self.visible)
            .finish()
    }
}

impl ControlSurface {
    pub fn new(mode: ControlMode) -> Self {
        Self {
            mode,
            observer: None,
            visible: false,
        }
    }

    /// Attach a page-change observer.
    pub fn with_observer(mut self, observer: impl FnMut(usize, PageEdges) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    /// What to draw for the pager's current state; `None` means draw nothing.
    pub fn controls<T>(&self, paging: &Paging<T>) -> Option<Controls> {
        Controls::derive(self.mode, paging)
    }

    /// Whether `action` maps to an enabled affordance right now.
    pub fn is_enabled<T>(&self, paging: &Paging<T>, action: ControlAction) -> bool {
        if !paging.render_controls() {
            return false;
        }

        match (self.mode, action) {
            (ControlMode::Infinite { .. }, ControlAction::LoadMore) => !paging.is_last_page(),
            (ControlMode::Infinite { .. }, _) => false,
            (_, ControlAction::LoadMore) => false,
            (_, ControlAction::First | ControlAction::Back) => !paging.is_first_page(),
            (_, ControlAction::Next | ControlAction::Last) => !paging.is_last_page(),
            (ControlMode::Buttons, ControlAction::Page(page)) => {
                page != paging.current_page() && paging.bracketed_pages().contains(&page)
            }
            (ControlMode::List, ControlAction::Page(page)) => {
                page != paging.current_page() && paging.visible_pages().contains(&page)
            }
        }
    }

    /// Route a user action into the pager.
    ///
    /// Returns the resulting change, or `None` when the action was refused or
    /// left the page where it was.
    pub fn dispatch<T>(
        &mut self,
        paging: &mut Paging<T>,
        action: ControlAction,
    ) -> Option<PageChange> {
        if !self.is_enabled(paging, action) {
            debug!(?action, mode = ?self.mode, page = paging.current_page(), "ignored disabled control");
            return None;
        }

        let changed = match action {
            ControlAction::First => paging.first(),
            ControlAction::Back => paging.back(),
            ControlAction::Next | ControlAction::LoadMore => paging.next(),
            ControlAction::Last => paging.last(),
            ControlAction::Page(page) => paging.set_page(page),
        };

        if !changed {
            return None;
        }

        let change = PageChange {
            page: paging.current_page(),
            edges: paging.edges(),
            scroll: match action {
                ControlAction::LoadMore => ScrollHint::Bottom,
                _ => ScrollHint::Top,
            },
        };

        debug!(page = change.page, ?action, "control changed page");
        if let Some(observer) = self.observer.as_mut() {
            observer(change.page, change.edges);
        }

        Some(change)
    }

    /// Feed the host's visibility signal for the load-more affordance.
    ///
    /// With auto load enabled, a false to true transition loads the next
    /// page. Staying visible does not load again.
    pub fn set_visible<T>(&mut self, paging: &mut Paging<T>, visible: bool) -> Option<PageChange> {
        let became_visible = visible && !self.visible;
        self.visible = visible;

        match self.mode {
            ControlMode::Infinite { auto_load: true } if became_visible => {
                self.dispatch(paging, ControlAction::LoadMore)
            }
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::PagingOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(usize, PageEdges)>>>;

    fn thousand(options: PagingOptions) -> Paging<u32> {
        Paging::new((0..1000).collect(), options).unwrap()
    }

    fn observed(mode: ControlMode) -> (ControlSurface, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let surface = ControlSurface::new(mode)
            .with_observer(move |page, edges| sink.borrow_mut().push((page, edges)));
        (surface, calls)
    }

    #[test]
    fn test_dispatch_navigates_and_notifies_once() {
        let mut paging = thousand(PagingOptions::default());
        let (mut surface, calls) = observed(ControlMode::Buttons);

        let change = surface.dispatch(&mut paging, ControlAction::Next).unwrap();
        assert_eq!(change.page, 2);
        assert_eq!(change.scroll, ScrollHint::Top);
        assert_eq!(paging.current_page(), 2);

        surface.dispatch(&mut paging, ControlAction::Last).unwrap();
        assert_eq!(paging.current_page(), 100);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            (
                100,
                PageEdges {
                    is_first: false,
                    is_last: true
                }
            )
        );
    }

    #[test]
    fn test_disabled_actions_never_reach_pager() {
        let mut paging = thousand(PagingOptions::default());
        let (mut surface, calls) = observed(ControlMode::Buttons);

        assert!(surface.dispatch(&mut paging, ControlAction::Back).is_none());
        assert!(surface.dispatch(&mut paging, ControlAction::First).is_none());
        assert!(surface.dispatch(&mut paging, ControlAction::Page(1)).is_none());
        assert!(surface.dispatch(&mut paging, ControlAction::LoadMore).is_none());
        assert_eq!(paging.current_page(), 1);

        surface.dispatch(&mut paging, ControlAction::Last);
        assert!(surface.dispatch(&mut paging, ControlAction::Next).is_none());
        assert!(surface.dispatch(&mut paging, ControlAction::Last).is_none());
        assert_eq!(paging.current_page(), 100);

        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_page_buttons_only_for_exposed_pages() {
        let mut paging = thousand(PagingOptions {
            pages_to_show: Some(5),
            ..PagingOptions::default()
        });
        let mut surface = ControlSurface::new(ControlMode::Buttons);

        // 50 is neither in the window nor an edge page.
        assert!(surface.dispatch(&mut paging, ControlAction::Page(50)).is_none());
        assert_eq!(paging.current_page(), 1);

        let change = surface.dispatch(&mut paging, ControlAction::Page(100)).unwrap();
        assert_eq!(change.page, 100);
        assert!(change.edges.is_last);

        let mut list = ControlSurface::new(ControlMode::List);
        assert!(list.is_enabled(&paging, ControlAction::Page(97)));
        assert!(!list.is_enabled(&paging, ControlAction::Page(1)));
        assert!(list.dispatch(&mut paging, ControlAction::Page(97)).is_some());
        assert_eq!(paging.current_page(), 97);
    }

    #[test]
    fn test_nothing_enabled_without_controls() {
        let mut paging: Paging<u32> = Paging::new(Vec::new(), PagingOptions::default()).unwrap();
        let (mut surface, calls) = observed(ControlMode::Buttons);

        assert!(surface.controls(&paging).is_none());
        for action in [
            ControlAction::First,
            ControlAction::Back,
            ControlAction::Next,
            ControlAction::Last,
            ControlAction::Page(1),
        ] {
            assert!(surface.dispatch(&mut paging, action).is_none());
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_load_more_accumulates() {
        let mut paging = thousand(PagingOptions {
            infinite: true,
            ..PagingOptions::default()
        });
        let (mut surface, calls) = observed(ControlMode::Infinite { auto_load: false });

        assert!(surface.dispatch(&mut paging, ControlAction::Next).is_none());

        let change = surface.dispatch(&mut paging, ControlAction::LoadMore).unwrap();
        assert_eq!(change.scroll, ScrollHint::Bottom);
        assert_eq!(paging.visible_items().len(), 20);
        assert_eq!(paging.items_left(), 980);

        while surface.dispatch(&mut paging, ControlAction::LoadMore).is_some() {}
        assert_eq!(paging.visible_items().len(), 1000);
        assert!(surface.controls(&paging).is_none());
        assert_eq!(calls.borrow().len(), 99);
    }

    #[test]
    fn test_auto_load_fires_on_rising_edge_only() {
        let mut paging = thousand(PagingOptions {
            infinite: true,
            ..PagingOptions::default()
        });
        let (mut surface, calls) = observed(ControlMode::Infinite { auto_load: true });

        assert!(surface.set_visible(&mut paging, false).is_none());
        assert!(surface.set_visible(&mut paging, true).is_some());
        assert_eq!(paging.current_page(), 2);

        // Still visible: no further loads.
        assert!(surface.set_visible(&mut paging, true).is_none());
        assert_eq!(paging.current_page(), 2);

        surface.set_visible(&mut paging, false);
        surface.set_visible(&mut paging, true);
        assert_eq!(paging.current_page(), 3);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_visibility_ignored_without_auto_load() {
        let mut paging = thousand(PagingOptions {
            infinite: true,
            ..PagingOptions::default()
        });
        let mut surface = ControlSurface::new(ControlMode::Infinite { auto_load: false });

        assert!(surface.set_visible(&mut paging, true).is_none());
        assert!(surface.is_visible());
        assert_eq!(paging.current_page(), 1);
    }
}
