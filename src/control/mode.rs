//! Interaction modes and the user actions they accept.

/// How a paged view exposes navigation. One mode per control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// One button per page number, flanked by first/back/next/last.
    Buttons,
    /// A single selector listing the page-number window.
    List,
    /// A "load more" action; with `auto_load` it fires when it scrolls into view.
    Infinite { auto_load: bool },
}

impl ControlMode {
    pub fn label(&self) -> &'static str {
        match self {
            ControlMode::Buttons => "Buttons",
            ControlMode::List => "List",
            ControlMode::Infinite { auto_load: false } => "Load more",
            ControlMode::Infinite { auto_load: true } => "Auto load",
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ControlMode::Infinite { .. })
    }
}

/// A user action routed through a control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    First,
    Back,
    Next,
    Last,
    /// Jump to a specific page number.
    Page(usize),
    LoadMore,
}

impl ControlAction {
    pub fn label(&self) -> String {
        match self {
            ControlAction::First => "«".to_string(),
            ControlAction::Back => "‹".to_string(),
            ControlAction::Next => "›".to_string(),
            ControlAction::Last => "»".to_string(),
            ControlAction::Page(page) => page.to_string(),
            ControlAction::LoadMore => "Load more".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(ControlMode::Buttons.label(), "Buttons");
        assert_eq!(ControlMode::Infinite { auto_load: true }.label(), "Auto load");
        assert!(ControlMode::Infinite { auto_load: false }.is_infinite());
        assert!(!ControlMode::List.is_infinite());
    }
}
