//! Core data types for pagekit
//!
//! Shared data structures used by the demo application.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::control::ControlMode;

/// A row in the demo dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub created: DateTime<Local>,
    pub size: u64,
}

impl Record {
    /// Format the creation date for display
    pub fn formatted_date(&self) -> String {
        self.created.format("%d.%m.%y %H:%M").to_string()
    }

    /// Format the size for display
    pub fn formatted_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Buttons,
    List,
    Infinite,
    Settings,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Buttons, Tab::List, Tab::Infinite, Tab::Settings]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Buttons => 0,
            Tab::List => 1,
            Tab::Infinite => 2,
            Tab::Settings => 3,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Buttons,
            1 => Tab::List,
            2 => Tab::Infinite,
            3 => Tab::Settings,
            _ => Tab::Buttons,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Buttons => "Buttons",
            Tab::List => "List",
            Tab::Infinite => "Infinite",
            Tab::Settings => "Settings",
        }
    }

    /// Control mode shown on this tab (none for Settings)
    pub fn control_mode(&self, auto_load: bool) -> Option<ControlMode> {
        match self {
            Tab::Buttons => Some(ControlMode::Buttons),
            Tab::List => Some(ControlMode::List),
            Tab::Infinite => Some(ControlMode::Infinite { auto_load }),
            Tab::Settings => None,
        }
    }
}

// Helper functions

/// Format bytes to human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1500), "1.5 KB");
        assert_eq!(format_bytes(1_500_000), "1.4 MB");
        assert_eq!(format_bytes(1_500_000_000), "1.4 GB");
    }

    #[test]
    fn test_tab_index_roundtrip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), *tab);
        }
        assert_eq!(Tab::from_index(42), Tab::Buttons);
    }

    #[test]
    fn test_tab_control_mode() {
        assert_eq!(Tab::Buttons.control_mode(false), Some(ControlMode::Buttons));
        assert_eq!(
            Tab::Infinite.control_mode(true),
            Some(ControlMode::Infinite { auto_load: true })
        );
        assert_eq!(Tab::Settings.control_mode(true), None);
    }
}
