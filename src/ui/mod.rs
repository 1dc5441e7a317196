//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and colors
//! - Reusable widgets, including the pagination controls
//! - Main render loop

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
