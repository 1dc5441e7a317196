//! Pagination control surface
//!
//! Maps paging state to what a UI offers the user, and user actions back into
//! the paging engine:
//! - Modes: page buttons, page list, load more
//! - Affordance descriptions for renderers
//! - Dispatch, page-change observer and the auto-load visibility signal

mod affordance;
mod mode;
mod surface;

pub use affordance::{page_slots, Controls, LoadMore, NavButton, NavButtons, PageSelector, PageSlot};
pub use mode::{ControlAction, ControlMode};
pub use surface::{ControlSurface, PageChange, PageObserver, ScrollHint};
