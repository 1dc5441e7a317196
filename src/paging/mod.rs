//! Paging engine
//!
//! Pure derivation of page count, current page, page-number window and the
//! visible slice of a collection, plus clamped navigation:
//! - Options and validation
//! - Page math and the sliding window
//! - The `Paging` handle

mod engine;
mod error;
mod options;
pub mod window;

pub use engine::{PageEdges, Paging, PagingState};
pub use error::PagingError;
pub use options::{PagingOptions, DEFAULT_ITEMS_PER_PAGE};
