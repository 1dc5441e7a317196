//! pagekit - paging engine and pagination controls
//!
//! - `paging`: page count, current page, page-number window and visible slice
//! - `control`: page buttons, page list and load-more behavior on top of a pager
//! - `app`, `ui`, `config`, `data`, `types`: the terminal demo built on both

pub mod app;
pub mod config;
pub mod control;
pub mod data;
pub mod paging;
pub mod types;
pub mod ui;
