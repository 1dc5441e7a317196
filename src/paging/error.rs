//! Configuration errors raised when building or reconfiguring a pager.

use thiserror::Error;

/// Invalid paging configuration.
///
/// Only construction and option setters return this. Navigation never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("items per page must be at least 1")]
    ZeroItemsPerPage,

    #[error("start page must be at least 1 (pages are 1-based)")]
    ZeroStartPage,

    #[error("pages to show must be at least 1 when set")]
    ZeroPagesToShow,
}
