//! Paging options and their validation.

use serde::{Deserialize, Serialize};

use super::error::PagingError;

/// Default page size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Options controlling how a collection is split into pages.
///
/// The collection itself is handed to [`super::Paging::new`] separately so the
/// options can live in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingOptions {
    /// Page size in paged mode, increment size in infinite mode.
    pub items_per_page: usize,
    /// Initial page (1-based).
    pub start_page: usize,
    /// Upper bound on how many page numbers are exposed at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_to_show: Option<usize>,
    /// Show the cumulative prefix through the current page instead of one page.
    pub infinite: bool,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            start_page: 1,
            pages_to_show: None,
            infinite: false,
        }
    }
}

impl PagingOptions {
    /// Reject configurations that cannot produce a consistent pager.
    pub fn validate(&self) -> Result<(), PagingError> {
        if self.items_per_page == 0 {
            return Err(PagingError::ZeroItemsPerPage);
        }
        if self.start_page == 0 {
            return Err(PagingError::ZeroStartPage);
        }
        if self.pages_to_show == Some(0) {
            return Err(PagingError::ZeroPagesToShow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PagingOptions::default();
        assert_eq!(options.items_per_page, 10);
        assert_eq!(options.start_page, 1);
        assert_eq!(options.pages_to_show, None);
        assert!(!options.infinite);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let zero_size = PagingOptions {
            items_per_page: 0,
            ..PagingOptions::default()
        };
        assert_eq!(zero_size.validate(), Err(PagingError::ZeroItemsPerPage));

        let zero_start = PagingOptions {
            start_page: 0,
            ..PagingOptions::default()
        };
        assert_eq!(zero_start.validate(), Err(PagingError::ZeroStartPage));

        let zero_window = PagingOptions {
            pages_to_show: Some(0),
            ..PagingOptions::default()
        };
        assert_eq!(zero_window.validate(), Err(PagingError::ZeroPagesToShow));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: PagingOptions = toml::from_str("pages_to_show = 5").unwrap();
        assert_eq!(options.pages_to_show, Some(5));
        assert_eq!(options.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(options.start_page, 1);
    }
}
