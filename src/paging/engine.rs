//! The paging handle: derived page state plus navigation over an owned collection.

use serde::Serialize;
use tracing::{debug, trace};

use super::error::PagingError;
use super::options::PagingOptions;
use super::window::{clamp_page, cumulative_range, page_range, total_pages, window_pages};

/// Whether a page sits at either end of the page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageEdges {
    pub is_first: bool,
    pub is_last: bool,
}

/// Serializable view of a pager's derived state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingState {
    pub page_count: usize,
    pub current_page: usize,
    pub visible_pages: Vec<usize>,
    pub visible_item_count: usize,
    pub items_left: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub render_controls: bool,
}

/// Paging state for one view over a collection.
///
/// Page count and current page are recomputed whenever the item count or the
/// page size changes. Replacing the items with a collection of the same length
/// keeps the current position.
#[derive(Debug, Clone)]
pub struct Paging<T> {
    items: Vec<T>,
    options: PagingOptions,
    page_count: usize,
    current_page: usize,
    all_pages: Vec<usize>,
}

impl<T> Paging<T> {
    /// Build a pager, starting on `options.start_page` (clamped).
    pub fn new(items: Vec<T>, options: PagingOptions) -> Result<Self, PagingError> {
        options.validate()?;

        let page_count = total_pages(items.len(), options.items_per_page);
        let current_page = clamp_page(options.start_page, page_count);

        debug!(
            items = items.len(),
            items_per_page = options.items_per_page,
            page_count,
            current_page,
            "pager created"
        );

        Ok(Self {
            items,
            options,
            page_count,
            current_page,
            all_pages: (1..=page_count).collect(),
        })
    }

    // === Inputs ===

    /// Replace the collection. Resets to page 1 only if the length changed.
    pub fn set_items(&mut self, items: Vec<T>) {
        let length_changed = items.len() != self.items.len();
        self.items = items;
        if length_changed {
            self.reset();
        }
    }

    /// Change the page size. Resets to page 1 if it differs from the current one.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), PagingError> {
        if items_per_page == 0 {
            return Err(PagingError::ZeroItemsPerPage);
        }
        if items_per_page != self.options.items_per_page {
            self.options.items_per_page = items_per_page;
            self.reset();
        }
        Ok(())
    }

    /// Change the start page. A new value moves the pager there (clamped).
    pub fn set_start_page(&mut self, start_page: usize) -> Result<(), PagingError> {
        if start_page == 0 {
            return Err(PagingError::ZeroStartPage);
        }
        if start_page != self.options.start_page {
            self.options.start_page = start_page;
            self.current_page = clamp_page(start_page, self.page_count);
            debug!(current_page = self.current_page, "start page changed");
        }
        Ok(())
    }

    /// Change the page-number window size.
    pub fn set_pages_to_show(&mut self, pages_to_show: Option<usize>) -> Result<(), PagingError> {
        if pages_to_show == Some(0) {
            return Err(PagingError::ZeroPagesToShow);
        }
        self.options.pages_to_show = pages_to_show;
        Ok(())
    }

    /// Switch between one-page and cumulative slicing.
    pub fn set_infinite(&mut self, infinite: bool) {
        self.options.infinite = infinite;
    }

    /// Apply a full set of options, keeping each setter's reset semantics.
    pub fn set_options(&mut self, options: PagingOptions) -> Result<(), PagingError> {
        options.validate()?;
        self.set_items_per_page(options.items_per_page)?;
        self.set_start_page(options.start_page)?;
        self.set_pages_to_show(options.pages_to_show)?;
        self.set_infinite(options.infinite);
        Ok(())
    }

    fn reset(&mut self) {
        self.page_count = total_pages(self.items.len(), self.options.items_per_page);
        self.all_pages = (1..=self.page_count).collect();
        self.current_page = 1;
        debug!(
            items = self.items.len(),
            items_per_page = self.options.items_per_page,
            page_count = self.page_count,
            "pager reset to first page"
        );
    }

    // === Navigation ===

    /// Go to `page`, clamped into range. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.page_count);
        if target == self.current_page {
            return false;
        }
        trace!(from = self.current_page, to = target, "page changed");
        self.current_page = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn back(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last(&mut self) -> bool {
        self.set_page(self.page_count)
    }

    // === Queries ===

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    /// The full, unsliced collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Every page number, `1..=page_count`.
    pub fn all_pages(&self) -> &[usize] {
        &self.all_pages
    }

    /// Page numbers to expose, bounded by `pages_to_show` when set.
    pub fn visible_pages(&self) -> Vec<usize> {
        window_pages(
            self.current_page,
            self.page_count,
            self.options.pages_to_show,
        )
    }

    /// The visible window with the first and last page added when missing.
    pub fn bracketed_pages(&self) -> Vec<usize> {
        let mut pages = self.visible_pages();
        if pages.first() != Some(&1) {
            pages.insert(0, 1);
        }
        if pages.last() != Some(&self.page_count) {
            pages.push(self.page_count);
        }
        pages
    }

    /// Items on the current page, or every item through it in infinite mode.
    pub fn visible_items(&self) -> &[T] {
        let range = if self.options.infinite {
            cumulative_range(self.items.len(), self.options.items_per_page, self.current_page)
        } else {
            page_range(self.items.len(), self.options.items_per_page, self.current_page)
        };
        &self.items[range]
    }

    /// Items not yet shown; the "N more" count in infinite mode.
    pub fn items_left(&self) -> usize {
        self.items.len() - self.visible_items().len()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.page_count
    }

    pub fn edges(&self) -> PageEdges {
        PageEdges {
            is_first: self.is_first_page(),
            is_last: self.is_last_page(),
        }
    }

    /// Whether any pagination control should be drawn at all.
    ///
    /// In infinite mode there is nothing left to load on the last page.
    pub fn render_controls(&self) -> bool {
        self.page_count > 1 && !(self.options.infinite && self.is_last_page())
    }

    pub fn snapshot(&self) -> PagingState {
        PagingState {
            page_count: self.page_count,
            current_page: self.current_page,
            visible_pages: self.visible_pages(),
            visible_item_count: self.visible_items().len(),
            items_left: self.items_left(),
            is_first_page: self.is_first_page(),
            is_last_page: self.is_last_page(),
            render_controls: self.render_controls(),
        }
    }
}
