//! Pure page math: page counts, clamping, slice bounds and the page-number window.

use std::ops::Range;

/// Number of pages for `item_count` items. Never less than 1, even when empty.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of one page of items.
pub fn page_range(item_count: usize, per_page: usize, page: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    start..end
}

/// Index range of every item up to and including `page` (infinite mode).
pub fn cumulative_range(item_count: usize, per_page: usize, page: usize) -> Range<usize> {
    0..page.saturating_mul(per_page.max(1)).min(item_count)
}

/// Bounds of the page-number window as 0-based indices into `1..=page_count`.
///
/// Without a limit, or when the limit covers every page, the window is all
/// pages. Otherwise the current page sits roughly in the middle; on the last
/// page the trailing window is shown. With an even limit the window leans one
/// page to the right of the current page.
pub fn window_bounds(
    current_page: usize,
    page_count: usize,
    pages_to_show: Option<usize>,
) -> (usize, usize) {
    let pages_to_show = match pages_to_show {
        Some(limit) if limit > 0 && limit < page_count => limit,
        _ => return (0, page_count),
    };

    let middle = pages_to_show.div_ceil(2);
    let start = if current_page == page_count {
        page_count - pages_to_show
    } else {
        current_page.saturating_sub(middle)
    };
    let end = (start + pages_to_show).min(page_count);

    (start, end)
}

/// Page numbers inside the window.
pub fn window_pages(
    current_page: usize,
    page_count: usize,
    pages_to_show: Option<usize>,
) -> Vec<usize> {
    let (start, end) = window_bounds(current_page, page_count, pages_to_show);
    (start + 1..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(1000, 10), 100);
        assert_eq!(total_pages(1000, 13), 77);
        assert_eq!(total_pages(30, 15), 2);
        assert_eq!(total_pages(31, 15), 3);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(99, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1000, 10, 1), 0..10);
        assert_eq!(page_range(1000, 10, 100), 990..1000);
        assert_eq!(page_range(25, 10, 3), 20..25);
        assert_eq!(page_range(0, 10, 1), 0..0);
    }

    #[test]
    fn test_cumulative_range() {
        assert_eq!(cumulative_range(1000, 10, 5), 0..50);
        assert_eq!(cumulative_range(25, 10, 3), 0..25);
        assert_eq!(cumulative_range(0, 10, 1), 0..0);
    }

    #[test]
    fn test_window_without_limit_shows_everything() {
        assert_eq!(window_pages(3, 5, None), vec![1, 2, 3, 4, 5]);
        assert_eq!(window_pages(3, 5, Some(5)), vec![1, 2, 3, 4, 5]);
        assert_eq!(window_pages(3, 5, Some(9)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_slides_with_current_page() {
        assert_eq!(window_pages(1, 100, Some(5)), vec![1, 2, 3, 4, 5]);
        assert_eq!(window_pages(8, 100, Some(5)), vec![6, 7, 8, 9, 10]);
        assert_eq!(window_pages(11, 100, Some(5)), vec![9, 10, 11, 12, 13]);
        assert_eq!(window_pages(100, 100, Some(5)), vec![96, 97, 98, 99, 100]);
    }

    #[test]
    fn test_window_near_end_is_truncated() {
        // Only the very last page snaps to a full trailing window.
        assert_eq!(window_pages(99, 100, Some(5)), vec![97, 98, 99, 100]);
    }

    #[test]
    fn test_window_even_limit_leans_right() {
        assert_eq!(window_pages(10, 100, Some(4)), vec![9, 10, 11, 12]);
    }
}
