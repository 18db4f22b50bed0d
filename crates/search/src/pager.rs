//! Pagination windowing
//!
//! Fixed-size page windows over an in-memory slice. Page numbers are
//! 1-based everywhere; out-of-range requests clamp into the valid range
//! instead of panicking. The numbered-button window shows at most
//! [`BUTTON_WINDOW`] page numbers centered on the current page.

use std::ops::RangeInclusive;

/// Configurations shown per catalog page
pub const PAGE_SIZE: usize = 20;

/// Maximum numbered page buttons shown at once
pub const BUTTON_WINDOW: usize = 5;

/// Fixed-size page windowing over a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new(PAGE_SIZE)
    }
}

impl Pager {
    /// Pager with the given page size (minimum 1)
    pub fn new(per_page: usize) -> Self {
        Pager {
            per_page: per_page.max(1),
        }
    }

    /// Page size
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total pages for a list of `len` items
    ///
    /// An empty list still has one (empty) page, so a current page always
    /// exists.
    pub fn total_pages(&self, len: usize) -> usize {
        if len == 0 {
            1
        } else {
            len.div_ceil(self.per_page)
        }
    }

    /// Clamp a 1-based page request into the valid range for `len` items
    pub fn clamp_page(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len))
    }

    /// Select the window for a (clamped) 1-based page request
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> PageView<'a, T> {
        let total_items = items.len();
        let total_pages = self.total_pages(total_items);
        let page = self.clamp_page(page, total_items);

        let start = (page - 1) * self.per_page;
        let end = (start + self.per_page).min(total_items);
        // start <= end always holds after clamping: start < total_items
        // unless the list is empty, where start == end == 0.
        let window = &items[start.min(total_items)..end];

        PageView {
            items: window,
            page,
            total_pages,
            total_items,
            start_ordinal: start + 1,
            end_ordinal: end,
        }
    }

    /// Numbered-button window: at most [`BUTTON_WINDOW`] pages, starting at
    /// `max(1, current - 2)` and clamped to the last page
    pub fn button_window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
        let start = current.saturating_sub(2).max(1);
        let end = (start + BUTTON_WINDOW - 1).min(total_pages.max(1));
        start..=end
    }
}

/// One rendered page of a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// Items in this page window
    pub items: &'a [T],
    /// Current 1-based page number (clamped)
    pub page: usize,
    /// Total page count
    pub total_pages: usize,
    /// Total items across all pages
    pub total_items: usize,
    /// 1-based ordinal of the first item slot on this page
    ///
    /// For an empty list this is 1 while `end_ordinal` is 0, matching the
    /// "Showing 1-0 of 0" label convention.
    pub start_ordinal: usize,
    /// 1-based ordinal of the last item on this page (0 when empty)
    pub end_ordinal: usize,
}

impl<T> PageView<'_, T> {
    /// Whether a "Previous" control should be shown
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a "Next" control should be shown
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Pager::default();
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(20), 1);
        assert_eq!(pager.total_pages(21), 2);
        assert_eq!(pager.total_pages(166_140), 8_307);
    }

    #[test]
    fn test_first_page_window() {
        let list = items(50);
        let view = Pager::default().page(&list, 1);
        assert_eq!(view.items, &list[0..20]);
        assert_eq!(view.start_ordinal, 1);
        assert_eq!(view.end_ordinal, 20);
        assert!(!view.has_prev());
        assert!(view.has_next());
    }

    #[test]
    fn test_last_page_partial_window() {
        let list = items(50);
        let view = Pager::default().page(&list, 3);
        assert_eq!(view.items, &list[40..50]);
        assert_eq!(view.start_ordinal, 41);
        assert_eq!(view.end_ordinal, 50);
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_short_list_single_page() {
        let list = items(7);
        let view = Pager::default().page(&list, 1);
        assert_eq!(view.items.len(), 7);
        assert_eq!(view.total_pages, 1);
        assert!(!view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let list = items(50);
        let high = Pager::default().page(&list, 999);
        assert_eq!(high.page, 3);
        assert_eq!(high.items, &list[40..50]);

        let zero = Pager::default().page(&list, 0);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items, &list[0..20]);
    }

    #[test]
    fn test_empty_list_does_not_panic() {
        let list: Vec<usize> = vec![];
        let view = Pager::default().page(&list, 5);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
        assert_eq!(view.start_ordinal, 1);
        assert_eq!(view.end_ordinal, 0);
        assert!(!view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_button_window_start_of_range() {
        assert_eq!(Pager::button_window(1, 100), 1..=5);
        assert_eq!(Pager::button_window(2, 100), 1..=5);
        assert_eq!(Pager::button_window(3, 100), 1..=5);
        assert_eq!(Pager::button_window(4, 100), 2..=6);
    }

    #[test]
    fn test_button_window_middle() {
        assert_eq!(Pager::button_window(50, 100), 48..=52);
    }

    #[test]
    fn test_button_window_end_of_range() {
        assert_eq!(Pager::button_window(100, 100), 98..=100);
        assert_eq!(Pager::button_window(99, 100), 97..=100);
    }

    #[test]
    fn test_button_window_few_pages() {
        assert_eq!(Pager::button_window(1, 3), 1..=3);
        assert_eq!(Pager::button_window(1, 1), 1..=1);
    }

    #[test]
    fn test_custom_page_size() {
        let pager = Pager::new(5);
        let list = items(12);
        assert_eq!(pager.total_pages(12), 3);
        let view = pager.page(&list, 2);
        assert_eq!(view.items, &list[5..10]);
    }

    #[test]
    fn test_zero_page_size_coerced() {
        let pager = Pager::new(0);
        assert_eq!(pager.per_page(), 1);
    }
}
