//! Pagination controls and result-count label
//!
//! Fragment builders for the pagination strip: "Previous" only past the
//! first page, "Next" only before the last, at most five numbered buttons
//! centered on the current page with the current page highlighted.

use ptcat_search::{PageView, Pager};
use std::fmt::Write;

/// Render the pagination controls for a page view
pub fn pagination_controls<T>(view: &PageView<'_, T>) -> String {
    let mut html = String::new();

    if view.has_prev() {
        let _ = write!(
            html,
            r#"<button onclick="changePage({})" class="px-4 py-2 bg-teal-500 text-white rounded hover:bg-teal-600">Previous</button>"#,
            view.page - 1
        );
    }

    for number in Pager::button_window(view.page, view.total_pages) {
        let active_class = if number == view.page {
            "bg-teal-600"
        } else {
            "bg-gray-300 hover:bg-gray-400"
        };
        let _ = write!(
            html,
            r#"<button onclick="changePage({number})" class="px-4 py-2 {active_class} text-white rounded">{number}</button>"#
        );
    }

    if view.has_next() {
        let _ = write!(
            html,
            r#"<button onclick="changePage({})" class="px-4 py-2 bg-teal-500 text-white rounded hover:bg-teal-600">Next</button>"#,
            view.page + 1
        );
    }

    html
}

/// Render the result-count label for a page view
pub fn result_count_label<T>(view: &PageView<'_, T>) -> String {
    format!(
        "Showing {}-{} of {} configurations",
        view.start_ordinal, view.end_ordinal, view.total_items
    )
}
