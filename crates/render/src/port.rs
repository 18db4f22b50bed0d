//! Presentation port
//!
//! The single seam between the catalog engine and the hosting page. A port
//! implementation owns the DOM element-id mapping (product grid, pagination
//! strip, result-count label, error banner, inquiry modal) and any
//! transient-banner timing; the engine only hands it finished fragments and
//! events. This keeps enumeration, filtering, and validation unit-testable
//! without a browser environment.

/// Sink for rendered fragments and user-visible events
pub trait PresentationPort {
    /// Replace the product-grid markup
    fn replace_grid(&mut self, html: &str);

    /// Replace the pagination-controls markup
    fn replace_pagination(&mut self, html: &str);

    /// Set the result-count label text
    fn set_result_count(&mut self, text: &str);

    /// Scroll the viewport back to the top of the grid
    fn scroll_to_top(&mut self);

    /// Show a transient, auto-dismissing error banner
    fn show_error(&mut self, message: &str);

    /// Show a confirmation message after a successful inquiry
    fn show_confirmation(&mut self, message: &str);

    /// Open the inquiry modal pre-filled with a model code
    fn open_inquiry(&mut self, model_code: &str);

    /// Close the inquiry modal
    fn close_inquiry(&mut self);
}

/// Everything a [`RecordingPort`] has been asked to do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortEvent {
    /// `replace_grid` call
    Grid(String),
    /// `replace_pagination` call
    Pagination(String),
    /// `set_result_count` call
    ResultCount(String),
    /// `scroll_to_top` call
    ScrollToTop,
    /// `show_error` call
    Error(String),
    /// `show_confirmation` call
    Confirmation(String),
    /// `open_inquiry` call
    OpenInquiry(String),
    /// `close_inquiry` call
    CloseInquiry,
}

/// In-memory port double for tests
///
/// Records every call in order and keeps the latest fragment per slot.
#[derive(Debug, Default)]
pub struct RecordingPort {
    /// Ordered call log
    pub events: Vec<PortEvent>,
    /// Latest grid markup
    pub grid: String,
    /// Latest pagination markup
    pub pagination: String,
    /// Latest result-count text
    pub result_count: String,
    /// Latest error banner text
    pub last_error: Option<String>,
    /// Whether the inquiry modal is currently open
    pub inquiry_open: bool,
}

impl RecordingPort {
    /// Fresh port with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `scroll_to_top` calls
    pub fn scroll_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PortEvent::ScrollToTop))
            .count()
    }
}

impl PresentationPort for RecordingPort {
    fn replace_grid(&mut self, html: &str) {
        self.grid = html.to_string();
        self.events.push(PortEvent::Grid(html.to_string()));
    }

    fn replace_pagination(&mut self, html: &str) {
        self.pagination = html.to_string();
        self.events.push(PortEvent::Pagination(html.to_string()));
    }

    fn set_result_count(&mut self, text: &str) {
        self.result_count = text.to_string();
        self.events.push(PortEvent::ResultCount(text.to_string()));
    }

    fn scroll_to_top(&mut self) {
        self.events.push(PortEvent::ScrollToTop);
    }

    fn show_error(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
        self.events.push(PortEvent::Error(message.to_string()));
    }

    fn show_confirmation(&mut self, message: &str) {
        self.events.push(PortEvent::Confirmation(message.to_string()));
    }

    fn open_inquiry(&mut self, model_code: &str) {
        self.inquiry_open = true;
        self.events.push(PortEvent::OpenInquiry(model_code.to_string()));
    }

    fn close_inquiry(&mut self) {
        self.inquiry_open = false;
        self.events.push(PortEvent::CloseInquiry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_port_keeps_latest_fragments() {
        let mut port = RecordingPort::new();
        port.replace_grid("<div>a</div>");
        port.replace_grid("<div>b</div>");
        assert_eq!(port.grid, "<div>b</div>");
        assert_eq!(port.events.len(), 2);
    }

    #[test]
    fn test_recording_port_tracks_modal_state() {
        let mut port = RecordingPort::new();
        port.open_inquiry("2051CAA22A1A");
        assert!(port.inquiry_open);
        port.close_inquiry();
        assert!(!port.inquiry_open);
        assert_eq!(
            port.events,
            vec![
                PortEvent::OpenInquiry("2051CAA22A1A".to_string()),
                PortEvent::CloseInquiry,
            ]
        );
    }

    #[test]
    fn test_recording_port_counts_scrolls() {
        let mut port = RecordingPort::new();
        port.scroll_to_top();
        port.scroll_to_top();
        assert_eq!(port.scroll_count(), 2);
    }
}
