//! High-level API for the ptcat catalog engine
//!
//! The [`CatalogController`] is the entry point: it owns the master
//! configuration list, the filtered view, and the current page, and renders
//! through a [`PresentationPort`](ptcat_render::PresentationPort)
//! implementation supplied by the host. Inquiry submission goes through the
//! async [`InquiryClient`].
//!
//! ```no_run
//! use ptcat_api::{CatalogController, CatalogFilter, RecordingPort};
//!
//! # fn main() -> ptcat_api::Result<()> {
//! let mut controller = CatalogController::new(RecordingPort::new());
//! controller.init()?;
//! controller.apply_filter(&CatalogFilter::new().with_search("2051C"))?;
//! controller.display_page(3)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod inquiry;
pub mod messages;
pub mod throttle;

pub use controller::CatalogController;
pub use inquiry::{InquiryClient, InquiryForm, InquiryReceipt, SubmitOutcome};
pub use throttle::{
    InteractionTracker, RateLimiter, MAX_ATTEMPTS, MIN_INTERACTIONS_DISPLAY,
    MIN_INTERACTIONS_SUBMIT, WINDOW,
};

// Re-export the surface the host page needs
pub use ptcat_core::{
    AxisName, Configuration, Error, ModelCode, OptionCatalog, OptionalFeatures, Result,
};
pub use ptcat_engine::{generate, with_options, Rule};
pub use ptcat_render::{PortEvent, PresentationPort, RecordingPort};
pub use ptcat_search::{CatalogFilter, PageView, Pager, PAGE_SIZE};
