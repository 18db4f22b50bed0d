//! ptcat - catalog engine for the 2051 pressure-transmitter configurator
//!
//! ptcat enumerates the full combinatorial option space of a single product
//! family, filters invalid combinations through a fixed rule set, and serves
//! paginated, filterable product-card fragments to a hosting page through a
//! presentation port. A small async client submits inquiry forms for chosen
//! model codes.
//!
//! # Quick Start
//!
//! ```no_run
//! use ptcat::{CatalogController, CatalogFilter, RecordingPort};
//!
//! # fn main() -> ptcat::Result<()> {
//! let mut controller = CatalogController::new(RecordingPort::new());
//!
//! // Build the master list (166,140 valid configurations) and render page 1
//! controller.init()?;
//!
//! // Narrow by free-text model-code search, then page through the view
//! controller.apply_filter(&CatalogFilter::new().with_search("2051CE"))?;
//! controller.display_page(2)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Generation, validation, filtering, and fragment rendering are pure and
//! DOM-free; the host page supplies a `PresentationPort` implementation that
//! owns element ids and banner timing. All state is page-lifetime-scoped:
//! nothing persists across sessions.

// Re-export the public API from ptcat-api
pub use ptcat_api::*;
