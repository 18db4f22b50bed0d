//! Markup fragments and the presentation port for ptcat
//!
//! - `card`: product-card and grid fragment builders
//! - `page`: pagination controls and result-count label
//! - `port`: the `PresentationPort` seam to the hosting page, plus a
//!   recording test double

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod page;
pub mod port;

pub use card::{product_card, product_grid, FAMILY_NAME};
pub use page::{pagination_controls, result_count_label};
pub use port::{PortEvent, PresentationPort, RecordingPort};
