//! Filtering and pagination for the ptcat catalog
//!
//! - `filter`: conjunctive model-code search and per-axis criteria
//! - `pager`: fixed-size page windows with clamping and button-window math

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod pager;

pub use filter::CatalogFilter;
pub use pager::{PageView, Pager, BUTTON_WINDOW, PAGE_SIZE};
