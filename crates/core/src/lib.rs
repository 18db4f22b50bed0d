//! Core types for the ptcat catalog engine
//!
//! This crate defines the foundational types:
//! - Axis enums: the closed code/label sets for every configurable attribute
//! - AxisName: axis discriminator for lookups and error reporting
//! - OptionCatalog: axis → code → label views
//! - Configuration / OptionalFeatures: one selection across all axes
//! - ModelCode: the derived display/search key
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axes;
pub mod catalog;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use axes::{
    Assembly, AxisName, Bracket, Certification, Diaphragm, DisplayOption, Fill, Flange, Housing,
    Measurement, ORing, Output, Range,
};
pub use catalog::OptionCatalog;
pub use config::{Configuration, ModelCode, OptionalFeatures, BASE_MODEL_CODE_LEN, MODEL_PREFIX};
pub use error::{Error, Result};
