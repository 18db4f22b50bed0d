//! Validation rules and configuration generation for ptcat
//!
//! - `rules`: the fixed cross-attribute rule set and checked
//!   optional-feature attachment
//! - `generator`: exhaustive mandatory-axis enumeration filtered by the
//!   rule set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod rules;

pub use generator::{generate, RAW_TUPLE_COUNT};
pub use rules::{first_violation, is_valid, validate, with_options, Rule};
