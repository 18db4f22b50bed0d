//! Option catalog
//!
//! Read-only view of every axis as an ordered (code, label) listing plus a
//! fast code → label map. The catalog is derived from the axis enums, built
//! once, and shared process-wide via [`OptionCatalog::global`]. Labels are
//! purely descriptive and carry no behavior.

use crate::axes::{
    Assembly, AxisName, Bracket, Certification, Diaphragm, DisplayOption, Fill, Flange, Housing,
    Measurement, ORing, Output, Range,
};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Ordered (code, label) listing for one axis with a lookup map
#[derive(Debug)]
struct AxisEntries {
    /// (code, label) pairs in catalog listing order
    ordered: Vec<(&'static str, &'static str)>,
    /// code → label
    labels: FxHashMap<&'static str, &'static str>,
}

impl AxisEntries {
    fn new(ordered: Vec<(&'static str, &'static str)>) -> Self {
        let labels = ordered.iter().copied().collect();
        AxisEntries { ordered, labels }
    }
}

/// Static mapping of axis → code → label for the whole product family
#[derive(Debug)]
pub struct OptionCatalog {
    axes: FxHashMap<AxisName, AxisEntries>,
}

static CATALOG: Lazy<OptionCatalog> = Lazy::new(OptionCatalog::build);

impl OptionCatalog {
    /// Shared catalog instance
    pub fn global() -> &'static OptionCatalog {
        &CATALOG
    }

    fn build() -> Self {
        fn entries<T: Copy>(
            all: &[T],
            code: fn(T) -> &'static str,
            label: fn(T) -> &'static str,
        ) -> AxisEntries {
            AxisEntries::new(all.iter().map(|&v| (code(v), label(v))).collect())
        }

        let mut axes = FxHashMap::default();
        axes.insert(
            AxisName::Measurement,
            entries(Measurement::ALL, Measurement::code, Measurement::label),
        );
        axes.insert(AxisName::Range, entries(Range::ALL, Range::code, Range::label));
        axes.insert(AxisName::Output, entries(Output::ALL, Output::code, Output::label));
        axes.insert(AxisName::Flange, entries(Flange::ALL, Flange::code, Flange::label));
        axes.insert(
            AxisName::Diaphragm,
            entries(Diaphragm::ALL, Diaphragm::code, Diaphragm::label),
        );
        axes.insert(AxisName::ORing, entries(ORing::ALL, ORing::code, ORing::label));
        axes.insert(AxisName::Fill, entries(Fill::ALL, Fill::code, Fill::label));
        axes.insert(AxisName::Housing, entries(Housing::ALL, Housing::code, Housing::label));
        axes.insert(
            AxisName::Display,
            entries(DisplayOption::ALL, DisplayOption::code, DisplayOption::label),
        );
        axes.insert(
            AxisName::Certification,
            entries(Certification::ALL, Certification::code, Certification::label),
        );
        axes.insert(
            AxisName::Assembly,
            entries(Assembly::ALL, Assembly::code, Assembly::label),
        );
        axes.insert(AxisName::Bracket, entries(Bracket::ALL, Bracket::code, Bracket::label));

        OptionCatalog { axes }
    }

    fn axis(&self, axis: AxisName) -> &AxisEntries {
        // Every AxisName is inserted in build(); the map is total.
        &self.axes[&axis]
    }

    /// Label for a code on an axis
    ///
    /// # Errors
    /// Returns [`Error::UnknownCode`] if the code does not exist on the axis.
    pub fn label(&self, axis: AxisName, code: &str) -> Result<&'static str> {
        self.axis(axis)
            .labels
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownCode {
                axis,
                code: code.to_string(),
            })
    }

    /// Codes on an axis, in catalog listing order (for filter dropdowns)
    pub fn codes(&self, axis: AxisName) -> impl Iterator<Item = &'static str> + '_ {
        self.axis(axis).ordered.iter().map(|&(code, _)| code)
    }

    /// Ordered (code, label) pairs on an axis
    pub fn entries(&self, axis: AxisName) -> &[(&'static str, &'static str)] {
        &self.axis(axis).ordered
    }

    /// Number of codes on an axis
    pub fn cardinality(&self, axis: AxisName) -> usize {
        self.axis(axis).ordered.len()
    }

    /// Product of the mandatory-axis cardinalities (raw tuple count)
    pub fn raw_combination_count(&self) -> usize {
        AxisName::MANDATORY
            .iter()
            .map(|&axis| self.cardinality(axis))
            .product()
    }
}
