//! Conjunctive catalog filtering
//!
//! A [`CatalogFilter`] narrows the master list with up to four independent
//! criteria, ANDed together: a case-insensitive substring match against the
//! derived model code and exact matches on the output, housing, and range
//! codes. Unset (or blank) criteria match everything, so the default filter
//! is the identity.

use ptcat_core::{Configuration, Housing, Output, Range};
use serde::{Deserialize, Serialize};

/// Filter criteria over the configuration master list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Free-text model-code search (case-insensitive substring)
    pub search: Option<String>,
    /// Exact output code
    pub output: Option<Output>,
    /// Exact housing code
    pub housing: Option<Housing>,
    /// Exact range code
    pub range: Option<Range>,
}

impl CatalogFilter {
    /// Match-all filter
    pub fn new() -> Self {
        Self::default()
    }

    /// With a free-text model-code search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// With an exact output criterion
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// With an exact housing criterion
    pub fn with_housing(mut self, housing: Housing) -> Self {
        self.housing = Some(housing);
        self
    }

    /// With an exact range criterion
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Whether every criterion is unset or blank
    pub fn is_match_all(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.output.is_none()
            && self.housing.is_none()
            && self.range.is_none()
    }

    /// Whether the configuration passes every set criterion
    pub fn matches(&self, config: &Configuration) -> bool {
        self.matches_with_term(config, self.lowered_term().as_deref())
    }

    /// Derive the filtered view of a master list
    ///
    /// The master list is untouched; the view is a fresh list. The search
    /// term is lowercased once for the whole pass.
    pub fn apply(&self, configs: &[Configuration]) -> Vec<Configuration> {
        let term = self.lowered_term();
        let view: Vec<Configuration> = configs
            .iter()
            .filter(|config| self.matches_with_term(config, term.as_deref()))
            .copied()
            .collect();

        tracing::debug!(
            total = configs.len(),
            matched = view.len(),
            "applied catalog filter"
        );

        view
    }

    /// Lowercased search term; None when unset or blank
    fn lowered_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_ascii_lowercase)
    }

    fn matches_with_term(&self, config: &Configuration, term: Option<&str>) -> bool {
        let matches_search = term
            .map_or(true, |t| config.model_code().to_lowercase().contains(t));
        let matches_output = self.output.map_or(true, |o| config.output == o);
        let matches_housing = self.housing.map_or(true, |h| config.housing == h);
        let matches_range = self.range.map_or(true, |r| config.range == r);

        matches_search && matches_output && matches_housing && matches_range
    }
}
