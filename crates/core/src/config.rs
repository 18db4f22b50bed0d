//! Configurations and model codes
//!
//! A [`Configuration`] selects one code per mandatory axis plus an optional
//! features record. The derived [`ModelCode`] is the concatenation of the
//! family prefix and the selected codes in fixed order; it is deterministic
//! and injective over the mandatory tuple (every mandatory code is a single
//! character and the axis order never changes).

use crate::axes::{
    Assembly, Bracket, Certification, Diaphragm, DisplayOption, Fill, Flange, Housing,
    Measurement, ORing, Output, Range,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product-family prefix for every model code
pub const MODEL_PREFIX: &str = "2051";

/// Length of a model code with no optional features
pub const BASE_MODEL_CODE_LEN: usize = 12; // "2051" + 8 single-char codes

/// Optional-feature selections attached to a configuration
///
/// Each feature is either absent or a selected code. Generated
/// configurations always start with every feature unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OptionalFeatures {
    /// Local display, if ordered
    pub display: Option<DisplayOption>,
    /// Hazardous-area certification, if ordered
    pub certification: Option<Certification>,
    /// Process assembly, if ordered
    pub assembly: Option<Assembly>,
    /// Mounting bracket, if ordered
    pub bracket: Option<Bracket>,
}

impl OptionalFeatures {
    /// Whether no optional feature is selected
    pub fn is_empty(&self) -> bool {
        self.display.is_none()
            && self.certification.is_none()
            && self.assembly.is_none()
            && self.bracket.is_none()
    }
}

/// One full selection of codes across the eight mandatory axes
///
/// A configuration is "valid" iff every validation rule accepts it; rule
/// evaluation lives in `ptcat-engine`. Configurations are plain `Copy` data
/// with no behavior beyond model-code derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// Measurement type
    pub measurement: Measurement,
    /// Calibrated range
    pub range: Range,
    /// Output signal
    pub output: Output,
    /// Process flange
    pub flange: Flange,
    /// Diaphragm material
    pub diaphragm: Diaphragm,
    /// O-ring material
    pub oring: ORing,
    /// Fill fluid
    pub fill: Fill,
    /// Electronics housing
    pub housing: Housing,
    /// Optional-feature selections
    pub options: OptionalFeatures,
}

impl Configuration {
    /// Derive the model code: prefix + mandatory codes in fixed order,
    /// then any present optional codes in fixed order.
    pub fn model_code(&self) -> ModelCode {
        let mut code = String::with_capacity(BASE_MODEL_CODE_LEN + 8);
        code.push_str(MODEL_PREFIX);
        code.push_str(self.measurement.code());
        code.push_str(self.range.code());
        code.push_str(self.output.code());
        code.push_str(self.flange.code());
        code.push_str(self.diaphragm.code());
        code.push_str(self.oring.code());
        code.push_str(self.fill.code());
        code.push_str(self.housing.code());

        if let Some(display) = self.options.display {
            code.push_str(display.code());
        }
        if let Some(certification) = self.options.certification {
            code.push_str(certification.code());
        }
        if let Some(assembly) = self.options.assembly {
            code.push_str(assembly.code());
        }
        if let Some(bracket) = self.options.bracket {
            code.push_str(bracket.code());
        }

        ModelCode(code)
    }

    /// Copy of this configuration with the given optional features.
    ///
    /// This does NOT re-check validation rules; use
    /// `ptcat_engine::with_options` for the checked path.
    pub fn replacing_options(mut self, options: OptionalFeatures) -> Self {
        self.options = options;
        self
    }
}

/// Derived model-code string for a configuration
///
/// Display/search key only; never used as a database key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelCode(String);

impl ModelCode {
    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased copy, for case-insensitive matching
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for ModelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Configuration {
        Configuration {
            measurement: Measurement::DifferentialGauge,
            range: Range::Kpa3,
            output: Output::HartAnalog,
            flange: Flange::Coplanar1199,
            diaphragm: Diaphragm::HastelloyC276,
            oring: ORing::BunaN,
            fill: Fill::Silicone,
            housing: Housing::AluminumStandard,
            options: OptionalFeatures::default(),
        }
    }

    #[test]
    fn test_model_code_mandatory_only() {
        let code = sample().model_code();
        assert_eq!(code.as_str(), "2051CAA22A1A");
        assert_eq!(code.as_str().len(), BASE_MODEL_CODE_LEN);
    }

    #[test]
    fn test_model_code_deterministic() {
        let config = sample();
        assert_eq!(config.model_code(), config.model_code());
    }

    #[test]
    fn test_model_code_optional_suffix_order() {
        let config = sample().replacing_options(OptionalFeatures {
            display: Some(DisplayOption::LcdMeter),
            certification: Some(Certification::IecIntrinsic),
            assembly: Some(Assembly::DirectMountManifold),
            bracket: Some(Bracket::DinRail),
        });
        assert_eq!(config.model_code().as_str(), "2051CAA22A1AM4I6S1B4");
    }

    #[test]
    fn test_model_code_partial_options() {
        let config = sample().replacing_options(OptionalFeatures {
            bracket: Some(Bracket::Angle),
            ..Default::default()
        });
        assert_eq!(config.model_code().as_str(), "2051CAA22A1ABA");
    }

    #[test]
    fn test_distinct_tuples_distinct_codes() {
        let a = sample();
        let mut b = sample();
        b.housing = Housing::SstStandard;
        assert_ne!(a.model_code(), b.model_code());
    }

    #[test]
    fn test_optional_features_is_empty() {
        assert!(OptionalFeatures::default().is_empty());
        let features = OptionalFeatures {
            display: Some(DisplayOption::LcdIntegral),
            ..Default::default()
        };
        assert!(!features.is_empty());
    }

    #[test]
    fn test_model_code_lowercase() {
        let code = sample().model_code();
        assert_eq!(code.to_lowercase(), "2051caa22a1a");
    }
}
