//! Cross-attribute validation rules
//!
//! Each rule is a pure predicate over a [`Configuration`]. A configuration
//! is valid iff every rule accepts it; rules do not interact, so evaluation
//! order never matters. The rule count is fixed and known at build time, so
//! the set is a tagged enum evaluated uniformly rather than dynamic
//! dispatch.
//!
//! Rules 5 and 6 constrain optional features. Bulk generation leaves
//! optional features unset, so those two only fire on the checked
//! [`with_options`] path.

use ptcat_core::{
    Assembly, Configuration, Diaphragm, Error, Fill, Flange, Housing, ORing, OptionalFeatures,
    Output, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cross-attribute compatibility constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// WirelessHART output requires the weather-resistant polymer housing
    WirelessHousing,
    /// Fieldbus/PROFIBUS outputs exclude the polycarbonate and polymer housings
    OutputHousing,
    /// Tantalum diaphragm is compatible only with silicone and inert fills
    TantalumFill,
    /// Buna-N and neoprene o-rings exclude the vegetable-oil fill
    OringFill,
    /// An ordered display requires a 4-20 mA HART output
    DisplayOutput,
    /// A remote-seal assembly excludes the flush-mount flange
    RemoteSealFlange,
}

impl Rule {
    /// All rules, evaluated conjunctively
    pub const ALL: &'static [Rule] = &[
        Rule::WirelessHousing,
        Rule::OutputHousing,
        Rule::TantalumFill,
        Rule::OringFill,
        Rule::DisplayOutput,
        Rule::RemoteSealFlange,
    ];

    /// Stable rule name used in errors and logs
    pub fn name(self) -> &'static str {
        match self {
            Rule::WirelessHousing => "wireless_housing",
            Rule::OutputHousing => "output_housing",
            Rule::TantalumFill => "tantalum_fill",
            Rule::OringFill => "oring_fill",
            Rule::DisplayOutput => "display_output",
            Rule::RemoteSealFlange => "remote_seal_flange",
        }
    }

    /// Whether this rule accepts the configuration
    pub fn check(self, config: &Configuration) -> bool {
        match self {
            Rule::WirelessHousing => {
                config.output != Output::WirelessHart
                    || config.housing == Housing::WeatherResistantPolymer
            }
            Rule::OutputHousing => {
                !matches!(config.output, Output::FoundationFieldbus | Output::ProfibusPa)
                    || !matches!(
                        config.housing,
                        Housing::Nema4xPolycarbonate
                            | Housing::Nema4xPolycarbonateLcd
                            | Housing::WeatherResistantPolymer
                    )
            }
            Rule::TantalumFill => {
                config.diaphragm != Diaphragm::Tantalum
                    || matches!(config.fill, Fill::Silicone | Fill::Inert)
            }
            Rule::OringFill => {
                !matches!(config.oring, ORing::BunaN | ORing::Neoprene)
                    || config.fill != Fill::VegetableOil
            }
            Rule::DisplayOutput => {
                config.options.display.is_none()
                    || matches!(config.output, Output::HartAnalog | Output::HartLcd)
            }
            Rule::RemoteSealFlange => {
                config.options.assembly != Some(Assembly::RemoteSeal)
                    || config.flange != Flange::CoplanarFlush
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether every rule accepts the configuration
pub fn is_valid(config: &Configuration) -> bool {
    Rule::ALL.iter().all(|rule| rule.check(config))
}

/// First rule (in `Rule::ALL` order) rejecting the configuration, if any
///
/// Rules are order-independent, so "first" is only a stable reporting
/// choice.
pub fn first_violation(config: &Configuration) -> Option<Rule> {
    Rule::ALL.iter().copied().find(|rule| !rule.check(config))
}

/// Check all rules, returning the first violation as an error
///
/// # Errors
/// Returns [`Error::RuleViolation`] naming the failing rule.
pub fn validate(config: &Configuration) -> Result<()> {
    match first_violation(config) {
        None => Ok(()),
        Some(rule) => Err(Error::RuleViolation { rule: rule.name() }),
    }
}

/// Attach optional features to a configuration, re-checking every rule
///
/// This is the checked path for optional-feature selection: a display or
/// assembly choice that conflicts with the mandatory axes is rejected
/// instead of silently accepted.
///
/// # Errors
/// Returns [`Error::RuleViolation`] if the combined configuration fails any
/// rule.
pub fn with_options(config: Configuration, options: OptionalFeatures) -> Result<Configuration> {
    let combined = config.replacing_options(options);
    validate(&combined)?;
    Ok(combined)
}
