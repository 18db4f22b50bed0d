//! Product axes for the 2051 transmitter family
//!
//! Each configurable attribute (axis) is a closed enum. Every variant
//! carries:
//! - a short ordering code (1-2 characters) that is printed into model codes
//! - a human-readable label shown on product cards
//!
//! The `ALL` ordering of every axis is fixed and matches the published
//! catalog listing order; model-code derivation and exhaustive enumeration
//! both depend on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines one axis enum with its catalog codes and labels.
macro_rules! axis {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($code:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// All codes on this axis, in catalog listing order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Number of codes on this axis.
            pub const COUNT: usize = Self::ALL.len();

            /// Ordering code printed into model codes.
            pub fn code(self) -> &'static str {
                match self { $( $name::$variant => $code ),+ }
            }

            /// Human-readable catalog label.
            pub fn label(self) -> &'static str {
                match self { $( $name::$variant => $label ),+ }
            }

            /// Resolve a catalog code back to its variant.
            pub fn from_code(code: &str) -> Option<$name> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fmt_as_code!();
        }
    };
}

macro_rules! fmt_as_code {
    () => {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.code())
        }
    };
}

// ============================================================================
// Mandatory axes
// ============================================================================

axis! {
    /// Measurement type
    Measurement {
        DifferentialGauge => ("C", "Differential/Gauge Pressure"),
        Absolute => ("D", "Absolute Pressure"),
    }
}

axis! {
    /// Calibrated pressure range
    Range {
        Kpa3 => ("A", "0.3 to 3 kPa"),
        Kpa10 => ("B", "1 to 10 kPa"),
        Kpa25 => ("C", "2.5 to 25 kPa"),
        Kpa62 => ("D", "6.2 to 62 kPa"),
        Kpa150 => ("E", "15 to 150 kPa"),
        Kpa370 => ("F", "37 to 370 kPa"),
        Kpa930 => ("G", "93 to 930 kPa"),
        Kpa2100 => ("H", "210 to 2100 kPa"),
        Kpa7000 => ("J", "700 to 7000 kPa"),
        Kpa21000 => ("K", "2100 to 21000 kPa"),
    }
}

axis! {
    /// Output signal / protocol
    Output {
        HartAnalog => ("A", "4-20 mA HART"),
        HartLcd => ("M", "4-20 mA HART + LCD"),
        FoundationFieldbus => ("N", "Foundation Fieldbus"),
        ProfibusPa => ("P", "PROFIBUS PA"),
        WirelessHart => ("Q", "WirelessHART"),
    }
}

axis! {
    /// Process flange style
    Flange {
        Coplanar1199 => ("2", "Coplanar 1199"),
        CoplanarTraditional => ("3", "Coplanar Traditional"),
        CoplanarFlush => ("4", "Coplanar Flush"),
    }
}

axis! {
    /// Isolating diaphragm material
    Diaphragm {
        HastelloyC276 => ("2", "Hastelloy C-276"),
        Monel400 => ("3", "Monel 400"),
        Tantalum => ("4", "Tantalum"),
        Sst316L => ("5", "316L SST"),
    }
}

axis! {
    /// O-ring material
    ORing {
        BunaN => ("A", "Buna-N"),
        Neoprene => ("B", "Neoprene"),
        EthylenePropylene => ("C", "Ethylene Propylene"),
        Teflon => ("D", "Teflon"),
        Viton => ("E", "Viton"),
        Kalrez => ("F", "Kalrez"),
        PtfeEncapViton => ("G", "PTFE Encap Viton"),
    }
}

axis! {
    /// Sensor fill fluid
    Fill {
        Silicone => ("1", "Silicone"),
        Inert => ("2", "Inert"),
        VegetableOil => ("3", "Vegetable Oil"),
    }
}

axis! {
    /// Electronics housing
    Housing {
        AluminumStandard => ("A", "Low Copper Aluminum (Standard)"),
        AluminumConduit => ("B", "Low Copper Aluminum (Conduit)"),
        AluminumCableGland => ("C", "Low Copper Aluminum (Cable Gland)"),
        SstStandard => ("D", "Stainless Steel (Standard)"),
        SstConduit => ("E", "Stainless Steel (Conduit)"),
        SstCableGland => ("F", "Stainless Steel (Cable Gland)"),
        ExProofAluminum => ("G", "Explosion Proof Aluminum"),
        ExProofSst => ("H", "Explosion Proof Stainless"),
        Nema4xPolycarbonate => ("J", "NEMA 4X Polycarbonate"),
        Nema4xPolycarbonateLcd => ("K", "NEMA 4X Polycarbonate + LCD"),
        WeatherResistantPolymer => ("L", "Weather Resistant Polymer"),
    }
}

// ============================================================================
// Optional-feature axes
// ============================================================================

axis! {
    /// Optional local display
    DisplayOption {
        LcdMeter => ("M4", "LCD Digital Meter"),
        LcdIntegral => ("M5", "LCD Integral Display"),
    }
}

axis! {
    /// Optional hazardous-area certification
    Certification {
        EuropeanExProof => ("E5", "European Explosion Proof"),
        EuropeanIntrinsic => ("E6", "European Intrinsic Safety"),
        IecExProof => ("I5", "IEC Explosion Proof"),
        IecIntrinsic => ("I6", "IEC Intrinsic Safety"),
        KoreanExProof => ("K5", "Korean Explosion Proof"),
        KoreanIntrinsic => ("K6", "Korean Intrinsic Safety"),
        KoreanExdIntrinsic => ("KB", "Korean Ex d + Intrinsic Safety"),
    }
}

axis! {
    /// Optional process assembly
    Assembly {
        DirectMountManifold => ("S1", "Direct Mount Manifold"),
        RemoteSeal => ("S2", "Remote Seal"),
        IntegratedDpFlow => ("S3", "Integrated DP Flow"),
        InLineMount => ("S4", "In-Line Mount"),
        CoplanarPanelMount => ("S5", "Coplanar Panel Mount"),
        CompactOrificePlate => ("S6", "Compact Orifice Plate"),
    }
}

axis! {
    /// Optional mounting bracket
    Bracket {
        Pipe2In => ("B1", "2\" Pipe Bracket"),
        FlatSurface => ("B2", "Flat Surface Bracket"),
        PanelMount => ("B3", "Panel Mount Bracket"),
        DinRail => ("B4", "DIN Rail Mount"),
        Angle => ("BA", "Angle Bracket"),
        BracketShield => ("BB", "Bracket + Shield"),
        Compact => ("BC", "Compact Bracket"),
    }
}

// ============================================================================
// AxisName
// ============================================================================

/// Discriminator naming every axis, mandatory and optional.
///
/// Used by the option catalog (dropdown data, code resolution) and by error
/// reporting. `MANDATORY` lists the eight model-code axes in derivation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisName {
    /// Measurement type
    Measurement,
    /// Calibrated range
    Range,
    /// Output signal
    Output,
    /// Process flange
    Flange,
    /// Diaphragm material
    Diaphragm,
    /// O-ring material
    ORing,
    /// Fill fluid
    Fill,
    /// Electronics housing
    Housing,
    /// Optional display
    Display,
    /// Optional certification
    Certification,
    /// Optional assembly
    Assembly,
    /// Optional bracket
    Bracket,
}

impl AxisName {
    /// All axes, mandatory first (in model-code order) then optional
    /// (in model-code suffix order).
    pub const ALL: &'static [AxisName] = &[
        AxisName::Measurement,
        AxisName::Range,
        AxisName::Output,
        AxisName::Flange,
        AxisName::Diaphragm,
        AxisName::ORing,
        AxisName::Fill,
        AxisName::Housing,
        AxisName::Display,
        AxisName::Certification,
        AxisName::Assembly,
        AxisName::Bracket,
    ];

    /// The eight mandatory axes in model-code derivation order.
    pub const MANDATORY: &'static [AxisName] = &[
        AxisName::Measurement,
        AxisName::Range,
        AxisName::Output,
        AxisName::Flange,
        AxisName::Diaphragm,
        AxisName::ORing,
        AxisName::Fill,
        AxisName::Housing,
    ];

    /// Whether every configuration must select a code on this axis.
    pub fn is_mandatory(self) -> bool {
        !matches!(
            self,
            AxisName::Display | AxisName::Certification | AxisName::Assembly | AxisName::Bracket
        )
    }

    /// Lowercase axis name as used in catalog listings.
    pub fn as_str(self) -> &'static str {
        match self {
            AxisName::Measurement => "measurement",
            AxisName::Range => "range",
            AxisName::Output => "output",
            AxisName::Flange => "flange",
            AxisName::Diaphragm => "diaphragm",
            AxisName::ORing => "oring",
            AxisName::Fill => "fill",
            AxisName::Housing => "housing",
            AxisName::Display => "display",
            AxisName::Certification => "certification",
            AxisName::Assembly => "assembly",
            AxisName::Bracket => "bracket",
        }
    }
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_axis_cardinalities() {
        assert_eq!(Measurement::COUNT, 2);
        assert_eq!(Range::COUNT, 10);
        assert_eq!(Output::COUNT, 5);
        assert_eq!(Flange::COUNT, 3);
        assert_eq!(Diaphragm::COUNT, 4);
        assert_eq!(ORing::COUNT, 7);
        assert_eq!(Fill::COUNT, 3);
        assert_eq!(Housing::COUNT, 11);
        assert_eq!(DisplayOption::COUNT, 2);
        assert_eq!(Certification::COUNT, 7);
        assert_eq!(Assembly::COUNT, 6);
        assert_eq!(Bracket::COUNT, 7);
    }

    #[test]
    fn test_codes_unique_within_axis() {
        fn unique(codes: Vec<&str>) -> bool {
            let len = codes.len();
            codes.into_iter().collect::<HashSet<_>>().len() == len
        }

        assert!(unique(Range::ALL.iter().map(|r| r.code()).collect()));
        assert!(unique(Output::ALL.iter().map(|o| o.code()).collect()));
        assert!(unique(Housing::ALL.iter().map(|h| h.code()).collect()));
        assert!(unique(ORing::ALL.iter().map(|o| o.code()).collect()));
        assert!(unique(Certification::ALL.iter().map(|c| c.code()).collect()));
    }

    #[test]
    fn test_mandatory_codes_are_single_char() {
        assert!(Measurement::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Range::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Output::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Flange::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Diaphragm::ALL.iter().all(|v| v.code().len() == 1));
        assert!(ORing::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Fill::ALL.iter().all(|v| v.code().len() == 1));
        assert!(Housing::ALL.iter().all(|v| v.code().len() == 1));
    }

    #[test]
    fn test_from_code_round_trip() {
        for &output in Output::ALL {
            assert_eq!(Output::from_code(output.code()), Some(output));
        }
        assert_eq!(Output::from_code("Z"), None);
        assert_eq!(Housing::from_code("L"), Some(Housing::WeatherResistantPolymer));
        assert_eq!(Diaphragm::from_code("4"), Some(Diaphragm::Tantalum));
        assert_eq!(Assembly::from_code("S2"), Some(Assembly::RemoteSeal));
    }

    #[test]
    fn test_display_prints_code() {
        assert_eq!(Output::WirelessHart.to_string(), "Q");
        assert_eq!(Fill::VegetableOil.to_string(), "3");
        assert_eq!(DisplayOption::LcdMeter.to_string(), "M4");
    }

    #[test]
    fn test_axis_name_partition() {
        assert_eq!(AxisName::MANDATORY.len(), 8);
        assert_eq!(AxisName::ALL.len(), 12);
        assert!(AxisName::MANDATORY.iter().all(|a| a.is_mandatory()));
        assert!(!AxisName::Bracket.is_mandatory());
    }

    #[test]
    fn test_labels_match_catalog() {
        assert_eq!(Measurement::Absolute.label(), "Absolute Pressure");
        assert_eq!(Range::Kpa21000.label(), "2100 to 21000 kPa");
        assert_eq!(
            Housing::WeatherResistantPolymer.label(),
            "Weather Resistant Polymer"
        );
        assert_eq!(Bracket::Pipe2In.label(), "2\" Pipe Bracket");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Output::ProfibusPa).unwrap();
        let back: Output = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Output::ProfibusPa);
    }
}
