//! Exhaustive configuration generation
//!
//! Enumerates the full Cartesian product of the eight mandatory axes in
//! catalog order (2 x 10 x 5 x 3 x 4 x 7 x 3 x 11 = 277,200 raw tuples) and
//! keeps the tuples accepted by every validation rule. Optional features
//! are left unset. The output ordering is deterministic: outer-to-inner
//! loop order follows the model-code axis order. At 277k tuples a flat
//! check-per-tuple scan is fast enough that no partial-tuple pruning is
//! done.

use crate::rules;
use ptcat_core::{
    Configuration, Diaphragm, Fill, Flange, Housing, Measurement, ORing, OptionalFeatures, Output,
    Range,
};

/// Number of raw mandatory-axis tuples before rule filtering
pub const RAW_TUPLE_COUNT: usize = Measurement::COUNT
    * Range::COUNT
    * Output::COUNT
    * Flange::COUNT
    * Diaphragm::COUNT
    * ORing::COUNT
    * Fill::COUNT
    * Housing::COUNT;

/// Generate every valid configuration over the mandatory axes
///
/// Pure enumeration: no side effects beyond the returned list and a tracing
/// summary. The result is the master list built once per controller
/// lifecycle; it is never mutated afterwards, only filtered into views.
pub fn generate() -> Vec<Configuration> {
    let mut configs = Vec::new();

    for &measurement in Measurement::ALL {
        for &range in Range::ALL {
            for &output in Output::ALL {
                for &flange in Flange::ALL {
                    for &diaphragm in Diaphragm::ALL {
                        for &oring in ORing::ALL {
                            for &fill in Fill::ALL {
                                for &housing in Housing::ALL {
                                    let config = Configuration {
                                        measurement,
                                        range,
                                        output,
                                        flange,
                                        diaphragm,
                                        oring,
                                        fill,
                                        housing,
                                        options: OptionalFeatures::default(),
                                    };

                                    if rules::is_valid(&config) {
                                        configs.push(config);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    tracing::info!(
        raw = RAW_TUPLE_COUNT,
        valid = configs.len(),
        "generated configuration master list"
    );

    configs
}
