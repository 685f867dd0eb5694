//! Optimizer configuration.

use ro_tour::{Algorithm, TourError};

/// Per-optimizer settings, applied to every call.
///
/// Typically built from request parameters by the calling layer, or loaded
/// from a config file with the `serde` feature.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Tour heuristic.  Default: nearest neighbour.
    pub algorithm: Algorithm,

    /// Append the start depot to the end of the route and count the closing
    /// leg in the total distance.  Default: `false`.
    pub return_to_depot: bool,
}

impl OptimizerConfig {
    pub fn new(algorithm: Algorithm, return_to_depot: bool) -> Self {
        Self { algorithm, return_to_depot }
    }

    /// Config with the algorithm given by name.  Unknown names are rejected,
    /// never replaced by the default.
    pub fn named(algorithm: &str, return_to_depot: bool) -> Result<Self, TourError> {
        Ok(Self::new(algorithm.parse()?, return_to_depot))
    }
}
