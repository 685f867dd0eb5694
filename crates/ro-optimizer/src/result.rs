//! Optimization outputs.

use ro_core::{Stop, StopId};
use ro_tour::Algorithm;

/// One hop of a route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from: StopId,
    pub to:   StopId,
    pub km:   f64,
}

/// The outcome of one [`optimize`](crate::optimize) call.
///
/// `route` and `locations` are parallel: `locations[i].id == route[i]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Stop ids in visiting order, start depot first (and last when
    /// returning).
    pub route: Vec<StopId>,
    /// The caller's stops, cloned, in visiting order.
    pub locations: Vec<Stop>,
    /// Sum of great-circle distances between consecutive route entries.
    pub total_distance_km: f64,
    pub return_to_depot: bool,
    pub algorithm: Algorithm,
}

impl OptimizationResult {
    /// The start stop, or `None` for an empty route.
    pub fn depot(&self) -> Option<StopId> {
        self.route.first().copied()
    }

    /// Non-depot stops visited.
    pub fn delivery_count(&self) -> usize {
        self.route
            .len()
            .saturating_sub(1 + usize::from(self.is_closed()))
    }

    /// `true` if the route ends where it started.
    pub fn is_closed(&self) -> bool {
        self.return_to_depot && self.route.len() > 1 && self.route.first() == self.route.last()
    }

    /// Consecutive hops with their great-circle length.
    pub fn legs(&self) -> Vec<Leg> {
        self.locations
            .windows(2)
            .map(|w| Leg {
                from: w[0].id,
                to:   w[1].id,
                km:   w[0].distance_km(&w[1]),
            })
            .collect()
    }
}

/// A point-to-point shortest path between two supplied stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub route:       Vec<StopId>,
    pub locations:   Vec<Stop>,
    pub distance_km: f64,
}
