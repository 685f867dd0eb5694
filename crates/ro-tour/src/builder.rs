//! Depot-aware tour assembly.

use tracing::debug;

use ro_core::StopId;
use ro_graph::Graph;

use crate::{Algorithm, TourResult, TourStrategy};

/// An ordered visiting sequence.
///
/// `stops[0]` is the depot.  Every other stop appears exactly once; when
/// `returns_to_depot` is set the depot appears a second time as the last
/// entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    pub stops:            Vec<StopId>,
    pub algorithm:        Algorithm,
    pub returns_to_depot: bool,
}

impl Tour {
    pub fn depot(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Number of non-depot stops visited.
    pub fn delivery_count(&self) -> usize {
        let closing = usize::from(self.returns_to_depot && self.stops.len() > 1);
        self.stops.len().saturating_sub(1 + closing)
    }
}

/// Builds a [`Tour`] with a selected heuristic.
///
/// # Example
///
/// ```
/// use ro_core::{GeoPoint, StopId};
/// use ro_graph::Graph;
/// use ro_tour::{Algorithm, TourBuilder};
///
/// let g = Graph::complete([
///     (StopId(1), GeoPoint::new(0.0, 0.0)),
///     (StopId(2), GeoPoint::new(0.0, 1.0)),
/// ])
/// .unwrap();
/// let tour = TourBuilder::new(Algorithm::NearestNeighbor)
///     .return_to_depot(true)
///     .build(&g, StopId(1))
///     .unwrap();
/// assert_eq!(tour.stops, vec![StopId(1), StopId(2), StopId(1)]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct TourBuilder {
    algorithm:       Algorithm,
    return_to_depot: bool,
}

impl TourBuilder {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, return_to_depot: false }
    }

    /// Builder for an algorithm given by name.  Unknown names fail with
    /// [`TourError::UnknownAlgorithm`](crate::TourError::UnknownAlgorithm).
    pub fn named(algorithm: &str) -> TourResult<Self> {
        Ok(Self::new(algorithm.parse()?))
    }

    /// Close the tour by returning to the depot after the last stop.
    pub fn return_to_depot(mut self, yes: bool) -> Self {
        self.return_to_depot = yes;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Order every vertex of `graph` starting from `depot`.
    ///
    /// With only the depot in the graph the tour is `[depot]`, or
    /// `[depot, depot]` when returning.
    pub fn build(&self, graph: &Graph, depot: StopId) -> TourResult<Tour> {
        self.build_with(&*self.algorithm.strategy(), graph, depot)
    }

    /// Like [`build`](Self::build) but with a caller-supplied strategy, e.g.
    /// a [`DijkstraChain`](crate::DijkstraChain) over a different solver.
    /// The tour still records the builder's [`Algorithm`].
    pub fn build_with(
        &self,
        strategy: &dyn TourStrategy,
        graph: &Graph,
        depot: StopId,
    ) -> TourResult<Tour> {
        let mut stops = strategy.visit_order(graph, depot)?;
        debug_assert_eq!(stops.first(), Some(&depot));

        if self.return_to_depot {
            stops.push(depot);
        }
        debug!(
            strategy = strategy.name(),
            depot = %depot,
            stops = stops.len(),
            return_to_depot = self.return_to_depot,
            "tour built"
        );

        Ok(Tour {
            stops,
            algorithm:        self.algorithm,
            returns_to_depot: self.return_to_depot,
        })
    }
}
