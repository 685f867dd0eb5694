//! The route-optimizer façade.
//!
//! # Pipeline
//!
//! ```text
//! stops ──validate──▶ complete Graph ──TourBuilder──▶ route ids
//!                                                        │
//!          OptimizationResult ◀── path_weight + stop lookup
//! ```
//!
//! Every call builds its own graph and solver state and drops them before
//! returning.  Nothing is shared between calls, so a single
//! [`RouteOptimizer`] can be used from any number of threads.

use rustc_hash::FxHashMap;
use tracing::debug;

use ro_core::{Stop, StopId, validate_stops};
use ro_graph::{DijkstraSolver, Graph, PathSolver};
use ro_tour::TourBuilder;

use crate::{OptimizationResult, OptimizeError, OptimizeResult, OptimizerConfig, PathResult};

/// Compute a visiting order over `stops` starting at `start_id`.
///
/// `algorithm` is one of `"nearest_neighbor"` or `"dijkstra_chain"`.  Fails
/// with an `InvalidArgument`-kind error for an unknown algorithm, an empty
/// stop list, a `start_id` that is not among the stops, a duplicate id, or a
/// non-finite coordinate.
///
/// # Example
///
/// ```
/// use ro_core::{Stop, StopId};
///
/// let stops = vec![
///     Stop::new(StopId(1), 0.0, 0.0).as_depot(),
///     Stop::new(StopId(2), 0.0, 2.0),
///     Stop::new(StopId(3), 0.0, 1.0),
/// ];
/// let result = ro_optimizer::optimize(&stops, StopId(1), "nearest_neighbor", true).unwrap();
/// assert_eq!(result.route, vec![StopId(1), StopId(3), StopId(2), StopId(1)]);
/// ```
pub fn optimize(
    stops: &[Stop],
    start_id: StopId,
    algorithm: &str,
    return_to_depot: bool,
) -> OptimizeResult<OptimizationResult> {
    let config = OptimizerConfig::named(algorithm, return_to_depot)?;
    RouteOptimizer::new(config).optimize(stops, start_id)
}

// ── RouteRequest ──────────────────────────────────────────────────────────────

/// One independent job for [`RouteOptimizer::optimize_batch`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub stops: Vec<Stop>,
    /// Start stop.  `None` picks one as [`RouteOptimizer::optimize_auto`] does.
    pub start: Option<StopId>,
}

impl RouteRequest {
    pub fn new(stops: Vec<Stop>, start: StopId) -> Self {
        Self { stops, start: Some(start) }
    }

    pub fn auto(stops: Vec<Stop>) -> Self {
        Self { stops, start: None }
    }
}

// ── RouteOptimizer ────────────────────────────────────────────────────────────

/// Stateless optimizer carrying an [`OptimizerConfig`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Validate `stops`, build the complete graph, and construct the tour
    /// from `start`.
    pub fn optimize(&self, stops: &[Stop], start: StopId) -> OptimizeResult<OptimizationResult> {
        validate(stops)?;
        if !stops.iter().any(|s| s.id == start) {
            return Err(OptimizeError::StartNotFound(start));
        }

        let graph = Graph::from_stops(stops)?;
        let tour = TourBuilder::new(self.config.algorithm)
            .return_to_depot(self.config.return_to_depot)
            .build(&graph, start)?;
        let total_distance_km = graph.path_weight(&tour.stops)?;
        let locations = lookup(stops, &tour.stops)?;

        debug!(
            stops = stops.len(),
            start = %start,
            algorithm = %self.config.algorithm,
            return_to_depot = self.config.return_to_depot,
            total_distance_km,
            "route optimized"
        );

        Ok(OptimizationResult {
            route: tour.stops,
            locations,
            total_distance_km,
            return_to_depot: self.config.return_to_depot,
            algorithm: self.config.algorithm,
        })
    }

    /// [`optimize`](Self::optimize) from the first stop flagged `is_depot`,
    /// or from the first stop when none is flagged.
    pub fn optimize_auto(&self, stops: &[Stop]) -> OptimizeResult<OptimizationResult> {
        let start = default_start(stops).ok_or(OptimizeError::EmptyInput)?;
        self.optimize(stops, start)
    }

    /// Shortest path between two of the supplied stops over the complete
    /// graph.  With straight-line weights this is the direct hop, or just
    /// `[from]` when `from == to`.
    pub fn shortest_path(
        &self,
        stops: &[Stop],
        from: StopId,
        to: StopId,
    ) -> OptimizeResult<PathResult> {
        validate(stops)?;
        for id in [from, to] {
            if !stops.iter().any(|s| s.id == id) {
                return Err(OptimizeError::UnknownStop(id));
            }
        }

        let graph = Graph::from_stops(stops)?;
        let (route, distance_km) = DijkstraSolver.path(&graph, from, to)?;
        let locations = lookup(stops, &route)?;

        debug!(from = %from, to = %to, hops = route.len() - 1, distance_km, "shortest path");

        Ok(PathResult { route, locations, distance_km })
    }

    /// Run independent requests with this optimizer's config.
    ///
    /// Results are in request order; one failing request does not affect the
    /// others.  With the `parallel` feature the requests run on Rayon's pool.
    pub fn optimize_batch(
        &self,
        requests: &[RouteRequest],
    ) -> Vec<OptimizeResult<OptimizationResult>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests.par_iter().map(|r| self.run(r)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.run(r)).collect()
        }
    }

    fn run(&self, request: &RouteRequest) -> OptimizeResult<OptimizationResult> {
        match request.start {
            Some(start) => self.optimize(&request.stops, start),
            None => self.optimize_auto(&request.stops),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate(stops: &[Stop]) -> OptimizeResult<()> {
    if stops.is_empty() {
        return Err(OptimizeError::EmptyInput);
    }
    validate_stops(stops)?;
    Ok(())
}

fn default_start(stops: &[Stop]) -> Option<StopId> {
    stops
        .iter()
        .find(|s| s.is_depot)
        .or_else(|| stops.first())
        .map(|s| s.id)
}

/// Clone the stops named by `route`, in route order.
fn lookup(stops: &[Stop], route: &[StopId]) -> OptimizeResult<Vec<Stop>> {
    let by_id: FxHashMap<StopId, &Stop> = stops.iter().map(|s| (s.id, s)).collect();
    route
        .iter()
        .map(|id| {
            by_id
                .get(id)
                .map(|&s| s.clone())
                .ok_or(OptimizeError::UnknownStop(*id))
        })
        .collect()
}
