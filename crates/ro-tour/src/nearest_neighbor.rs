//! Nearest-neighbour tour heuristic.
//!
//! Starting from the depot, repeatedly hop to the unvisited stop with the
//! smallest direct edge weight.  Greedy, typically 15–25 % above optimal, but
//! O(n²) and deterministic.

use tracing::trace;

use ro_core::StopId;
use ro_graph::Graph;

use crate::strategy::stops_to_visit;
use crate::{TourResult, TourStrategy};

/// Greedy nearest-neighbour construction over direct edge weights.
///
/// Requires an edge between every pair of stops (the optimizer's complete
/// graph); a missing edge surfaces as [`GraphError::EdgeNotFound`](ro_graph::GraphError::EdgeNotFound).
///
/// # Example
///
/// ```
/// use ro_core::{GeoPoint, StopId};
/// use ro_graph::Graph;
/// use ro_tour::{NearestNeighbor, TourStrategy};
///
/// let g = Graph::complete([
///     (StopId(1), GeoPoint::new(0.0, 0.0)),
///     (StopId(2), GeoPoint::new(0.0, 2.0)),
///     (StopId(3), GeoPoint::new(0.0, 1.0)),
/// ])
/// .unwrap();
/// let order = NearestNeighbor.visit_order(&g, StopId(1)).unwrap();
/// assert_eq!(order, vec![StopId(1), StopId(3), StopId(2)]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestNeighbor;

impl TourStrategy for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest_neighbor"
    }

    fn visit_order(&self, graph: &Graph, depot: StopId) -> TourResult<Vec<StopId>> {
        let mut remaining = stops_to_visit(graph, depot)?;
        let mut order = Vec::with_capacity(remaining.len() + 1);
        order.push(depot);

        let mut current = depot;
        while !remaining.is_empty() {
            // `remaining` is ascending and only a strictly smaller weight
            // replaces the incumbent, so ties go to the smaller id.
            let mut best_idx = 0;
            let mut best_km = f64::INFINITY;
            for (i, &candidate) in remaining.iter().enumerate() {
                let km = graph.weight(current, candidate)?;
                if km < best_km {
                    best_idx = i;
                    best_km = km;
                }
            }

            let next = remaining.remove(best_idx);
            trace!(from = %current, to = %next, km = best_km, "nearest_neighbor hop");
            order.push(next);
            current = next;
        }

        Ok(order)
    }
}
