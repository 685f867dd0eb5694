//! Shortest-path chaining tour heuristic.
//!
//! From the current stop, solve single-source shortest paths, pick the
//! unvisited stop with the smallest shortest-path distance, and walk the
//! shortest path to it.  Repeat from there.
//!
//! On a complete graph with metric weights (the optimizer's haversine graph)
//! the shortest path between two stops is the direct edge, so this visits the
//! same stops in the same order as [`NearestNeighbor`](crate::NearestNeighbor)
//! and yields the same total distance.  A hop whose direct edge is as short
//! as the shortest path (up to rounding) is taken directly.
//!
//! On a sparse graph the chosen path may pass through other stops:
//!
//! - a pass-through stop not yet visited is visited there and then;
//! - a pass-through stop already visited is not repeated in the order.
//!
//! Each hop costs one solver run, so construction is O(n · solve).

use tracing::trace;

use ro_core::StopId;
use ro_graph::{DijkstraSolver, Graph, GraphError, PathSolver, ShortestPaths};

use crate::strategy::stops_to_visit;
use crate::{TourResult, TourStrategy};

/// Shortest-path chaining over a pluggable [`PathSolver`].
#[derive(Clone, Debug, Default)]
pub struct DijkstraChain<S: PathSolver = DijkstraSolver> {
    solver: S,
}

impl DijkstraChain {
    /// Chaining over the heap-based [`DijkstraSolver`].
    pub fn new() -> Self {
        Self { solver: DijkstraSolver }
    }
}

impl<S: PathSolver> DijkstraChain<S> {
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }
}

impl<S: PathSolver> TourStrategy for DijkstraChain<S> {
    fn name(&self) -> &'static str {
        "dijkstra_chain"
    }

    fn visit_order(&self, graph: &Graph, depot: StopId) -> TourResult<Vec<StopId>> {
        let mut remaining = stops_to_visit(graph, depot)?;
        let mut order = Vec::with_capacity(remaining.len() + 1);
        order.push(depot);

        let mut current = depot;
        while !remaining.is_empty() {
            let paths = self.solver.solve(graph, current)?;

            // Closest unvisited stop; ties go to the smaller id since
            // `remaining` is ascending.
            let mut best_idx = 0;
            let mut best = (f64::INFINITY, false);
            for (i, &candidate) in remaining.iter().enumerate() {
                let cost = hop_cost(graph, &paths, current, candidate);
                if cost.0 < best.0 {
                    best_idx = i;
                    best = cost;
                }
            }
            let next = remaining[best_idx];
            let (best_km, direct) = best;
            if !best_km.is_finite() {
                return Err(GraphError::Disconnected { from: current, to: next }.into());
            }

            if direct {
                remaining.remove(best_idx);
                order.push(next);
            } else {
                for stop in paths.path_to(next)?.into_iter().skip(1) {
                    if let Some(pos) = remaining.iter().position(|&r| r == stop) {
                        remaining.remove(pos);
                        order.push(stop);
                    }
                }
            }
            trace!(from = %current, to = %next, km = best_km, "dijkstra_chain hop");
            current = next;
        }

        Ok(order)
    }
}

/// Relative slack within which a shortest path counts as no shorter than the
/// direct edge.  Haversine weights can undercut the triangle inequality by an
/// ulp, which must not decide between stops tied on their direct edge.
const DIRECT_EDGE_SLACK: f64 = 1e-12;

/// Cost of moving from `from` to `to`, and whether that move is the direct
/// edge.  A direct edge within [`DIRECT_EDGE_SLACK`] of the shortest path
/// costs its own weight, so on a complete metric graph every candidate is
/// keyed exactly as [`NearestNeighbor`](crate::NearestNeighbor) keys it.
fn hop_cost(graph: &Graph, paths: &ShortestPaths, from: StopId, to: StopId) -> (f64, bool) {
    let shortest = paths.distance(to).unwrap_or(f64::INFINITY);
    match graph.weight(from, to) {
        Ok(direct) if direct - shortest <= DIRECT_EDGE_SLACK * direct => (direct, true),
        _ => (shortest, false),
    }
}
