//! The tour-strategy trait.
//!
//! `ro-optimizer` calls tour construction through [`TourStrategy`], so new
//! heuristics (savings, insertion, 2-opt refinement) plug in without touching
//! the façade.

use ro_core::StopId;
use ro_graph::Graph;

use crate::TourResult;

/// Produces a visiting order over a graph, starting at a depot.
///
/// # Contract
///
/// The returned order starts with `depot` and contains every vertex of
/// `graph` exactly once.  It never includes a closing return to the depot;
/// [`TourBuilder`](crate::TourBuilder) appends that.  Exact ties are broken
/// in favour of the smaller [`StopId`], so results are deterministic.
///
/// Implementations must be `Send + Sync` so one strategy can serve
/// concurrent optimizations.
pub trait TourStrategy: Send + Sync {
    /// Snake_case name, matching [`Algorithm::as_str`](crate::Algorithm::as_str).
    fn name(&self) -> &'static str;

    fn visit_order(&self, graph: &Graph, depot: StopId) -> TourResult<Vec<StopId>>;
}

/// Every vertex except the depot, ascending.  Fails if the depot is absent.
pub(crate) fn stops_to_visit(graph: &Graph, depot: StopId) -> TourResult<Vec<StopId>> {
    if !graph.contains(depot) {
        return Err(ro_graph::GraphError::VertexNotFound(depot).into());
    }
    let mut remaining = graph.vertices();
    remaining.retain(|&v| v != depot);
    Ok(remaining)
}
