//! Undirected weighted stop graph.
//!
//! # Data layout
//!
//! Adjacency is a map of maps keyed by [`StopId`]:
//!
//! ```text
//! adjacency[a][b] == adjacency[b][a] == weight(a, b)
//! ```
//!
//! Stop counts are in the tens to low hundreds, so a hash map per vertex is
//! cheap and keeps arbitrary (non-dense) caller ids usable as keys.  FxHash is
//! unseeded, so iteration order is stable across runs; callers that expose an
//! order (`vertices`, `neighbors`) still sort by id.
//!
//! # Complete graphs
//!
//! The optimizer always builds a *complete* graph via [`Graph::complete`]:
//! every unordered pair of stops is joined by an edge weighted with the
//! haversine distance in kilometres.

use rustc_hash::FxHashMap;

use ro_core::{GeoPoint, Stop, StopId};

use crate::{GraphError, GraphResult};

/// Undirected graph over stop ids with non-negative `f64` edge weights.
///
/// No vertex is ever its own neighbour: [`add_edge`](Self::add_edge) rejects
/// self-loops.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: FxHashMap<StopId, FxHashMap<StopId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
        }
    }

    /// Build the complete graph over `points`: one edge per unordered pair,
    /// weighted by great-circle distance in kilometres.
    ///
    /// O(n²) edges.  Fails with [`GraphError::SelfLoop`] if an id repeats and
    /// with [`GraphError::InvalidWeight`] if a coordinate is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use ro_core::{GeoPoint, StopId};
    /// use ro_graph::Graph;
    ///
    /// let g = Graph::complete([
    ///     (StopId(1), GeoPoint::new(0.0, 0.0)),
    ///     (StopId(2), GeoPoint::new(0.0, 1.0)),
    ///     (StopId(3), GeoPoint::new(0.0, 2.0)),
    /// ])
    /// .unwrap();
    /// assert_eq!(g.vertex_count(), 3);
    /// assert_eq!(g.edge_count(), 3);
    /// ```
    pub fn complete<I>(points: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (StopId, GeoPoint)>,
    {
        let points: Vec<(StopId, GeoPoint)> = points.into_iter().collect();
        let mut graph = Self::with_capacity(points.len());

        for (i, &(a, pos_a)) in points.iter().enumerate() {
            graph.add_vertex(a);
            for &(b, pos_b) in &points[i + 1..] {
                graph.add_edge(a, b, pos_a.distance_km(pos_b))?;
            }
        }
        Ok(graph)
    }

    /// [`complete`](Self::complete) over caller-supplied stops.
    pub fn from_stops(stops: &[Stop]) -> GraphResult<Self> {
        Self::complete(stops.iter().map(|s| (s.id, s.pos)))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `id` with no edges.  No-op if it already exists.
    pub fn add_vertex(&mut self, id: StopId) {
        self.adjacency.entry(id).or_default();
    }

    /// Insert both endpoints if absent, then record `weight` in both
    /// directions, replacing any previous weight.
    ///
    /// Rejects `a == b` and negative or non-finite weights; the graph is left
    /// unchanged on error.
    pub fn add_edge(&mut self, a: StopId, b: StopId, weight: f64) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from: a, to: b, weight });
        }
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, id: StopId) -> bool {
        self.adjacency.contains_key(&id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> Vec<StopId> {
        let mut ids: Vec<StopId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids adjacent to `id`, ascending.
    pub fn neighbors(&self, id: StopId) -> GraphResult<Vec<StopId>> {
        let mut ids: Vec<StopId> = self.adjacent(id)?.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// `(neighbour, weight)` pairs of `id` in unspecified order.  Used by the
    /// solvers' relaxation loop, where order does not matter.
    pub fn edges_from(&self, id: StopId) -> GraphResult<impl Iterator<Item = (StopId, f64)> + '_> {
        Ok(self.adjacent(id)?.iter().map(|(&n, &w)| (n, w)))
    }

    /// Weight of the edge between `a` and `b`.
    pub fn weight(&self, a: StopId, b: StopId) -> GraphResult<f64> {
        self.adjacent(a)?
            .get(&b)
            .copied()
            .ok_or(GraphError::EdgeNotFound { from: a, to: b })
    }

    /// Sum of edge weights between consecutive entries of `route`.
    ///
    /// A hop from a stop to itself costs nothing, so a depot-only round trip
    /// `[d, d]` weighs zero.  Empty and single-entry routes weigh zero.
    pub fn path_weight(&self, route: &[StopId]) -> GraphResult<f64> {
        let mut total = 0.0;
        for hop in route.windows(2) {
            let (a, b) = (hop[0], hop[1]);
            if a == b {
                if !self.contains(a) {
                    return Err(GraphError::VertexNotFound(a));
                }
                continue;
            }
            total += self.weight(a, b)?;
        }
        Ok(total)
    }

    fn adjacent(&self, id: StopId) -> GraphResult<&FxHashMap<StopId, f64>> {
        self.adjacency.get(&id).ok_or(GraphError::VertexNotFound(id))
    }
}
