//! Single-source shortest paths (Dijkstra) and path reconstruction.
//!
//! # Pluggability
//!
//! The tour builder reaches the solver through the [`PathSolver`] trait.  Two
//! implementations ship:
//!
//! | Solver             | Frontier          | Cost              |
//! |--------------------|-------------------|-------------------|
//! | [`DijkstraSolver`] | binary min-heap   | O(E log V)        |
//! | [`ScanDijkstra`]   | linear min scan   | O(V²)             |
//!
//! Both settle vertices in ascending `(distance, id)` order and relax with a
//! strict `<`, so they produce identical distance *and* predecessor tables.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use ro_core::StopId;

use crate::{Graph, GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Distance and predecessor tables from one source.
///
/// Every vertex of the solved graph has an entry: unreachable vertices keep
/// distance `f64::INFINITY` and no predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: StopId,
    dist:   FxHashMap<StopId, f64>,
    prev:   FxHashMap<StopId, StopId>,
}

impl ShortestPaths {
    fn unsolved(graph: &Graph, source: StopId) -> Self {
        let mut dist: FxHashMap<StopId, f64> =
            graph.vertices().into_iter().map(|v| (v, f64::INFINITY)).collect();
        dist.insert(source, 0.0);
        Self {
            source,
            dist,
            prev: FxHashMap::default(),
        }
    }

    pub fn source(&self) -> StopId {
        self.source
    }

    /// Shortest distance from the source to `v`.
    ///
    /// `None` if `v` was not in the solved graph; `Some(INFINITY)` if it is
    /// unreachable.
    pub fn distance(&self, v: StopId) -> Option<f64> {
        self.dist.get(&v).copied()
    }

    /// The vertex visited immediately before `v` on its shortest path.
    /// `None` for the source and for unreachable vertices.
    pub fn predecessor(&self, v: StopId) -> Option<StopId> {
        self.prev.get(&v).copied()
    }

    pub fn is_reachable(&self, v: StopId) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// Walk predecessor links back from `target` to the source and return the
    /// path source-first.  `path_to(source)` is `[source]`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] for an unknown target and
    /// [`GraphError::Disconnected`] if the walk never reaches the source.
    pub fn path_to(&self, target: StopId) -> GraphResult<Vec<StopId>> {
        if !self.dist.contains_key(&target) {
            return Err(GraphError::VertexNotFound(target));
        }
        let disconnected = GraphError::Disconnected { from: self.source, to: target };

        let mut path = vec![target];
        let mut cur = target;
        // A simple path has at most one entry per vertex.
        while cur != self.source {
            if path.len() > self.dist.len() {
                return Err(disconnected);
            }
            cur = match self.prev.get(&cur) {
                Some(&p) => p,
                None => return Err(disconnected),
            };
            path.push(cur);
        }
        path.reverse();
        Ok(path)
    }
}

// ── PathSolver trait ──────────────────────────────────────────────────────────

/// Single-source shortest-path engine over a [`Graph`] with non-negative
/// weights.
///
/// Implementations hold no per-call state, so one solver can be shared
/// across threads.
pub trait PathSolver: Send + Sync {
    /// Solve from `source`.  Fails with [`GraphError::VertexNotFound`] if the
    /// source is not in the graph.
    fn solve(&self, graph: &Graph, source: StopId) -> GraphResult<ShortestPaths>;

    /// Shortest path from `from` to `to` and its total weight.
    fn path(&self, graph: &Graph, from: StopId, to: StopId) -> GraphResult<(Vec<StopId>, f64)> {
        let paths = self.solve(graph, from)?;
        let path = paths.path_to(to)?;
        let cost = paths.distance(to).unwrap_or(f64::INFINITY);
        Ok((path, cost))
    }
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Heap-based Dijkstra.  The default solver.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSolver;

/// Total order over non-negative finite costs for the heap.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PathSolver for DijkstraSolver {
    fn solve(&self, graph: &Graph, source: StopId) -> GraphResult<ShortestPaths> {
        if !graph.contains(source) {
            return Err(GraphError::VertexNotFound(source));
        }
        let mut paths = ShortestPaths::unsolved(graph, source);
        let mut settled: FxHashSet<StopId> = FxHashSet::default();

        // Min-heap: (cost, node).  Reverse makes BinaryHeap (max) behave as
        // min-heap; the StopId secondary key makes tie-breaking deterministic.
        let mut heap: BinaryHeap<Reverse<(Cost, StopId)>> = BinaryHeap::new();
        heap.push(Reverse((Cost(0.0), source)));

        while let Some(Reverse((Cost(cost), node))) = heap.pop() {
            // Skip stale heap entries.
            if !settled.insert(node) {
                continue;
            }

            for (neighbor, weight) in graph.edges_from(node)? {
                if settled.contains(&neighbor) {
                    continue;
                }
                let new_cost = cost + weight;
                let best = paths.dist.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if new_cost < best {
                    paths.dist.insert(neighbor, new_cost);
                    paths.prev.insert(neighbor, node);
                    heap.push(Reverse((Cost(new_cost), neighbor)));
                }
            }
        }

        Ok(paths)
    }
}

// ── ScanDijkstra ──────────────────────────────────────────────────────────────

/// Dijkstra with a linear scan for the closest unsettled vertex.
///
/// O(V²) regardless of edge count, which on a complete graph is no worse than
/// the heap version.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScanDijkstra;

impl PathSolver for ScanDijkstra {
    fn solve(&self, graph: &Graph, source: StopId) -> GraphResult<ShortestPaths> {
        if !graph.contains(source) {
            return Err(GraphError::VertexNotFound(source));
        }
        let mut paths = ShortestPaths::unsolved(graph, source);
        let mut unsettled: Vec<StopId> = graph.vertices();
        let mut settled: FxHashSet<StopId> = FxHashSet::default();

        while !unsettled.is_empty() {
            // Closest unsettled vertex; ties go to the smaller id because
            // `unsettled` is sorted and only a strictly smaller cost wins.
            let mut best_idx = 0;
            let mut best_cost = f64::INFINITY;
            for (i, v) in unsettled.iter().enumerate() {
                let d = paths.dist[v];
                if d < best_cost {
                    best_idx = i;
                    best_cost = d;
                }
            }
            if best_cost == f64::INFINITY {
                break; // the rest is unreachable
            }
            let node = unsettled.remove(best_idx);
            settled.insert(node);

            for (neighbor, weight) in graph.edges_from(node)? {
                if settled.contains(&neighbor) {
                    continue;
                }
                let best = paths.dist.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                let new_cost = best_cost + weight;
                if new_cost < best {
                    paths.dist.insert(neighbor, new_cost);
                    paths.prev.insert(neighbor, node);
                }
            }
        }

        Ok(paths)
    }
}
