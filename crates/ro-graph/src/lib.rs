//! `ro-graph` — stop graph and shortest-path solvers.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                 |
//! |-------------------|----------------------------------------------------------|
//! | [`graph`]         | `Graph` (undirected, weighted), complete-graph builder   |
//! | [`shortest_path`] | `PathSolver` trait, `ShortestPaths`, `DijkstraSolver`, `ScanDijkstra` |
//! | [`error`]         | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ro-core` types.        |

pub mod error;
pub mod graph;
pub mod shortest_path;


pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use shortest_path::{DijkstraSolver, PathSolver, ScanDijkstra, ShortestPaths};
