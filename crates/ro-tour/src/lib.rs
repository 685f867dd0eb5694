//! `ro-tour` — tour construction with selectable heuristics.
//!
//! # Crate layout
//!
//! | Module               | Contents                                          |
//! |----------------------|---------------------------------------------------|
//! | [`algorithm`]        | `Algorithm` — strategy names and parsing          |
//! | [`strategy`]         | `TourStrategy` trait                              |
//! | [`nearest_neighbor`] | `NearestNeighbor`                                 |
//! | [`dijkstra_chain`]   | `DijkstraChain<S: PathSolver>`                    |
//! | [`builder`]          | `TourBuilder`, `Tour` (depot and return handling) |
//! | [`error`]            | `TourError`, `TourResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Algorithm` and `Tour`. |

pub mod algorithm;
pub mod builder;
pub mod dijkstra_chain;
pub mod error;
pub mod nearest_neighbor;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use algorithm::Algorithm;
pub use builder::{Tour, TourBuilder};
pub use dijkstra_chain::DijkstraChain;
pub use error::{TourError, TourResult};
pub use nearest_neighbor::NearestNeighbor;
pub use strategy::TourStrategy;
