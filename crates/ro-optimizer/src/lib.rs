//! `ro-optimizer` — route-optimization façade.
//!
//! Given a depot and delivery stops as plain in-memory data, returns a
//! visiting order intended to keep total great-circle distance low, plus the
//! distance itself.  No I/O beyond the optional CSV loader; no state between
//! calls.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`optimizer`] | `optimize`, `RouteOptimizer`, `RouteRequest`              |
//! | [`config`]    | `OptimizerConfig`                                         |
//! | [`result`]    | `OptimizationResult`, `PathResult`, `Leg`                 |
//! | [`loader`]    | `load_stops_csv`, `load_stops_reader`                     |
//! | [`error`]     | `OptimizeError`, `OptimizeResult<T>`                      |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `optimize_batch` on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and results. |
//!
//! # Quick-start
//!
//! ```rust
//! use ro_core::{Stop, StopId};
//! use ro_optimizer::{OptimizerConfig, RouteOptimizer};
//! use ro_tour::Algorithm;
//!
//! let stops = vec![
//!     Stop::new(StopId(10), 30.6944, -88.0431).as_depot().with_label("Depot"),
//!     Stop::new(StopId(11), 30.7010, -88.0520),
//!     Stop::new(StopId(12), 30.6880, -88.0390),
//! ];
//! let optimizer = RouteOptimizer::new(OptimizerConfig::new(Algorithm::DijkstraChain, true));
//! let result = optimizer.optimize(&stops, StopId(10))?;
//! assert_eq!(result.route.first(), Some(&StopId(10)));
//! assert_eq!(result.route.last(), Some(&StopId(10)));
//! # Ok::<(), ro_optimizer::OptimizeError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod optimizer;
pub mod result;


pub use config::OptimizerConfig;
pub use error::{OptimizeError, OptimizeResult};
pub use loader::{load_stops_csv, load_stops_reader};
pub use optimizer::{RouteOptimizer, RouteRequest, optimize};
pub use result::{Leg, OptimizationResult, PathResult};
