//! `ro-core` — foundational types for the route optimizer.
//!
//! This crate is a dependency of every other `ro-*` crate.  It has no `ro-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `StopId`                                              |
//! | [`geo`]    | `GeoPoint`, haversine distance in kilometres          |
//! | [`stop`]   | `Stop` (one depot or delivery point), `validate_stops` |
//! | [`error`]  | `CoreError`, `ErrorKind`, `CoreResult`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod stop;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult, ErrorKind};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
pub use ids::StopId;
pub use stop::{Stop, validate_stops};
