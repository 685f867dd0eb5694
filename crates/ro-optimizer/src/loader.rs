//! CSV stop loader.
//!
//! # CSV format
//!
//! One row per stop.  `is_depot` and `label` may be empty or omitted.
//!
//! ```csv
//! id,latitude,longitude,is_depot,label
//! 1,30.6944,-88.0431,true,Warehouse
//! 2,30.7010,-88.0520,,Dauphin St
//! 3,30.6880,-88.0390,false,
//! ```
//!
//! `is_depot` accepts `true` / `false`.  Rows are returned in file order and
//! are not validated here; the optimizer rejects duplicates and non-finite
//! coordinates.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ro_core::{Stop, StopId};

use crate::{OptimizeError, OptimizeResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    id:        u32,
    latitude:  f64,
    longitude: f64,
    is_depot:  Option<bool>,
    label:     Option<String>,
}

impl From<StopRecord> for Stop {
    fn from(r: StopRecord) -> Stop {
        let mut stop = Stop::new(StopId(r.id), r.latitude, r.longitude);
        stop.is_depot = r.is_depot.unwrap_or(false);
        stop.label = r.label.filter(|l| !l.is_empty());
        stop
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load stops from a CSV file.
pub fn load_stops_csv(path: &Path) -> OptimizeResult<Vec<Stop>> {
    let file = std::fs::File::open(path)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from request
/// bodies.
pub fn load_stops_reader<R: Read>(reader: R) -> OptimizeResult<Vec<Stop>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<StopRecord>()
        .map(|row| {
            row.map(Stop::from)
                .map_err(|e| OptimizeError::Parse(e.to_string()))
        })
        .collect()
}
