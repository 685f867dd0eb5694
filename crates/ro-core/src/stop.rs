//! The input record: one geographic stop.

use std::collections::HashSet;

use crate::{CoreError, CoreResult, GeoPoint, StopId};

/// A stop supplied by the caller: either a depot or a delivery point.
///
/// The engine only ever reads stops; results carry clones in visiting order.
///
/// # Example
///
/// ```
/// use ro_core::{Stop, StopId};
///
/// let depot = Stop::new(StopId(1), 30.69, -88.04).as_depot().with_label("Warehouse");
/// assert!(depot.is_depot);
/// assert_eq!(depot.label.as_deref(), Some("Warehouse"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopId,
    pub pos: GeoPoint,
    /// Marks the stop as a depot.  Informational unless the start is chosen
    /// automatically; the optimizer's start stop is named explicitly.
    pub is_depot: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl Stop {
    /// A delivery stop with no label.
    pub fn new(id: StopId, lat: f64, lon: f64) -> Self {
        Self {
            id,
            pos: GeoPoint::new(lat, lon),
            is_depot: false,
            label: None,
        }
    }

    /// Flag this stop as a depot.
    pub fn as_depot(mut self) -> Self {
        self.is_depot = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.pos.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.pos.lon
    }

    /// Great-circle distance between the two stops in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &Stop) -> f64 {
        self.pos.distance_km(other.pos)
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} {:?} {}", self.id, label, self.pos),
            None => write!(f, "{} {}", self.id, self.pos),
        }
    }
}

/// Check that every stop has finite coordinates and a unique id.
///
/// Reports the first offending stop in input order.
pub fn validate_stops(stops: &[Stop]) -> CoreResult<()> {
    let mut seen: HashSet<StopId> = HashSet::with_capacity(stops.len());
    for stop in stops {
        if !stop.pos.is_finite() {
            return Err(CoreError::InvalidCoordinate {
                id:  stop.id,
                lat: stop.pos.lat,
                lon: stop.pos.lon,
            });
        }
        if !seen.insert(stop.id) {
            return Err(CoreError::DuplicateStop(stop.id));
        }
    }
    Ok(())
}
