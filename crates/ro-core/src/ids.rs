//! Strongly typed stop identifier.
//!
//! `StopId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  Ordering matters: every tie in the tour heuristics is
//! broken in favour of the smaller id.

use std::fmt;
use std::str::FromStr;

/// Identifier of a stop, unique within one optimization call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StopId(pub u32);

impl StopId {
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl From<u32> for StopId {
    #[inline(always)]
    fn from(n: u32) -> StopId {
        StopId(n)
    }
}

impl From<StopId> for u32 {
    #[inline(always)]
    fn from(id: StopId) -> u32 {
        id.0
    }
}

impl TryFrom<usize> for StopId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<StopId, Self::Error> {
        u32::try_from(n).map(StopId)
    }
}

impl FromStr for StopId {
    type Err = std::num::ParseIntError;

    /// Parses a bare integer (`"42"`), the form used on the command line and
    /// in CSV files.
    fn from_str(s: &str) -> Result<StopId, Self::Err> {
        s.trim().parse::<u32>().map(StopId)
    }
}
