//! Strategy names accepted by the tour builder.
//!
//! Callers select a heuristic by its snake_case name.  Unknown names are an
//! error; there is no fallback to the default.

use std::str::FromStr;

use crate::{DijkstraChain, NearestNeighbor, TourError, TourStrategy};

/// A named tour-construction heuristic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Greedy: always hop to the closest unvisited stop by direct edge weight.
    #[default]
    NearestNeighbor,
    /// Hop to the unvisited stop with the smallest shortest-path distance,
    /// following the shortest path there.
    DijkstraChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::NearestNeighbor, Algorithm::DijkstraChain];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::DijkstraChain   => "dijkstra_chain",
        }
    }

    /// The strategy implementing this heuristic, with its default solver.
    pub fn strategy(self) -> Box<dyn TourStrategy> {
        match self {
            Algorithm::NearestNeighbor => Box::new(NearestNeighbor),
            Algorithm::DijkstraChain   => Box::new(DijkstraChain::new()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| TourError::UnknownAlgorithm(s.to_owned()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
