//! Tour-construction error type.

use thiserror::Error;

use ro_core::ErrorKind;
use ro_graph::GraphError;

#[derive(Debug, Error, PartialEq)]
pub enum TourError {
    #[error("unknown algorithm {0:?}: expected \"nearest_neighbor\" or \"dijkstra_chain\"")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl TourError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourError::UnknownAlgorithm(_) => ErrorKind::InvalidArgument,
            TourError::Graph(e) => e.kind(),
        }
    }
}

pub type TourResult<T> = Result<T, TourError>;
