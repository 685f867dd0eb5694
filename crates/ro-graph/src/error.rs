//! Graph error type.

use thiserror::Error;

use ro_core::{ErrorKind, StopId};

/// Errors produced by `ro-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("stop {0} not found in graph")]
    VertexNotFound(StopId),

    #[error("no edge between {from} and {to}")]
    EdgeNotFound { from: StopId, to: StopId },

    #[error("no path from {from} to {to}")]
    Disconnected { from: StopId, to: StopId },

    #[error("self-loop on {0} rejected")]
    SelfLoop(StopId),

    #[error("edge {from}–{to} has invalid weight {weight}")]
    InvalidWeight { from: StopId, to: StopId, weight: f64 },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. } => ErrorKind::NotFound,
            GraphError::Disconnected { .. } => ErrorKind::Disconnected,
            GraphError::SelfLoop(_) | GraphError::InvalidWeight { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
