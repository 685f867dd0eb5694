//! Optimizer error type.

use thiserror::Error;

use ro_core::{CoreError, ErrorKind, StopId};
use ro_graph::GraphError;
use ro_tour::TourError;

/// Errors returned by the optimizer and the CSV loader.
///
/// Use [`kind`](Self::kind) to classify: bad caller input is
/// `InvalidArgument`; `NotFound` and `Disconnected` from the optimizer mean an
/// engine bug, since it always builds a complete graph.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("no stops supplied")]
    EmptyInput,

    #[error("start stop {0} is not among the supplied stops")]
    StartNotFound(StopId),

    #[error("stop {0} is not among the supplied stops")]
    UnknownStop(StopId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Tour(#[from] TourError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptimizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OptimizeError::EmptyInput
            | OptimizeError::StartNotFound(_)
            | OptimizeError::UnknownStop(_)
            | OptimizeError::Parse(_) => ErrorKind::InvalidArgument,
            OptimizeError::Core(e)  => e.kind(),
            OptimizeError::Tour(e)  => e.kind(),
            OptimizeError::Graph(e) => e.kind(),
            OptimizeError::Io(_)    => ErrorKind::Io,
        }
    }
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;
