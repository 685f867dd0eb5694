//! Shared error classification.
//!
//! Each `ro-*` crate defines its own error enum and converts upstream errors
//! via `From`.  All of them report an [`ErrorKind`] so callers (a web layer,
//! the CLI) can map failures to user-facing responses without matching on
//! every variant.

use thiserror::Error;

use crate::StopId;

/// Coarse error category shared by every `ro-*` error type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Bad caller input: empty stop list, unknown start, unknown algorithm,
    /// malformed coordinate.
    InvalidArgument,
    /// An expected vertex or edge is missing.  Under normal use of the
    /// optimizer this signals an internal bug, not bad input.
    NotFound,
    /// A shortest path was requested between unconnected vertices.
    Disconnected,
    /// Reading input from disk or a stream failed.
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound        => "not_found",
            ErrorKind::Disconnected    => "disconnected",
            ErrorKind::Io              => "io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for raw stop input.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("stop {id} has a non-finite coordinate ({lat}, {lon})")]
    InvalidCoordinate { id: StopId, lat: f64, lon: f64 },

    #[error("stop {0} appears more than once")]
    DuplicateStop(StopId),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidCoordinate { .. } | CoreError::DuplicateStop(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Shorthand result type for `ro-core`.
pub type CoreResult<T> = Result<T, CoreError>;
