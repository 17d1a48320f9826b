//! Error types for default type resolution.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure class reported to callers of the resolver.
///
/// Callers that only need "did it work" can match on this instead of the
/// individual [`DefaultTypeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The `default_type` file could not be located or opened.
    OpenFailure,
    /// No usable entry for the role (also covers malformed input and reads
    /// that fail mid-scan). Reported as an invalid-argument error.
    NotFound,
    /// Memory for the result string could not be obtained.
    AllocationFailure,
}

impl ErrorKind {
    /// Closest `std::io::ErrorKind`, for callers that speak in io errors.
    pub fn io_kind(self) -> io::ErrorKind {
        match self {
            ErrorKind::OpenFailure => io::ErrorKind::Other,
            ErrorKind::NotFound => io::ErrorKind::InvalidInput,
            ErrorKind::AllocationFailure => io::ErrorKind::OutOfMemory,
        }
    }
}

#[derive(Debug, Error)]
pub enum DefaultTypeError {
    #[error("role must not be empty")]
    EmptyRole,

    #[error("cannot determine default_type path")]
    Path(#[source] io::Error),

    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line} exceeds {max} bytes")]
    LineTooLong { line: usize, max: usize },

    #[error("type for role `{role}` on line {line} is not valid UTF-8 or contains NUL")]
    InvalidEncoding { role: String, line: usize },

    #[error("no default type entry for role `{role}`")]
    NotFound { role: String },

    #[error("cannot allocate default type string")]
    Allocation(#[source] TryReserveError),
}

impl DefaultTypeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DefaultTypeError::Path(_) | DefaultTypeError::Open { .. } => ErrorKind::OpenFailure,
            DefaultTypeError::EmptyRole
            | DefaultTypeError::Read { .. }
            | DefaultTypeError::LineTooLong { .. }
            | DefaultTypeError::InvalidEncoding { .. }
            | DefaultTypeError::NotFound { .. } => ErrorKind::NotFound,
            DefaultTypeError::Allocation(_) => ErrorKind::AllocationFailure,
        }
    }

    /// `std::io::ErrorKind` for this error. Open failures keep the kind of the
    /// underlying io error (e.g. `NotFound`, `PermissionDenied`).
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            DefaultTypeError::Path(source) | DefaultTypeError::Open { source, .. } => {
                source.kind()
            }
            other => other.kind().io_kind(),
        }
    }
}

impl From<DefaultTypeError> for io::Error {
    fn from(err: DefaultTypeError) -> Self {
        io::Error::new(err.io_kind(), err)
    }
}
