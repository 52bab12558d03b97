//! Graph and traversal errors.

use super::error_code::{self, RendezvousErrorCode};

/// Errors raised by graph lookups and reachability queries.
///
/// Neither variant is recoverable internally: all operations are
/// deterministic and in-memory, so the caller gets the error as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("location not found: {name}")]
    NotFound { name: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl GraphError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl RendezvousErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
