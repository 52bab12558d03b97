//! Scenario input errors.

use super::error_code::{self, RendezvousErrorCode};
use super::graph_error::GraphError;

/// Errors that can occur while reading a scenario description.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("malformed edge on line {line}: {content:?} (expected `<from> <to>`)")]
    MalformedEdge { line: usize, content: String },

    #[error("failed to read input: {message}")]
    Io { message: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl RendezvousErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            // Unknown forbidden names surface as NOT_FOUND, same as queries.
            Self::Graph(inner) => inner.error_code(),
            _ => error_code::INPUT_ERROR,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
