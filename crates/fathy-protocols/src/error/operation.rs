//! Operation invocation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    /// Failure raised by the operation itself. Displays the bare message.
    #[error("{0}")]
    ExecutionFailed(String),

    #[error("Operation panicked: {0}")]
    Panicked(String),
}

impl From<serde_json::Error> for OperationError {
    fn from(err: serde_json::Error) -> Self {
        Self::ExecutionFailed(err.to_string())
    }
}
