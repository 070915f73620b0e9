//! Error types for the authorizer.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operation.
///
/// Malformed input lines are not represented here: the stream adapter
/// recovers from them in place. These variants cover the fatal cases only.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to read input or write results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a result record
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Too many command line arguments
    #[error("Too many arguments. Usage: card-authorizer [operations-file]")]
    Usage,
}
