//! Errors for progression computation.

/// Result type for progression operations.
pub type Result<T> = std::result::Result<T, ProgressionError>;

/// Errors that can occur while building progression series.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    /// No time window can be derived from the input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
