//! Client errors.

use scoregraph_progress::ProgressionError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while fetching progression data.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or the raw body
        message: String,
    },

    /// Base URL or cookie could not be used
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// I/O error reading a dump
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response or dump is not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dump lacks a field the request needs
    #[error("missing data: {0}")]
    MissingData(String),

    /// Bucketing the fetched data failed
    #[error("progression error: {0}")]
    Progression(#[from] ProgressionError),
}
