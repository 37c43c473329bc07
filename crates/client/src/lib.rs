//! Access to score progression data.
//!
//! The [`ProgressionApi`] trait abstracts where progressions come from: the
//! live platform over HTTP, or a JSON dump on disk.

#![warn(missing_docs)]

mod error;
mod config;
mod api;
mod http;
mod file;

pub use error::{ApiError, Result};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use api::{fetch_points, fetch_snapshot, ProgressionApi, Progressions, Snapshot};
pub use http::HttpProgressionApi;
pub use file::{FileProgressionApi, ProgressionDump};
