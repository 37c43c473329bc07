//! Score progression bucketing.
//!
//! Turns sparse, irregularly timed submission events into fixed-length,
//! evenly spaced series for line charts. Every team of one request shares
//! a single time window and bucket width so their series line up point for
//! point.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod window;
pub mod bucket;
pub mod fill;
pub mod engine;

pub use config::{
    ProgressionConfig, DEFAULT_BACKOFF_SECS, DEFAULT_EXTENSION_SECS, DEFAULT_POINT_COUNT,
};
pub use error::{ProgressionError, Result};
pub use window::TimeWindow;
pub use bucket::{BucketLayout, Buckets};
pub use fill::{fit_to_length, forward_fill, Series};
pub use engine::{Points, ProgressionEngine, ProgressionGraph};
