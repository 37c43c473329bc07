//! scoregraph core data models.
//!
//! This crate defines the data exchanged with the CTF platform API:
//! submission events, per-team progressions, server status and the
//! request variants used to select which progressions to fetch.

#![warn(missing_docs)]

// Identities
mod id;

// Progression data
mod event;
mod status;

// Request selection
mod source;

// Re-exports
pub use id::{GroupId, IdError, ScoreboardId};
pub use event::{SubmissionEvent, TeamProgression};
pub use status::ServerStatus;
pub use source::{ProgressionSource, RankingSource, SourceError};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
