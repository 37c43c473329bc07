//! Submission events - the raw points of a score progression.

use crate::Time;
use serde::{Deserialize, Serialize};

/// A correct submission, as reported by the score progression endpoints.
///
/// `score` is cumulative: it is the team's total at `time`, not the value of
/// the solved problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    /// Unix seconds
    pub time: i64,

    /// Cumulative score at `time`
    pub score: i64,
}

impl SubmissionEvent {
    /// Create a new event.
    pub fn new(time: i64, score: i64) -> Self {
        Self { time, score }
    }

    /// The event time as a UTC timestamp, if representable.
    pub fn timestamp(&self) -> Option<Time> {
        chrono::DateTime::from_timestamp(self.time, 0)
    }
}

/// One team's progression as returned by the top-teams endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProgression {
    /// Team name
    pub name: String,

    /// Submission events, in no guaranteed order
    pub score_progression: Vec<SubmissionEvent>,
}

impl TeamProgression {
    /// Create a new team progression.
    pub fn new(name: impl Into<String>, score_progression: Vec<SubmissionEvent>) -> Self {
        Self {
            name: name.into(),
            score_progression,
        }
    }

    /// Whether the team has solved anything.
    pub fn has_solves(&self) -> bool {
        !self.score_progression.is_empty()
    }
}
