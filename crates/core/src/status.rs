//! Server status - the authoritative clock.

use crate::Time;
use serde::{Deserialize, Serialize};

/// Subset of the status endpoint response used for graphing.
///
/// Other fields the server sends are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Server time in unix seconds
    pub time: i64,
}

impl ServerStatus {
    /// Server time as a UTC timestamp, if representable.
    pub fn timestamp(&self) -> Option<Time> {
        chrono::DateTime::from_timestamp(self.time, 0)
    }
}
