//! Client configuration.

use serde::{Deserialize, Serialize};

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the platform API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Platform root, e.g. `https://play.example.org`
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Session cookie forwarded as-is, for team-scoped endpoints
    #[serde(default)]
    pub cookie: Option<String>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Settings for `base_url` with default timeout and no session.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cookie: None,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Forward a session cookie.
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}
