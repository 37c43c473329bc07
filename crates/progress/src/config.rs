//! Progression configuration.

use crate::error::{ProgressionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Points per series when nothing else is requested.
pub const DEFAULT_POINT_COUNT: usize = 720;

/// Seconds subtracted from the earliest event so the first solve is not
/// drawn on the left edge.
pub const DEFAULT_BACKOFF_SECS: i64 = 60 * 5;

/// How far past the last solve the window may extend while the
/// competition clock keeps running.
pub const DEFAULT_EXTENSION_SECS: i64 = 3600 * 24;

/// Settings for the bucketing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Length of every produced series
    pub point_count: usize,

    /// Left padding of the window, in seconds
    pub backoff_secs: i64,

    /// Maximum extension past the last event, in seconds
    pub extension_secs: i64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            backoff_secs: DEFAULT_BACKOFF_SECS,
            extension_secs: DEFAULT_EXTENSION_SECS,
        }
    }
}

impl ProgressionConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the series length.
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Set the window back-off.
    pub fn with_backoff_secs(mut self, backoff_secs: i64) -> Self {
        self.backoff_secs = backoff_secs;
        self
    }

    /// Set the window extension.
    pub fn with_extension_secs(mut self, extension_secs: i64) -> Self {
        self.extension_secs = extension_secs;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(ProgressionError::InvalidParameter(
                "point_count must be at least 1".to_string(),
            ));
        }
        if self.backoff_secs < 0 {
            return Err(ProgressionError::InvalidParameter(format!(
                "backoff_secs must not be negative, got {}",
                self.backoff_secs
            )));
        }
        if self.extension_secs < 0 {
            return Err(ProgressionError::InvalidParameter(format!(
                "extension_secs must not be negative, got {}",
                self.extension_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ProgressionConfig::default();
        assert_eq!(config.point_count, 720);
        assert_eq!(config.backoff_secs, 300);
        assert_eq!(config.extension_secs, 86_400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_points_rejected() {
        let config = ProgressionConfig::default().with_point_count(0);
        assert!(matches!(
            config.validate(),
            Err(ProgressionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_backoff_rejected() {
        let config = ProgressionConfig::default().with_backoff_secs(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"point_count": 96}}"#).unwrap();

        let config = ProgressionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.point_count, 96);
        assert_eq!(config.backoff_secs, DEFAULT_BACKOFF_SECS);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ProgressionConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ProgressionError::Json(_)));
    }
}
