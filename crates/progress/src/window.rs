//! Shared time window across teams.

use crate::config::ProgressionConfig;
use crate::error::{ProgressionError, Result};
use scoregraph_core::{SubmissionEvent, Time};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive time bounds covering every team of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Lower bound, unix seconds
    pub min: i64,

    /// Upper bound, unix seconds
    pub max: i64,
}

impl TimeWindow {
    /// Resolve the window for a set of per-team event sequences.
    ///
    /// `min` is the earliest event minus the configured back-off. `max` is
    /// the latest event, pushed forward towards `current_time` by at most the
    /// configured extension when the server clock is ahead of the last solve.
    ///
    /// Fails with [`ProgressionError::InvalidInput`] when every sequence is
    /// empty.
    pub fn resolve<S>(
        teams: &[S],
        current_time: Option<i64>,
        config: &ProgressionConfig,
    ) -> Result<Self>
    where
        S: AsRef<[SubmissionEvent]>,
    {
        let mut times = teams
            .iter()
            .flat_map(|team| team.as_ref().iter().map(|event| event.time));

        let first = times.next().ok_or_else(|| {
            ProgressionError::InvalidInput(
                "cannot derive a time window: no team has any submissions".to_string(),
            )
        })?;
        let (earliest, latest) =
            times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));

        let min = earliest.saturating_sub(config.backoff_secs);
        let max = match current_time {
            Some(now) if now > latest => latest.saturating_add(config.extension_secs).min(now),
            _ => latest,
        };

        let window = Self { min, max };
        debug!(
            "Resolved window [{}, {}] from {} teams (latest solve {})",
            window.start().map_or_else(|| min.to_string(), |t| t.to_rfc3339()),
            window.end().map_or_else(|| max.to_string(), |t| t.to_rfc3339()),
            teams.len(),
            latest
        );

        Ok(window)
    }

    /// Length of the window in seconds, never negative.
    pub fn span(&self) -> i64 {
        self.max.saturating_sub(self.min).max(0)
    }

    /// Lower bound as a UTC timestamp, `None` outside chrono's range.
    pub fn start(&self) -> Option<Time> {
        chrono::DateTime::from_timestamp(self.min, 0)
    }

    /// Upper bound as a UTC timestamp, `None` outside chrono's range.
    pub fn end(&self) -> Option<Time> {
        chrono::DateTime::from_timestamp(self.max, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(time: i64, score: i64) -> SubmissionEvent {
        SubmissionEvent::new(time, score)
    }

    #[test]
    fn test_window_without_current_time() {
        let teams = vec![vec![ev(2000, 10), ev(1000, 5)], vec![ev(3000, 7)]];
        let window = TimeWindow::resolve(&teams, None, &ProgressionConfig::default()).unwrap();

        assert_eq!(window, TimeWindow { min: 700, max: 3000 });
        assert_eq!(window.span(), 2300);
    }

    #[test]
    fn test_window_extends_towards_current_time() {
        let teams = vec![vec![ev(1000, 5)]];
        let config = ProgressionConfig::default();

        let near = TimeWindow::resolve(&teams, Some(5000), &config).unwrap();
        assert_eq!(near.max, 5000);

        let far = TimeWindow::resolve(&teams, Some(1000 + 10 * 86_400), &config).unwrap();
        assert_eq!(far.max, 1000 + 86_400);
    }

    #[test]
    fn test_current_time_behind_latest_event_ignored() {
        let teams = vec![vec![ev(1000, 5), ev(4000, 9)]];
        let window = TimeWindow::resolve(&teams, Some(2000), &ProgressionConfig::default()).unwrap();
        assert_eq!(window.max, 4000);
    }

    #[test]
    fn test_custom_constants() {
        let teams = vec![vec![ev(1000, 5)]];
        let config = ProgressionConfig::default()
            .with_backoff_secs(0)
            .with_extension_secs(60);

        let window = TimeWindow::resolve(&teams, Some(9999), &config).unwrap();
        assert_eq!(window, TimeWindow { min: 1000, max: 1060 });
    }

    #[test]
    fn test_all_empty_is_invalid_input() {
        let teams: Vec<Vec<SubmissionEvent>> = vec![vec![], vec![]];
        let err = TimeWindow::resolve(&teams, Some(10), &ProgressionConfig::default()).unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidInput(_)));

        let none: Vec<Vec<SubmissionEvent>> = Vec::new();
        assert!(TimeWindow::resolve(&none, None, &ProgressionConfig::default()).is_err());
    }

    #[test]
    fn test_bounds_as_utc() {
        let window = TimeWindow {
            min: 1_700_000_000,
            max: 1_700_086_400,
        };
        assert_eq!(
            window.start().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
        assert_eq!(window.end().unwrap().timestamp(), 1_700_086_400);

        let out_of_range = TimeWindow {
            min: i64::MIN,
            max: i64::MAX,
        };
        assert!(out_of_range.start().is_none());
        assert!(out_of_range.end().is_none());
    }

    #[test]
    fn test_empty_teams_do_not_affect_bounds() {
        let teams = vec![vec![], vec![ev(500, 1)], vec![]];
        let window = TimeWindow::resolve(&teams, None, &ProgressionConfig::default()).unwrap();
        assert_eq!(window, TimeWindow { min: 200, max: 500 });
    }
}
