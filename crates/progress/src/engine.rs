//! The bucketing pipeline: window, buckets, forward-fill, fit.

use crate::bucket::BucketLayout;
use crate::config::ProgressionConfig;
use crate::error::Result;
use crate::fill::{fit_to_length, forward_fill, Series};
use crate::window::TimeWindow;
use scoregraph_core::SubmissionEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Series for every team of a request, computed on one shared layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionGraph {
    /// Window and bucket geometry used for every series
    pub layout: BucketLayout,

    /// One series per team, in input order
    pub series: Vec<Series>,
}

impl ProgressionGraph {
    /// Collapse into the single-or-many shape chart call sites expect.
    pub fn into_points(self) -> Points {
        let mut series = self.series;
        if series.len() == 1 {
            Points::Single(series.remove(0))
        } else {
            Points::Multi(series)
        }
    }
}

/// Pipeline output: one series for one team, else one per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Points {
    /// Exactly one team was supplied
    Single(Series),

    /// Several teams, in input order
    Multi(Vec<Series>),
}

impl Points {
    /// All series, regardless of shape.
    pub fn into_series(self) -> Vec<Series> {
        match self {
            Points::Single(series) => vec![series],
            Points::Multi(series) => series,
        }
    }
}

/// Converts submission events into evenly spaced series.
///
/// Stateless apart from its configuration; identical inputs always produce
/// identical output.
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration.
    pub fn with_config(mut self, config: ProgressionConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Compute one series per team over a shared window.
    ///
    /// `current_time` is the server clock; it lets the window run past the
    /// last solve while the competition is still going.
    pub fn graph<S>(&self, teams: &[S], current_time: Option<i64>) -> Result<ProgressionGraph>
    where
        S: AsRef<[SubmissionEvent]>,
    {
        self.config.validate()?;

        let window = TimeWindow::resolve(teams, current_time, &self.config)?;
        let layout = BucketLayout::new(window, self.config.point_count);

        let series = teams
            .iter()
            .map(|team| {
                let buckets = layout.assign(team.as_ref());
                fit_to_length(forward_fill(&buckets), self.config.point_count)
            })
            .collect::<Vec<_>>();

        debug!(
            "Computed {} series of {} points (bucket width {}s)",
            series.len(),
            self.config.point_count,
            layout.width
        );

        Ok(ProgressionGraph { layout, series })
    }

    /// Compute points in the single-or-many shape.
    pub fn points<S>(&self, teams: &[S], current_time: Option<i64>) -> Result<Points>
    where
        S: AsRef<[SubmissionEvent]>,
    {
        Ok(self.graph(teams, current_time)?.into_points())
    }
}
