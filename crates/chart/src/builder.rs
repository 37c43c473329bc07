//! Build progression charts from submission data.

use crate::dataset::{ChartData, ChartKind, ChartOptions, Dataset, LineChart};
use crate::palette::ChartPalette;
use scoregraph_core::{SubmissionEvent, TeamProgression};
use scoregraph_progress::{ProgressionEngine, ProgressionError, Series};
use serde::Serialize;
use tracing::{debug, info};

/// Shown instead of a chart when nobody has solved anything.
pub const NO_SOLVES_MESSAGE: &str = "No problems have been solved.";

/// Errors while building a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Bucketing failed
    #[error("progression error: {0}")]
    Progression(#[from] ProgressionError),

    /// Palette has no colours
    #[error("palette must contain at least one border and one background colour")]
    EmptyPalette,
}

/// What a call site should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChartOutcome {
    /// Draw this chart
    Chart {
        /// Chart definition
        chart: LineChart,
    },

    /// Show this message instead of a chart
    Placeholder {
        /// Message text
        message: String,
    },

    /// Nothing to draw and nothing to say
    Skipped,
}

impl ChartOutcome {
    fn placeholder() -> Self {
        ChartOutcome::Placeholder {
            message: NO_SOLVES_MESSAGE.to_string(),
        }
    }
}

/// Builds charts with an explicit engine, palette and options.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    engine: ProgressionEngine,
    palette: ChartPalette,
    options: ChartOptions,
}

impl ChartBuilder {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific progression engine.
    pub fn with_engine(mut self, engine: ProgressionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Use a specific palette.
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Use specific chart options.
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Compare the top teams of a scoreboard or group.
    ///
    /// Needs at least two teams; with fewer there is nothing to compare and
    /// the outcome is [`ChartOutcome::Skipped`].
    pub fn top_teams(
        &self,
        teams: &[TeamProgression],
        current_time: Option<i64>,
    ) -> Result<ChartOutcome, ChartError> {
        if teams.len() < 2 {
            info!("Skipping top teams graph: {} team(s)", teams.len());
            return Ok(ChartOutcome::Skipped);
        }
        if !teams.iter().any(TeamProgression::has_solves) {
            return Ok(ChartOutcome::placeholder());
        }
        self.check_palette()?;

        let events: Vec<&[SubmissionEvent]> = teams
            .iter()
            .map(|team| team.score_progression.as_slice())
            .collect();
        let series = self.engine.points(&events, current_time)?.into_series();

        let datasets = teams
            .iter()
            .zip(series)
            .enumerate()
            .map(|(i, (team, series))| self.dataset(i, team.name.clone(), series, 1))
            .collect();

        debug!("Built top teams chart for {} teams", teams.len());
        Ok(self.chart(datasets))
    }

    /// Chart the signed-in team's own progression.
    pub fn team(
        &self,
        events: &[SubmissionEvent],
        current_time: Option<i64>,
    ) -> Result<ChartOutcome, ChartError> {
        if events.is_empty() {
            return Ok(ChartOutcome::placeholder());
        }
        self.check_palette()?;

        let datasets = self
            .engine
            .points(&[events], current_time)?
            .into_series()
            .into_iter()
            .map(|series| self.dataset(0, "Score".to_string(), series, 0))
            .collect();

        Ok(self.chart(datasets))
    }

    fn check_palette(&self) -> Result<(), ChartError> {
        if self.palette.is_usable() {
            Ok(())
        } else {
            Err(ChartError::EmptyPalette)
        }
    }

    fn dataset(&self, index: usize, label: String, data: Series, point_radius: u32) -> Dataset {
        let border = self.palette.border_for(index).to_string();
        Dataset {
            label,
            data,
            point_background_color: border.clone(),
            border_color: border,
            background_color: self.palette.background_for(index).to_string(),
            point_hit_radius: 0,
            point_radius,
            line_tension: 0.0,
        }
    }

    fn chart(&self, datasets: Vec<Dataset>) -> ChartOutcome {
        ChartOutcome::Chart {
            chart: LineChart {
                kind: ChartKind::Line,
                data: ChartData {
                    labels: ChartData::blank_labels(self.engine.config().point_count),
                    datasets,
                },
                options: self.options.clone(),
            },
        }
    }
}
