//! Progression API abstraction.

use crate::error::{ApiError, Result};
use async_trait::async_trait;
use scoregraph_core::{
    ProgressionSource, RankingSource, ServerStatus, SubmissionEvent, TeamProgression,
};
use scoregraph_progress::{Points, ProgressionEngine};
use tracing::debug;

/// Source of score progressions and the server clock.
///
/// Implemented for the live platform and for on-disk dumps.
#[async_trait]
pub trait ProgressionApi: Send + Sync {
    /// Current server status (authoritative time).
    async fn status(&self) -> Result<ServerStatus>;

    /// Progressions of the top teams of a scoreboard or group.
    ///
    /// `limit` overrides how many teams the server returns.
    async fn top_teams(
        &self,
        ranking: &RankingSource,
        limit: Option<u32>,
    ) -> Result<Vec<TeamProgression>>;

    /// The signed-in team's progression, optionally for one category.
    async fn team_progression(&self, category: Option<&str>) -> Result<Vec<SubmissionEvent>>;
}

/// Fetched progressions, shaped by the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progressions {
    /// Top teams of a ranking
    Ranking(Vec<TeamProgression>),

    /// One team's own events
    Team(Vec<SubmissionEvent>),
}

impl Progressions {
    /// Whether at least one event exists.
    pub fn has_solves(&self) -> bool {
        match self {
            Progressions::Ranking(teams) => teams.iter().any(TeamProgression::has_solves),
            Progressions::Team(events) => !events.is_empty(),
        }
    }

    /// Event sequences, one per team.
    pub fn event_sets(&self) -> Vec<&[SubmissionEvent]> {
        match self {
            Progressions::Ranking(teams) => teams
                .iter()
                .map(|team| team.score_progression.as_slice())
                .collect(),
            Progressions::Team(events) => vec![events.as_slice()],
        }
    }
}

/// Everything needed to draw one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Server time used to bound the window
    pub current_time: i64,

    /// The requested progressions
    pub progressions: Progressions,
}

/// Fetch progressions for `source` together with the server time.
///
/// When `current_time` is given the status endpoint is not queried.
pub async fn fetch_snapshot(
    api: &dyn ProgressionApi,
    source: &ProgressionSource,
    current_time: Option<i64>,
) -> Result<Snapshot> {
    let progressions = async {
        Ok::<_, ApiError>(match source {
            ProgressionSource::Ranking { ranking, limit } => {
                Progressions::Ranking(api.top_teams(ranking, *limit).await?)
            }
            ProgressionSource::Team { category } => {
                Progressions::Team(api.team_progression(category.as_deref()).await?)
            }
        })
    };

    let (current_time, progressions) = match current_time {
        Some(now) => (now, progressions.await?),
        None => {
            let (status, progressions) = tokio::try_join!(api.status(), progressions)?;
            (status.time, progressions)
        }
    };

    debug!("Fetched progressions from {} at server time {}", source.path(), current_time);

    Ok(Snapshot {
        current_time,
        progressions,
    })
}

/// Fetch and bucket in one step.
///
/// Fails with an invalid-input progression error when nobody has solved
/// anything; check [`Progressions::has_solves`] first to show a placeholder.
pub async fn fetch_points(
    api: &dyn ProgressionApi,
    source: &ProgressionSource,
    engine: &ProgressionEngine,
) -> Result<Points> {
    let snapshot = fetch_snapshot(api, source, None).await?;
    let points = engine.points(&snapshot.progressions.event_sets(), Some(snapshot.current_time))?;
    Ok(points)
}
