//! Which progressions to fetch.

use crate::id::{GroupId, ScoreboardId};
use serde::{Deserialize, Serialize};

/// Errors produced when building a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// A top-teams limit was set on a single-team request.
    #[error("a top teams limit only applies to scoreboards and groups")]
    LimitOnTeam,
}

/// A ranking whose top teams have progressions: a scoreboard or a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RankingSource {
    /// A scoreboard's top teams
    Scoreboard(ScoreboardId),

    /// A group's (classroom's) top teams
    Group(GroupId),
}

impl RankingSource {
    /// API path of the top-teams progression resource.
    pub fn path(&self) -> String {
        match self {
            RankingSource::Scoreboard(id) => {
                format!("/api/v1/scoreboards/{}/score_progressions", id)
            }
            RankingSource::Group(id) => format!("/api/v1/groups/{}/score_progressions", id),
        }
    }
}

impl std::fmt::Display for RankingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingSource::Scoreboard(id) => write!(f, "scoreboard {}", id),
            RankingSource::Group(id) => write!(f, "group {}", id),
        }
    }
}

/// Any progression request a graph can be drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressionSource {
    /// Top teams of a ranking, one series per team
    Ranking {
        /// Scoreboard or group
        ranking: RankingSource,

        /// How many top teams to ask for; the server defaults to 5 and
        /// only admins may override it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The signed-in team's own progression
    Team {
        /// Restrict to one problem category
        category: Option<String>,
    },
}

impl ProgressionSource {
    /// Top teams of a scoreboard.
    pub fn scoreboard(id: ScoreboardId) -> Self {
        Self::Ranking {
            ranking: RankingSource::Scoreboard(id),
            limit: None,
        }
    }

    /// Top teams of a group.
    pub fn group(id: GroupId) -> Self {
        Self::Ranking {
            ranking: RankingSource::Group(id),
            limit: None,
        }
    }

    /// The signed-in team, optionally restricted to a category.
    pub fn team(category: Option<String>) -> Self {
        Self::Team { category }
    }

    /// Ask for a specific number of top teams.
    ///
    /// Fails for team requests, which have no ranking to cut.
    pub fn with_limit(self, limit: u32) -> Result<Self, SourceError> {
        match self {
            Self::Ranking { ranking, .. } => Ok(Self::Ranking {
                ranking,
                limit: Some(limit),
            }),
            Self::Team { .. } => Err(SourceError::LimitOnTeam),
        }
    }

    /// API path, without query string.
    pub fn path(&self) -> String {
        match self {
            ProgressionSource::Ranking { ranking, .. } => ranking.path(),
            ProgressionSource::Team { .. } => "/api/v1/team/score_progression".to_string(),
        }
    }
}
