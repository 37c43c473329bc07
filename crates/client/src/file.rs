//! Progression dumps on disk.
//!
//! A dump captures what the platform returned at some point so graphs can be
//! rebuilt offline:
//!
//! ```json
//! {
//!   "time": 1700000000,
//!   "teams": [{"name": "alpha", "score_progression": [{"time": 1699990000, "score": 50}]}],
//!   "team": [{"time": 1699990000, "score": 50}]
//! }
//! ```
//!
//! Every field is optional; requests for absent data fail with
//! [`ApiError::MissingData`].

use crate::api::ProgressionApi;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use scoregraph_core::{RankingSource, ServerStatus, SubmissionEvent, TeamProgression};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Contents of a dump file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionDump {
    /// Server time when the dump was taken
    #[serde(default)]
    pub time: Option<i64>,

    /// Top teams, served for any scoreboard or group
    #[serde(default)]
    pub teams: Option<Vec<TeamProgression>>,

    /// A single team's progression
    #[serde(default)]
    pub team: Option<Vec<SubmissionEvent>>,
}

/// Serves progressions from a [`ProgressionDump`].
#[derive(Debug, Clone)]
pub struct FileProgressionApi {
    dump: ProgressionDump,
}

impl FileProgressionApi {
    /// Read a dump from `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let dump: ProgressionDump = serde_json::from_str(&content)?;
        debug!(
            "Loaded dump {} ({} teams, {} team events)",
            path.display(),
            dump.teams.as_ref().map_or(0, Vec::len),
            dump.team.as_ref().map_or(0, Vec::len)
        );
        Ok(Self { dump })
    }

    /// Serve an in-memory dump.
    pub fn from_dump(dump: ProgressionDump) -> Self {
        Self { dump }
    }
}

#[async_trait]
impl ProgressionApi for FileProgressionApi {
    async fn status(&self) -> Result<ServerStatus> {
        self.dump
            .time
            .map(|time| ServerStatus { time })
            .ok_or_else(|| ApiError::MissingData("dump has no \"time\"".to_string()))
    }

    async fn top_teams(
        &self,
        ranking: &RankingSource,
        limit: Option<u32>,
    ) -> Result<Vec<TeamProgression>> {
        debug!("Serving {} from dump", ranking);
        let teams = self
            .dump
            .teams
            .as_ref()
            .ok_or_else(|| ApiError::MissingData("dump has no \"teams\"".to_string()))?;

        // Dumps keep the server's ranking order, so the limit keeps the leaders
        let limit = limit.map_or(teams.len(), |n| n as usize);
        Ok(teams.iter().take(limit).cloned().collect())
    }

    async fn team_progression(&self, category: Option<&str>) -> Result<Vec<SubmissionEvent>> {
        if let Some(category) = category {
            debug!("Dumps are not split by category, ignoring {}", category);
        }
        self.dump
            .team
            .clone()
            .ok_or_else(|| ApiError::MissingData("dump has no \"team\"".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoregraph_core::GroupId;
    use std::io::Write;

    #[tokio::test]
    async fn test_open_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"time": 5000, "teams": [{{"name": "alpha", "score_progression": [{{"time": 1, "score": 2}}]}}]}}"#
        )
        .unwrap();

        let api = FileProgressionApi::open(file.path()).await.unwrap();
        assert_eq!(api.status().await.unwrap().time, 5000);

        let ranking = RankingSource::Group(GroupId::new("any").unwrap());
        let teams = api.top_teams(&ranking, None).await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].score_progression, vec![SubmissionEvent::new(1, 2)]);

        assert!(matches!(
            api.team_progression(None).await,
            Err(ApiError::MissingData(_))
        ));
    }

    #[tokio::test]
    async fn test_limit_keeps_leaders() {
        let api = FileProgressionApi::from_dump(ProgressionDump {
            teams: Some(vec![
                TeamProgression::new("alpha", vec![SubmissionEvent::new(1, 30)]),
                TeamProgression::new("beta", vec![SubmissionEvent::new(2, 20)]),
                TeamProgression::new("gamma", vec![SubmissionEvent::new(3, 10)]),
            ]),
            ..Default::default()
        });
        let ranking = RankingSource::Group(GroupId::new("g1").unwrap());

        let teams = api.top_teams(&ranking, Some(2)).await.unwrap();
        let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
        assert_eq!(api.top_teams(&ranking, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_time() {
        let api = FileProgressionApi::from_dump(ProgressionDump {
            team: Some(vec![SubmissionEvent::new(10, 1)]),
            ..Default::default()
        });

        assert!(matches!(api.status().await, Err(ApiError::MissingData(_))));
        assert_eq!(api.team_progression(Some("web")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileProgressionApi::open(dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
