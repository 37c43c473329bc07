//! Live platform API over HTTP.

use crate::api::ProgressionApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, ClientBuilder, Url};
use scoregraph_core::{RankingSource, ServerStatus, SubmissionEvent, TeamProgression};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Platform API client.
#[derive(Clone)]
pub struct HttpProgressionApi {
    /// HTTP client
    client: Client,

    /// Platform root without trailing slash
    base_url: String,
}

impl HttpProgressionApi {
    /// Create a client for the platform at `config.base_url`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.cookie {
            let value = HeaderValue::from_str(cookie).map_err(|_| {
                ApiError::InvalidConfig("cookie contains invalid characters".to_string())
            })?;
            headers.insert(COOKIE, value);
        }

        let client = ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body);
            warn!("{} failed with {}: {}", url, status, message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Extract the `message` field of an error body, falling back to the body.
fn server_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl ProgressionApi for HttpProgressionApi {
    async fn status(&self) -> Result<ServerStatus> {
        self.get_json("/api/v1/status", &[]).await
    }

    async fn top_teams(
        &self,
        ranking: &RankingSource,
        limit: Option<u32>,
    ) -> Result<Vec<TeamProgression>> {
        match limit {
            Some(limit) => {
                let limit = limit.to_string();
                self.get_json(&ranking.path(), &[("limit", limit.as_str())]).await
            }
            None => self.get_json(&ranking.path(), &[]).await,
        }
    }

    async fn team_progression(&self, category: Option<&str>) -> Result<Vec<SubmissionEvent>> {
        let path = "/api/v1/team/score_progression";
        match category {
            Some(category) => self.get_json(path, &[("category", category)]).await,
            None => self.get_json(path, &[]).await,
        }
    }
}
