//! Health client — one `GET {base}/health` per call.
//!
//! No retries, no caching and no client-side timeout: a call fails only when
//! the transport fails, the backend answers non-2xx, or the body does not
//! parse.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{HealthError, HealthResult};
use crate::types::HealthResponse;

// ── HealthSource trait ────────────────────────────────────────

/// Anything that can report backend health.
///
/// Enables driving the status view in tests without a real backend.
#[async_trait]
pub trait HealthSource: Send + Sync {
    /// Fetch the backend's health once.
    async fn fetch_health(&self) -> HealthResult<HealthResponse>;
}

// ── HealthClient ──────────────────────────────────────────────

/// HTTP health client for the Family Task Manager backend.
pub struct HealthClient {
    client: reqwest::Client,
    url: String,
}

impl HealthClient {
    /// Build a client with its own connection pool.
    pub fn new(config: &ClientConfig) -> HealthResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_client(config: &ClientConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            url: config.health_url(),
        }
    }

    /// The endpoint this client calls.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HealthSource for HealthClient {
    async fn fetch_health(&self) -> HealthResult<HealthResponse> {
        tracing::debug!(url = %self.url, "fetching backend health");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "health request failed");
            HealthError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "health check returned non-2xx");
            return Err(HealthError::HealthCheckFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let document: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "health response is not valid JSON");
            HealthError::MalformedResponse(e)
        })?;
        let health = HealthResponse::from_json(&document);

        tracing::debug!(
            status = %health.status,
            environment = %health.environment,
            "backend health received"
        );
        Ok(health)
    }
}
