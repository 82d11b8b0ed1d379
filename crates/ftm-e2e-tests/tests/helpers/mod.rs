//! Shared test harness for E2E integration tests.
//!
//! Stands up a `wiremock` backend serving `GET /api/health` and mounts real
//! `HealthView`s over a real `HealthClient` pointed at it.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ftm_health_client::{ClientConfig, HealthClient};
use ftm_status_view::HealthView;

/// Upper bound on how long a scenario waits for the view to settle.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// End-to-end harness: mock backend + client config pointing at it.
pub struct TestHarness {
    /// Mock backend.
    pub server: MockServer,
    /// Config with an absolute base URL on the mock backend.
    pub config: ClientConfig,
}

impl TestHarness {
    /// Start a backend with nothing mounted (every route answers 404).
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::with_base_url(format!("{}/api", server.uri()));
        Self { server, config }
    }

    /// Serve `GET /api/health` with `response`, expecting exactly one call.
    pub async fn serve_health(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Backend reports `{status, environment}` with 200.
    pub async fn healthy(status: &str, environment: &str) -> Self {
        let h = Self::start().await;
        h.serve_health(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": status, "environment": environment})),
        )
        .await;
        h
    }

    /// Backend answers with a bare status code.
    pub async fn failing(status: u16) -> Self {
        let h = Self::start().await;
        h.serve_health(ResponseTemplate::new(status)).await;
        h
    }

    /// Backend answers 200 with a body that is not JSON.
    pub async fn non_json() -> Self {
        let h = Self::start().await;
        h.serve_health(ResponseTemplate::new(200).set_body_string("Bad Gateway"))
            .await;
        h
    }

    /// Backend holds the response for `delay`.
    pub async fn stalled(delay: Duration) -> Self {
        let h = Self::start().await;
        h.serve_health(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "environment": "late"}))
                .set_delay(delay),
        )
        .await;
        h
    }

    /// Mount a view over a real client using this harness's config.
    pub fn mount_view(&self) -> HealthView {
        mount_with(&self.config)
    }

    /// Wait until the backend has received `count` requests.
    pub async fn wait_for_requests(&self, count: usize) {
        tokio::time::timeout(SETTLE_TIMEOUT, async {
            while self.request_count().await < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("backend should receive the request before the timeout");
    }

    /// Number of requests the backend has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or(0)
    }
}

/// Mount a view over a real client built from `config`.
pub fn mount_with(config: &ClientConfig) -> HealthView {
    let client = HealthClient::new(config).expect("reqwest client should build");
    HealthView::mount(Arc::new(client))
}

/// Wait for the view's fetch task to finish, whether it settled the view or
/// was discarded.
pub async fn wait_for_fetch(view: &HealthView) {
    tokio::time::timeout(SETTLE_TIMEOUT, async {
        while !view.fetch_finished() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("fetch should finish before the timeout");
}

/// Wait for the view to settle, failing the test if it takes too long.
pub async fn settle(view: &HealthView) -> String {
    tokio::time::timeout(SETTLE_TIMEOUT, view.settled())
        .await
        .expect("view should settle before the timeout")
        .expect("view should still be mounted");
    view.render()
}
