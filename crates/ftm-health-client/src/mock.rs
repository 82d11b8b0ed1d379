//! Mock health source for testing without a backend.
//!
//! Replays a scripted outcome on every call and counts calls. A source can
//! be gated so the outcome is held back until the test releases it, or set
//! to never settle at all.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::client::HealthSource;
use crate::error::{HealthError, HealthResult};
use crate::types::HealthResponse;

#[derive(Debug, Clone)]
enum Script {
    Respond(HealthResponse),
    Status(u16),
    RawBody(String),
    Pending,
}

/// Mock implementation of the `HealthSource` trait.
pub struct MockHealthSource {
    script: Script,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

/// Releases a gated `MockHealthSource`.
#[derive(Clone)]
pub struct MockGate(Arc<Notify>);

impl MockGate {
    /// Let the held-back outcome through.
    pub fn release(&self) {
        self.0.notify_one();
    }
}

impl MockHealthSource {
    fn scripted(script: Script) -> Self {
        Self {
            script,
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Succeed with the given payload.
    pub fn healthy(status: impl Into<String>, environment: impl Into<String>) -> Self {
        Self::scripted(Script::Respond(HealthResponse {
            status: status.into(),
            environment: environment.into(),
        }))
    }

    /// Fail as if the backend answered with `status`.
    pub fn failing(status: u16) -> Self {
        Self::scripted(Script::Status(status))
    }

    /// Answer as if the backend sent `body` with a 2xx status. Fails unless
    /// `body` is JSON.
    pub fn raw_body(body: impl Into<String>) -> Self {
        Self::scripted(Script::RawBody(body.into()))
    }

    /// Never settle.
    pub fn pending() -> Self {
        Self::scripted(Script::Pending)
    }

    /// Hold the outcome back until the returned gate is released.
    pub fn gated(mut self) -> (Self, MockGate) {
        let notify = Arc::new(Notify::new());
        self.gate = Some(notify.clone());
        (self, MockGate(notify))
    }

    /// Number of `fetch_health` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthSource for MockHealthSource {
    async fn fetch_health(&self) -> HealthResult<HealthResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.script {
            Script::Respond(health) => Ok(health.clone()),
            Script::Status(status) => Err(HealthError::HealthCheckFailed { status: *status }),
            Script::RawBody(body) => {
                let document: serde_json::Value = serde_json::from_str(body)?;
                Ok(HealthResponse::from_json(&document))
            }
            Script::Pending => std::future::pending().await,
        }
    }
}
