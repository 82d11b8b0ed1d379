//! Health view — the status page's state machine.
//!
//! Mounting a view spawns exactly one health fetch and shows `Loading`
//! right away. The fetch's outcome settles the view into `Ready` or `Error`
//! unless the view was torn down first, in which case the outcome is
//! dropped. The request itself is never aborted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use ftm_health_client::HealthSource;

use crate::state::ViewState;

/// State cell shared between the view and its fetch task.
struct Shared {
    state: watch::Sender<ViewState>,
    active: AtomicBool,
}

impl Shared {
    /// Settle into `next` if the view is still mounted and still loading.
    /// Runs under the cell's write lock, so it cannot interleave with
    /// `teardown`.
    fn settle(&self, next: ViewState) -> bool {
        self.state.send_if_modified(|state| {
            if !self.active.load(Ordering::Acquire) || state.is_settled() {
                return false;
            }
            *state = next;
            true
        })
    }
}

/// One mounted instance of the status view.
///
/// Dropping the view tears it down.
pub struct HealthView {
    shared: Arc<Shared>,
    fetch: JoinHandle<()>,
}

impl HealthView {
    /// Mount the view and start its single health fetch.
    ///
    /// Returns immediately with the view in `Loading`. Must be called from
    /// within a Tokio runtime.
    pub fn mount(source: Arc<dyn HealthSource>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        let shared = Arc::new(Shared {
            state,
            active: AtomicBool::new(true),
        });

        let task_shared = shared.clone();
        let fetch = tokio::spawn(async move {
            let next = match source.fetch_health().await {
                Ok(health) => ViewState::Ready {
                    environment: health.environment,
                },
                Err(e) => {
                    tracing::warn!(kind = ?e.kind(), error = %e, "backend health check failed");
                    ViewState::Error
                }
            };

            if task_shared.settle(next) {
                let state = task_shared.state.borrow().clone();
                tracing::debug!(state = %state, "status view settled");
            } else {
                tracing::debug!("status view torn down, discarding health result");
            }
        });

        tracing::debug!("status view mounted");
        Self { shared, fetch }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    /// Current status line.
    pub fn render(&self) -> String {
        crate::render::render(&self.shared.state.borrow())
    }

    /// Whether the view is still mounted.
    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::Acquire)
    }

    /// Whether the fetch task has run to completion, settled or discarded.
    pub fn fetch_finished(&self) -> bool {
        self.fetch.is_finished()
    }

    /// Receiver that observes every state change.
    ///
    /// Teardown wakes receivers once without changing the value.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Wait until the view leaves `Loading`.
    ///
    /// Returns `None` if the view is torn down while still loading.
    pub async fn settled(&self) -> Option<ViewState> {
        let mut rx = self.shared.state.subscribe();
        loop {
            {
                let state = rx.borrow_and_update();
                if state.is_settled() {
                    return Some(state.clone());
                }
            }
            if !self.is_active() {
                return None;
            }
            if rx.changed().await.is_err() {
                return None;
            }
        }
    }

    /// Stop accepting the fetch's result. Idempotent.
    pub fn teardown(&self) {
        let shared = &self.shared;
        let was_active = shared
            .state
            .send_if_modified(|_| shared.active.swap(false, Ordering::AcqRel));
        if was_active {
            let state = shared.state.borrow().clone();
            tracing::debug!(state = %state, "status view torn down");
        }
    }
}

impl Drop for HealthView {
    fn drop(&mut self) {
        self.teardown();
    }
}
