//! Family Task Manager health client.
//!
//! Talks to the backend's `GET {base}/health` endpoint:
//! - `ClientConfig` for the base URL (env or TOML)
//! - `HealthSource` trait for fetching health (mockable in tests)
//! - `HealthClient` backed by `reqwest` for real backends
//! - `MockHealthSource` for scripted outcomes without a server

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod types;

// Re-exports for convenience.
pub use client::{HealthClient, HealthSource};
pub use config::ClientConfig;
pub use error::{ConfigError, HealthError, HealthErrorKind, HealthResult};
pub use mock::{MockGate, MockHealthSource};
pub use types::HealthResponse;
