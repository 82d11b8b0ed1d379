//! Health client error types.

use thiserror::Error;

/// Errors from a single health fetch.
#[derive(Debug, Error)]
pub enum HealthError {
    /// The request never produced an HTTP response (unreachable host,
    /// DNS failure, unusable URL, body read aborted).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("health check failed: {status}")]
    HealthCheckFailed { status: u16 },

    /// The body was not JSON of the expected shape.
    #[error("malformed health response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Fieldless discriminant of `HealthError`, for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthErrorKind {
    Transport,
    HealthCheckFailed,
    MalformedResponse,
}

impl HealthError {
    pub fn kind(&self) -> HealthErrorKind {
        match self {
            HealthError::Transport(_) => HealthErrorKind::Transport,
            HealthError::HealthCheckFailed { .. } => HealthErrorKind::HealthCheckFailed,
            HealthError::MalformedResponse(_) => HealthErrorKind::MalformedResponse,
        }
    }
}

/// Convenience alias for health client results.
pub type HealthResult<T> = Result<T, HealthError>;

/// Errors loading a `ClientConfig` from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
