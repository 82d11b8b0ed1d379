//! Health client configuration, loadable from TOML or environment.

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "FTM_CONFIG";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";
/// Environment variable overriding the origin used for relative base URLs.
pub const ORIGIN_VAR: &str = "API_ORIGIN";

/// Where the health client sends its request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// API root, absolute (`https://api.example.com/api`) or relative (`/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Scheme and host that a relative `base_url` is resolved against.
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_base_url() -> String {
    "/api".into()
}

fn default_origin() -> String {
    "http://localhost:8000".into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            origin: default_origin(),
        }
    }
}

impl ClientConfig {
    /// Config with an explicit base URL and the default origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load config from `API_BASE_URL` / `API_ORIGIN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup. Only unset
    /// variables fall back to the defaults; an empty value is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().with_overrides(&lookup)
    }

    /// Load config the way the page shell does: the TOML file named by
    /// `FTM_CONFIG` if set, then `API_BASE_URL` / `API_ORIGIN` on top.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// `load` through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(&lookup))
    }

    fn with_overrides(mut self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            self.base_url = base_url;
        }
        if let Some(origin) = lookup(ORIGIN_VAR) {
            self.origin = origin;
        }
        self
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            return format!("{base}/health");
        }
        let origin = self.origin.trim_end_matches('/');
        match base.trim_start_matches('/') {
            "" => format!("{origin}/health"),
            path => format!("{origin}/{path}/health"),
        }
    }
}
