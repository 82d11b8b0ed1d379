//! Wire types for the backend health endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success payload of `GET {base}/health`.
///
/// Field contents are not inspected: a `status` of `"degraded"` still counts
/// as a successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
}

impl HealthResponse {
    /// Read a payload from any JSON document without validating its shape.
    ///
    /// Missing or `null` fields become empty strings; non-string fields keep
    /// their JSON text (`true`, `3`).
    pub fn from_json(value: &Value) -> Self {
        Self {
            status: field_text(value, "status"),
            environment: field_text(value, "environment"),
        }
    }
}

fn field_text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
