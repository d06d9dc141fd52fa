use serde::{Deserialize, Serialize};

/// Liveness report for the service and its directory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// "ok" or "error"
    pub status: String,

    /// "connected" when the directory store answered the probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,

    /// Epoch seconds at probe time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Failure detail when status is "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthReport {
    pub fn ok(timestamp: i64) -> Self {
        Self {
            status: "ok".to_string(),
            db: Some("connected".to_string()),
            timestamp: Some(timestamp),
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            db: None,
            timestamp: None,
            message: Some(message),
        }
    }
}
