//! Response bodies shared by the server and the client.

use serde::{Deserialize, Serialize};

/// Current time as RFC 3339 UTC with millisecond precision.
pub fn now_stamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub timestamp: String,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data, total: None, timestamp: now_stamp() }
    }
}

impl<T> Envelope<Vec<T>> {
    /// List payload; `total` is the number of items returned.
    pub fn list(data: Vec<T>) -> Self {
        let total = Some(data.len());
        Self { total, ..Self::new(data) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: kpi_engine::UserProfile,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub code: String,
}
