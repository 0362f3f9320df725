//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answers, `"degraded"` otherwise.
    pub status: String,
    /// Time of the check.
    pub timestamp: DateTime<Utc>,
    /// Store reachability.
    pub store: bool,
}
