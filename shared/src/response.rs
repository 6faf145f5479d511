//! API Response types
//!
//! The backend answers mutations with a bare `{"message": ...}` object
//! (some routes use `{"success": true}` instead) and errors with
//! `{"error": ..., "details": ...}`. Errors are handled by the client,
//! so only the success shapes live here.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by create/update/delete routes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Health check payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy" | "up")
    }
}
