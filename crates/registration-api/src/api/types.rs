//! API request and response types.

use crate::store::Registration;
use serde::{Deserialize, Serialize};

/// Incoming form submission.
///
/// Missing fields deserialize to empty strings so they reach validation
/// (and produce field-level messages) instead of failing at the JSON layer.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,
}

/// Response after a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: Registration,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}
