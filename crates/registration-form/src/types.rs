//! Wire types for the submission endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A persisted registration as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Submission response body.
///
/// Every field except `success` is optional: validation failures carry
/// `errors`, conflicts carry only `message`, and 201 carries `data`.
#[derive(Debug, Deserialize)]
pub struct SubmitResponseBody {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Option<Vec<String>>,

    #[serde(default)]
    pub data: Option<Registration>,
}

/// How one submission attempt settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted and persisted the submission.
    Created(Registration),
    /// Server rejected with a list of specific violation messages.
    Rejected(Vec<String>),
    /// Server rejected without a violation list (conflict, server error).
    Failed(String),
    /// No response obtained (transport failure or unreadable body).
    Unreachable,
}
