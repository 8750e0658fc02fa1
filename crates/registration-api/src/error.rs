//! Error types for the registration API.

use crate::validation::Violation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
///
/// `errors` is only present on validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(violations.iter().map(|v| v.to_string()).collect()),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::CONFLICT,
                "This email is already registered".to_string(),
                None,
            ),
            ApiError::Database(e) => {
                // Full cause stays server-side; the caller gets a generic message.
                error!(error = %e, "Persistence failure during submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error. Please try again later.".to_string(),
                    None,
                )
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
