//! HTTP request handlers.

use super::types::{HealthResponse, SubmitRequest, SubmitResponse};
use super::AppState;
use crate::error::ApiError;
use crate::store::NewRegistration;
use crate::validation;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Registration API is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Validate a submission and persist it.
///
/// All violations are accumulated and returned together; persistence is only
/// touched once the whole triple passes.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let violations = validation::validate(&request.name, &request.phone, &request.email);
    if !violations.is_empty() {
        warn!(count = violations.len(), "Submission rejected by validation");
        return Err(ApiError::Validation(violations));
    }

    let new = NewRegistration {
        name: request.name.trim().to_string(),
        phone: request.phone.trim().to_string(),
        email: request.email.trim().to_string(),
    };

    let record = state.store.insert(&new).await?;
    info!(id = record.id, email = %record.email, "Registration created");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Registration successful!".to_string(),
            data: record,
        }),
    ))
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": "Route not found"
        })),
    )
}
