//! Integration tests for the registration API.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use registration_api::{
    api::{create_router, AppState},
    store::Store,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the in-memory store, returning the store
/// handle so tests can inspect what was persisted.
fn create_test_app() -> (Router, Arc<Store>) {
    let store = Arc::new(Store::memory());
    let state = AppState {
        store: store.clone(),
    };
    (create_router(state), store)
}

fn submit_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn memory_store(store: &Store) -> &registration_api::MemoryStore {
    match store {
        Store::Memory(m) => m,
        _ => unreachable!("tests use the memory store"),
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration API is running");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Route not found");
}

#[tokio::test]
async fn test_valid_submission_creates_record() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(submit_request(serde_json::json!({
            "name": "  Jane Doe  ",
            "phone": " 98765-43210 ",
            "email": "jane@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration successful!");
    // Response echoes the trimmed inputs, phone with its separators intact.
    assert_eq!(json["data"]["name"], "Jane Doe");
    assert_eq!(json["data"]["phone"], "98765-43210");
    assert_eq!(json["data"]["email"], "jane@example.com");
    assert_eq!(json["data"]["id"], 1);
    assert!(json["data"]["created_at"].is_string());

    assert_eq!(memory_store(&store).count().await, 1);
}

#[tokio::test]
async fn test_invalid_submission_lists_all_errors() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(submit_request(serde_json::json!({
            "name": "A",
            "phone": "123",
            "email": "bad"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["errors"],
        serde_json::json!([
            "Name must be at least 2 characters long",
            "Phone number must be 10 digits (you entered 3)",
            "Invalid email format"
        ])
    );

    // Persistence untouched on validation failure.
    assert_eq!(memory_store(&store).count().await, 0);
}

#[tokio::test]
async fn test_country_code_makes_phone_too_long() {
    let (app, store) = create_test_app();

    // "+91 98765-43210" strips to 12 digits: the country code counts.
    let response = app
        .oneshot(submit_request(serde_json::json!({
            "name": "Jane Doe",
            "phone": "+91 98765-43210",
            "email": "jane@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["errors"],
        serde_json::json!(["Phone number must be exactly 10 digits (you entered 12)"])
    );
    assert_eq!(memory_store(&store).count().await, 0);
}

#[tokio::test]
async fn test_missing_fields_are_validation_errors() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(submit_request(serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[1], "Phone number is required");
}

#[tokio::test]
async fn test_name_can_fail_both_rules() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(submit_request(serde_json::json!({
            "name": "7",
            "phone": "9876543210",
            "email": "jane@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["errors"],
        serde_json::json!([
            "Name must be at least 2 characters long",
            "Name must contain only letters and spaces"
        ])
    );
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict() {
    let (app, store) = create_test_app();

    let first = app
        .clone()
        .oneshot(submit_request(serde_json::json!({
            "name": "Jane Doe",
            "phone": "9876543210",
            "email": "jane@example.com"
        })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(submit_request(serde_json::json!({
            "name": "Janet Doe",
            "phone": "9876543211",
            "email": "jane@example.com"
        })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "This email is already registered");
    assert!(json.get("errors").is_none());

    assert_eq!(memory_store(&store).count().await, 1);
}

#[tokio::test]
async fn test_resubmission_after_conflict_is_independent() {
    let (app, store) = create_test_app();

    let body = serde_json::json!({
        "name": "Jane Doe",
        "phone": "9876543210",
        "email": "jane@example.com"
    });

    let first = app.clone().oneshot(submit_request(body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let conflict = app.clone().oneshot(submit_request(body)).await.unwrap();
    assert_eq!(conflict.status(), StatusCode::CONFLICT);

    // A fresh email goes through normal validation and insert.
    let retry = app
        .oneshot(submit_request(serde_json::json!({
            "name": "Jane Doe",
            "phone": "9876543210",
            "email": "jane.doe@example.com"
        })))
        .await
        .unwrap();
    assert_eq!(retry.status(), StatusCode::CREATED);

    assert_eq!(memory_store(&store).count().await, 2);
}

#[tokio::test]
async fn test_concurrent_duplicate_submissions_one_wins() {
    let (app, store) = create_test_app();

    let body = serde_json::json!({
        "name": "Jane Doe",
        "phone": "9876543210",
        "email": "race@example.com"
    });

    let a = {
        let app = app.clone();
        let body = body.clone();
        tokio::spawn(async move { app.oneshot(submit_request(body)).await.unwrap() })
    };
    let b = tokio::spawn(async move { app.oneshot(submit_request(body)).await.unwrap() });

    let statuses = [a.await.unwrap().status(), b.await.unwrap().status()];
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(memory_store(&store).count().await, 1);
}
