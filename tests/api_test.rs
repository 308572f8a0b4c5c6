//! Integration tests for API endpoints.
//!
//! These tests drive the real router with a mock user service and a mock
//! database backend; no network or Postgres instance is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use tower::ServiceExt;

use users_api::api::{create_router, AppState};
use users_api::domain::{CreateUser, UpdateUser, UserResponse};
use users_api::errors::{AppError, AppResult};
use users_api::infra::Database;
use users_api::services::UserService;

// =============================================================================
// Mock Service
// =============================================================================

const MISSING_ID: i64 = 999;

fn sample_response(id: i64) -> UserResponse {
    UserResponse {
        id,
        name: "Test User".to_string(),
        email: format!("user{}@example.com", id),
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mock user service that returns canned responses
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        if input.email == "taken@example.com" {
            return Err(AppError::conflict(format!(
                "User with email {}",
                input.email
            )));
        }

        Ok(UserResponse {
            id: 1,
            name: input.name,
            email: input.email,
            active: input.active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn get_user(&self, id: i64) -> AppResult<Option<UserResponse>> {
        Ok((id != MISSING_ID).then(|| sample_response(id)))
    }

    async fn list_users(&self, skip: u64, _limit: u64) -> AppResult<Vec<UserResponse>> {
        if skip > 0 {
            return Ok(vec![]);
        }
        Ok(vec![sample_response(1), sample_response(2)])
    }

    async fn update_user(&self, id: i64, input: UpdateUser) -> AppResult<Option<UserResponse>> {
        if id == MISSING_ID {
            return Ok(None);
        }
        if input.active == Some(true) {
            return Err(AppError::validation("User is already active"));
        }

        let mut response = sample_response(id);
        if let Some(name) = input.name {
            response.name = name;
        }
        Ok(Some(response))
    }

    async fn delete_user(&self, id: i64) -> AppResult<bool> {
        Ok(id != MISSING_ID)
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> axum::Router {
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    let state = AppState::new(Arc::new(MockUserService), database);
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn test_root_returns_service_metadata() {
    let response = test_app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Users API");
    assert_eq!(body["docs"], "/swagger-ui");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_201() {
    let request = json_request(
        "POST",
        "/users",
        serde_json::json!({"name": "Ana", "email": "ana@example.com"}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    // Omitted active defaults to true
    assert_eq!(body["active"], true);
}

#[tokio::test]
async fn test_create_user_invalid_email_returns_400() {
    let request = json_request(
        "POST",
        "/users",
        serde_json::json!({"name": "Ana", "email": "not-an-email"}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_empty_name_returns_400() {
    let request = json_request(
        "POST",
        "/users",
        serde_json::json!({"name": "", "email": "ana@example.com"}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_duplicate_email_returns_409() {
    let request = json_request(
        "POST",
        "/users",
        serde_json::json!({"name": "Ana", "email": "taken@example.com"}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_returns_all() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_shifted_window_is_empty() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users?skip=10&limit=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_user_returns_200() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user_returns_200() {
    let request = json_request("PUT", "/users/1", serde_json::json!({"name": "Renamed"}));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Renamed");
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let request = json_request("PUT", "/users/999", serde_json::json!({"name": "Renamed"}));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_same_status_returns_400() {
    let request = json_request("PUT", "/users/1", serde_json::json!({"active": true}));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["message"], "User is already active");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user_returns_204() {
    let response = test_app()
        .oneshot(empty_request("DELETE", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let response = test_app()
        .oneshot(empty_request("DELETE", "/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
