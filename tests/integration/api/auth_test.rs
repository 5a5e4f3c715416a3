//! Authentication API integration tests
//!
//! Tests for POST /register and POST /login.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use revus::backend::auth::users::CredentialStore;
use revus::backend::error::INVALID_CREDENTIALS;

use crate::common::*;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = register(&app.server, "test@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "User registered successfully" }));
    assert_eq!(app.store.user_count().await, 1);
    assert_eq!(app.store.open_sessions(), 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    register(&app.server, "test@example.com", "password123").await;

    let response = register(&app.server, "test@example.com", "another-password").await;

    assert_error(&response, StatusCode::BAD_REQUEST, "User already exists");
    assert_eq!(app.store.user_count().await, 1);
    assert_eq!(app.store.open_sessions(), 0);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "password": "password123" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Missing required parameter: email");
    let body: Value = response.json();
    assert_eq!(body["details"], json!({ "field": "email" }));

    let response = register(&app.server, "test@example.com", "").await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Missing required parameter: password");

    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    register(&app.server, "test@example.com", "password123").await;

    let response = login(&app.server, "test@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();
    assert!(app.tokens.verify(token).is_ok());
    assert_eq!(app.store.open_sessions(), 0);
}

#[tokio::test]
async fn test_login_token_identifies_user() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "who@example.com", "password123").await;

    let mut session = app.store.open().await.unwrap();
    let stored = session.find_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(app.tokens.verify(&user.token).unwrap(), stored.id);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    register(&app.server, "test@example.com", "password123").await;

    let response = login(&app.server, "test@example.com", "wrongpassword").await;

    assert_error(&response, StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);
    assert_eq!(app.store.open_sessions(), 0);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    register(&app.server, "test@example.com", "password123").await;

    let wrong_password = login(&app.server, "test@example.com", "wrongpassword").await;
    let unknown_email = login(&app.server, "nobody@example.com", "password123").await;

    assert_error(&wrong_password, StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);
    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": "test@example.com" }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Missing required parameter: password");
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let (server, _completion_api) = failing_store_server().await;

    for response in [
        register(&server, "test@example.com", "password123").await,
        login(&server, "test@example.com", "password123").await,
    ] {
        assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        assert!(!response.text().contains("hunter2"));
        assert_cors_headers(&response);
    }
}
