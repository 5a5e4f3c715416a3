//! Review summarization API integration tests
//!
//! Tests for POST /summarizeReviews against a mock completion endpoint.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::Mock;

use revus::backend::auth::sessions::TOKEN_TTL_SECS;
use revus::backend::reviews::completion::{build_prompt, DEFAULT_MODEL};

use crate::common::*;

#[tokio::test]
async fn test_register_login_summarize() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": DEFAULT_MODEL,
            "prompt": build_prompt("Great product\n\nBroke after a week"),
            "max_tokens": 150
        })))
        .respond_with(completion_response(CANNED_SUMMARY))
        .expect(1)
        .mount(&app.completion_api)
        .await;

    let user = create_test_user(&app.server, "shopper@example.com", "password123").await;
    let response = summarize(
        &app.server,
        &user.token,
        json!({ "reviews": ["Great product", "Broke after a week"] }),
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: Value = response.json();
    assert_eq!(body, json!({ "summary": CANNED_SUMMARY }));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_summarize_single_string() {
    let app = TestApp::new().await;
    mount_completion(&app.completion_api, "Short and positive.").await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    let response = summarize(&app.server, &user.token, json!({ "reviews": "Love it" })).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["summary"], "Short and positive.");
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;

    let response = app
        .server
        .post("/summarizeReviews")
        .json(&json!({ "reviews": "Love it" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Missing Authorization header");
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    for value in [user.token.clone(), format!("Token {}", user.token), "Bearer ".to_string()] {
        let response = app
            .server
            .post("/summarizeReviews")
            .add_header(AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
            .json(&json!({ "reviews": "Love it" }))
            .await;

        assert_error(
            &response,
            StatusCode::UNAUTHORIZED,
            "Malformed Authorization header, expected 'Bearer <token>'",
        );
    }
}

#[tokio::test]
async fn test_invalid_token() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;

    let response = summarize(&app.server, "not.a.jwt", json!({ "reviews": "Love it" })).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;
    let issued = Utc::now().timestamp() - TOKEN_TTL_SECS - 60;
    let token = app.tokens.issue_at(Uuid::new_v4(), issued).unwrap();

    let response = summarize(&app.server, &token, json!({ "reviews": "Love it" })).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Token expired");
}

#[tokio::test]
async fn test_token_checked_before_body() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/summarizeReviews")
        .text("{not json")
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Missing Authorization header");
}

#[tokio::test]
async fn test_reviews_validation() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    let cases = [
        (json!({}), "Missing required parameter: reviews"),
        (json!({ "reviews": "" }), "Missing required parameter: reviews"),
        (json!({ "reviews": [] }), "Missing required parameter: reviews"),
        (
            json!({ "reviews": 5 }),
            "Invalid parameter type: reviews. Expected string or array of strings.",
        ),
        (
            json!({ "reviews": ["fine", { "stars": 1 }] }),
            "Invalid parameter type: reviews. Expected string or array of strings.",
        ),
    ];

    for (body, message) in cases {
        let response = summarize(&app.server, &user.token, body).await;
        assert_error(&response, StatusCode::BAD_REQUEST, message);
    }
}

#[tokio::test]
async fn test_summarize_invalid_json() {
    let app = TestApp::new().await;
    expect_no_completion(&app.completion_api).await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    let response = app
        .server
        .post("/summarizeReviews")
        .add_header(AUTHORIZATION, bearer(&user.token))
        .text("{\"reviews\": ")
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid JSON data");
}

#[tokio::test]
async fn test_upstream_failure() {
    let app = TestApp::new().await;
    mount_completion_failure(&app.completion_api, 503).await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    let response = summarize(&app.server, &user.token, json!({ "reviews": "Love it" })).await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize reviews");
    let body: Value = response.json();
    assert_eq!(body["details"], json!({ "upstreamStatus": 503 }));
    assert!(!response.text().contains("org-1234"));
}

#[tokio::test]
async fn test_upstream_without_choices() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&app.completion_api)
        .await;
    let user = create_test_user(&app.server, "a@example.com", "password123").await;

    let response = summarize(&app.server, &user.token, json!({ "reviews": "Love it" })).await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize reviews");
    let body: Value = response.json();
    assert!(body.get("details").is_none());
}
