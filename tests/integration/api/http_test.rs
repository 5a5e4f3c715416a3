//! HTTP surface integration tests
//!
//! Method handling, malformed bodies, unknown paths and CORS.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::*;

#[tokio::test]
async fn test_non_post_rejected() {
    let app = TestApp::new().await;

    for path in ["/register", "/login", "/summarizeReviews"] {
        let response = app.server.get(path).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Invalid request method. Only POST requests are allowed.",
        );
        assert_cors_headers(&response);

        let response = app.server.put(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_invalid_json_rejected() {
    let app = TestApp::new().await;

    for path in ["/register", "/login"] {
        let response = app.server.post(path).text("{\"email\": \"a@x.com\",").await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Invalid JSON data");
        assert!(!response.text().contains("a@x.com"));
        assert_cors_headers(&response);
    }
    assert_eq!(app.store.open_sessions(), 0);
}

#[tokio::test]
async fn test_unknown_path() {
    let app = TestApp::new().await;

    let response = app.server.post("/summarize").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Not found");
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_success() {
    let app = TestApp::new().await;

    let response = register(&app.server, "cors@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_preflight() {
    let app = TestApp::new().await;

    let response = app
        .server
        .method(Method::OPTIONS, "/summarizeReviews")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("https://shop.example"),
        )
        .add_header(
            axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
            axum::http::HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_bare_options() {
    let app = TestApp::new().await;

    let response = app.server.method(Method::OPTIONS, "/login").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());
    assert_cors_headers(&response);
}
