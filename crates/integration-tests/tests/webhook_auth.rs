//! Integration tests for Slack request authentication.
//!
//! Every rejection happens before the body is parsed, so none of these
//! requests may touch the store.

#![allow(clippy::unwrap_used)]

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;

use slack_todo_integration_tests::{
    TEST_SECRET, TestApp, request_with_headers, signed_request, signed_request_at, slack_config,
};
use slack_todo_server::config::SlackConfig;
use slack_todo_server::middleware::REQUEST_ID_HEADER;
use slack_todo_server::slack::compute_signature;

const BODY: &str = "command=%2Fadd&text=buy+milk&user_id=U1";

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn test_missing_headers_are_unauthorized() {
    let app = TestApp::new();
    let ts = now().to_string();

    for (timestamp, signature) in [
        (None, None),
        (Some(ts.as_str()), None),
        (None, Some("v0=00")),
        (Some(""), Some("")),
    ] {
        let response = app
            .send(request_with_headers("/add", BODY, timestamp, signature))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json(), json!({"error": "Unauthorized"}));
    }

    assert!(app.store().is_empty().await);
}

#[tokio::test]
async fn test_stale_and_future_timestamps_are_unauthorized() {
    let app = TestApp::new();

    for timestamp in [now() - 301, now() + 301, now() - 3600] {
        let response = app.send(signed_request_at("/add", BODY, timestamp)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "ts={timestamp}");
    }

    assert!(app.store().is_empty().await);
}

#[tokio::test]
async fn test_timestamp_inside_window_is_accepted() {
    let app = TestApp::new();

    let response = app.send(signed_request_at("/add", BODY, now() - 60)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.store().len().await, 1);
}

#[tokio::test]
async fn test_non_numeric_timestamp_is_unauthorized() {
    let app = TestApp::new();
    let signature = compute_signature(TEST_SECRET.as_bytes(), "soon", BODY.as_bytes()).unwrap();

    let response = app
        .send(request_with_headers("/add", BODY, Some("soon"), Some(&signature)))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_secret_is_unauthorized() {
    let app = TestApp::new();
    let ts = now().to_string();
    let signature = compute_signature(b"not-the-secret", &ts, BODY.as_bytes()).unwrap();

    let response = app
        .send(request_with_headers("/add", BODY, Some(&ts), Some(&signature)))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.store().is_empty().await);
}

#[tokio::test]
async fn test_tampered_body_is_unauthorized() {
    let app = TestApp::new();
    let ts = now().to_string();
    let signature = compute_signature(TEST_SECRET.as_bytes(), &ts, BODY.as_bytes()).unwrap();

    let tampered = BODY.replace("U1", "U2");
    let response = app
        .send(request_with_headers("/add", &tampered, Some(&ts), Some(&signature)))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signature_with_wrong_length_is_unauthorized() {
    let app = TestApp::new();
    let ts = now().to_string();

    let response = app
        .send(request_with_headers("/add", BODY, Some(&ts), Some("v0=abc")))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unconfigured_secret_is_server_error() {
    let app = TestApp::unconfigured();

    let response = app.send(signed_request("/list", "user_id=U1")).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({"error": "Server configuration error"})
    );
}

// =============================================================================
// Body capture
// =============================================================================

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = TestApp::with_config(SlackConfig {
        max_body_bytes: 16,
        ..slack_config(Some(TEST_SECRET))
    });

    let response = app.send(signed_request("/add", BODY)).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.store().is_empty().await);
}

#[tokio::test]
async fn test_signature_covers_exact_bytes() {
    let app = TestApp::new();
    // `+` and `%20` decode the same but sign differently
    let signed_body = "text=buy+milk&user_id=U1";
    let sent_body = "text=buy%20milk&user_id=U1";
    let ts = now().to_string();
    let signature =
        compute_signature(TEST_SECRET.as_bytes(), &ts, signed_body.as_bytes()).unwrap();

    let response = app
        .send(request_with_headers("/add", sent_body, Some(&ts), Some(&signature)))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Unsigned routes
// =============================================================================

#[tokio::test]
async fn test_health_needs_no_signature() {
    let app = TestApp::unconfigured();

    let response = app
        .send(Request::get("/health").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"ok");

    let response = app
        .send(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let router = slack_todo_integration_tests::router_with_store(std::sync::Arc::new(
        slack_todo_server::db::InMemoryTodoStore::new(),
    ));

    let response = tower::ServiceExt::oneshot(
        router.clone(),
        Request::get("/health")
            .header(REQUEST_ID_HEADER, "edge-123")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "edge-123");

    // Rejected requests still carry an id
    let response = tower::ServiceExt::oneshot(
        router,
        request_with_headers("/list", "user_id=U1", None, None),
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
