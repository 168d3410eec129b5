//! Integration tests for slash-command behavior.
//!
//! All requests are correctly signed; every reply must be a 200 ephemeral
//! message, including failures.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use tower::ServiceExt;

use slack_todo_core::{SlackUserId, TaskText, Todo, TodoId};
use slack_todo_integration_tests::{TestApp, router_with_store, signed_request};
use slack_todo_server::db::{StoreError, TodoStore};

// =============================================================================
// /add
// =============================================================================

#[tokio::test]
async fn test_add_creates_todo() {
    let app = TestApp::new();

    let reply = app.command("/add", "text=buy+milk&user_id=U1").await;
    assert_eq!(reply, "✅ Added todo: \"buy milk\"");
    assert_eq!(app.store().len().await, 1);
}

#[tokio::test]
async fn test_add_trims_task() {
    let app = TestApp::new();

    let reply = app
        .command("/add", "text=%20%20call+mom%20&user_id=U1")
        .await;
    assert_eq!(reply, "✅ Added todo: \"call mom\"");
}

#[tokio::test]
async fn test_add_without_text_shows_usage() {
    let app = TestApp::new();

    for body in ["text=&user_id=U1", "text=+++&user_id=U1", "user_id=U1"] {
        let reply = app.command("/add", body).await;
        assert_eq!(reply, "Please provide a task to add. Usage: /add <task>");
    }
    assert!(app.store().is_empty().await);
}

// =============================================================================
// /done
// =============================================================================

#[tokio::test]
async fn test_done_completes_own_todo() {
    let app = TestApp::new();
    app.command("/add", "text=buy+milk&user_id=U1").await;

    let reply = app.command("/done", "text=1&user_id=U1").await;
    assert_eq!(reply, "✅ Marked todo as done: \"buy milk\"");
}

#[tokio::test]
async fn test_done_usage_and_invalid_id() {
    let app = TestApp::new();

    let reply = app.command("/done", "text=&user_id=U1").await;
    assert_eq!(reply, "Please provide a todo ID. Usage: /done <id>");

    let reply = app.command("/done", "text=abc&user_id=U1").await;
    assert_eq!(reply, "Please provide a valid todo ID number.");
}

#[tokio::test]
async fn test_done_unknown_id_is_not_found() {
    let app = TestApp::new();

    let reply = app.command("/done", "text=99&user_id=U1").await;
    assert_eq!(
        reply,
        "Todo not found or you don't have permission to modify it."
    );
}

#[tokio::test]
async fn test_done_other_users_todo_is_not_found() {
    let app = TestApp::new();
    app.command("/add", "text=secret+plan&user_id=U1").await;

    let reply = app.command("/done", "text=1&user_id=U2").await;
    assert_eq!(
        reply,
        "Todo not found or you don't have permission to modify it."
    );

    // Still pending for its owner
    let reply = app.command("/list", "user_id=U1").await;
    assert_eq!(reply, "*📝 Pending Todos:*\n1. secret plan\n");
}

// =============================================================================
// /list
// =============================================================================

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new();

    let reply = app.command("/list", "user_id=U1").await;
    assert_eq!(reply, "No todos found. Use /add to create your first todo!");
}

#[tokio::test]
async fn test_list_pending_then_completed() {
    let app = TestApp::new();
    app.command("/add", "text=buy+milk&user_id=U1").await;
    app.command("/add", "text=write+report&user_id=U1").await;
    app.command("/done", "text=1&user_id=U1").await;

    let reply = app.command("/list", "user_id=U1").await;
    assert_eq!(
        reply,
        "*📝 Pending Todos:*\n2. write report\n\n*✅ Completed Todos:*\n1. ~buy milk~\n"
    );
}

#[tokio::test]
async fn test_list_only_completed() {
    let app = TestApp::new();
    app.command("/add", "text=buy+milk&user_id=U1").await;
    app.command("/done", "text=1&user_id=U1").await;

    let reply = app.command("/list", "user_id=U1").await;
    assert_eq!(reply, "\n*✅ Completed Todos:*\n1. ~buy milk~\n");
}

#[tokio::test]
async fn test_list_is_per_user() {
    let app = TestApp::new();
    app.command("/add", "text=mine&user_id=U1").await;
    app.command("/add", "text=theirs&user_id=U2").await;

    let reply = app.command("/list", "user_id=U1").await;
    assert_eq!(reply, "*📝 Pending Todos:*\n1. mine\n");
}

// =============================================================================
// Dispatch endpoint
// =============================================================================

#[tokio::test]
async fn test_single_endpoint_dispatches_on_command_field() {
    let app = TestApp::new();

    let reply = app
        .command("/slack/commands", "command=%2Fadd&text=buy+milk&user_id=U1")
        .await;
    assert_eq!(reply, "✅ Added todo: \"buy milk\"");

    let reply = app
        .command("/slack/commands", "command=%2Flist&user_id=U1")
        .await;
    assert_eq!(reply, "*📝 Pending Todos:*\n1. buy milk\n");
}

#[tokio::test]
async fn test_single_endpoint_unknown_command() {
    let app = TestApp::new();

    let reply = app
        .command("/slack/commands", "command=%2Fremind&user_id=U1")
        .await;
    assert!(reply.starts_with("Unknown command `/remind`"), "{reply}");
}

// =============================================================================
// Failures after verification
// =============================================================================

#[tokio::test]
async fn test_invalid_user_id_gets_generic_failure() {
    let app = TestApp::new();

    let reply = app.command("/add", "text=buy+milk&user_id=").await;
    assert_eq!(reply, "Error adding todo. Please try again.");
    assert!(app.store().is_empty().await);
}

#[tokio::test]
async fn test_repeated_field_uses_last_value() {
    let app = TestApp::new();

    let reply = app.command("/add", "text=a&text=b&user_id=U1").await;
    assert_eq!(reply, "✅ Added todo: \"b\"");
    assert_eq!(app.store().len().await, 1);
}

struct FailingStore;

#[async_trait]
impl TodoStore for FailingStore {
    async fn create(&self, _: &SlackUserId, _: &TaskText) -> Result<Todo, StoreError> {
        Err(StoreError::DataCorruption("disk on fire".to_owned()))
    }

    async fn find_for_owner(
        &self,
        _: TodoId,
        _: &SlackUserId,
    ) -> Result<Option<Todo>, StoreError> {
        Err(StoreError::DataCorruption("disk on fire".to_owned()))
    }

    async fn mark_completed(&self, _: TodoId, _: &SlackUserId) -> Result<Todo, StoreError> {
        Err(StoreError::DataCorruption("disk on fire".to_owned()))
    }

    async fn list_by_owner(&self, _: &SlackUserId) -> Result<Vec<Todo>, StoreError> {
        Err(StoreError::DataCorruption("disk on fire".to_owned()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::DataCorruption("disk on fire".to_owned()))
    }
}

#[tokio::test]
async fn test_store_failure_replies_200_with_generic_message() {
    let router = router_with_store(Arc::new(FailingStore));

    for (uri, body, expected) in [
        ("/add", "text=x&user_id=U1", "Error adding todo. Please try again."),
        (
            "/done",
            "text=1&user_id=U1",
            "Error marking todo as done. Please try again.",
        ),
        ("/list", "user_id=U1", "Error retrieving todos. Please try again."),
    ] {
        let response = router
            .clone()
            .oneshot(signed_request(uri, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["response_type"], "ephemeral");
        assert_eq!(json["text"], expected);
    }
}

#[tokio::test]
async fn test_readiness_reports_store_failure() {
    let router = router_with_store(Arc::new(FailingStore));

    let response = router
        .oneshot(
            axum::http::Request::get("/health/ready")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
