//! Integration test harness for the Slack todo server.
//!
//! Drives the real router in-process with `tower::ServiceExt::oneshot`;
//! no network or database is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p slack-todo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `webhook_auth` - Signature, replay window and body capture
//! - `slash_commands` - `/add`, `/done`, `/list` and dispatch behavior

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use slack_todo_server::config::SlackConfig;
use slack_todo_server::db::{InMemoryTodoStore, TodoStore};
use slack_todo_server::slack::{SIGNATURE_HEADER, TIMESTAMP_HEADER, compute_signature};
use slack_todo_server::{AppState, router};

/// Signing secret every [`TestApp`] is configured with.
pub const TEST_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

/// A router plus the store behind it.
pub struct TestApp {
    router: Router,
    store: Arc<InMemoryTodoStore>,
}

impl TestApp {
    /// App with [`TEST_SECRET`] and an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(slack_config(Some(TEST_SECRET)))
    }

    /// App whose signing secret is not configured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::with_config(slack_config(None))
    }

    /// App with custom Slack settings and an empty in-memory store.
    #[must_use]
    pub fn with_config(config: SlackConfig) -> Self {
        let store = Arc::new(InMemoryTodoStore::new());
        let router = router(AppState::new(&config, store.clone()));
        Self { router, store }
    }

    /// The in-memory store, for asserting on side effects.
    #[must_use]
    pub fn store(&self) -> &InMemoryTodoStore {
        &self.store
    }

    /// Send one request through a fresh clone of the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();

        TestResponse {
            status,
            body: bytes.to_vec(),
        }
    }

    /// Send a correctly signed slash-command POST and return the reply text.
    ///
    /// Panics unless the reply is a 200 ephemeral message.
    pub async fn command(&self, uri: &str, body: &str) -> String {
        let response = self.send(signed_request(uri, body)).await;
        assert_eq!(response.status, StatusCode::OK, "uri={uri} body={body}");

        let json = response.json();
        assert_eq!(json["response_type"], "ephemeral");
        json["text"]
            .as_str()
            .expect("reply text is a string")
            .to_owned()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Router over an arbitrary store, signed with [`TEST_SECRET`].
#[must_use]
pub fn router_with_store(store: Arc<dyn TodoStore>) -> Router {
    router(AppState::new(&slack_config(Some(TEST_SECRET)), store))
}

/// Slack settings with the given secret and default limits.
#[must_use]
pub fn slack_config(secret: Option<&str>) -> SlackConfig {
    SlackConfig {
        signing_secret: secret.map(|s| SecretString::from(s.to_owned())),
        ..SlackConfig::default()
    }
}

/// Collected response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

/// POST `body` to `uri` signed with [`TEST_SECRET`] at the current time.
#[must_use]
pub fn signed_request(uri: &str, body: &str) -> Request<Body> {
    signed_request_at(uri, body, chrono::Utc::now().timestamp())
}

/// POST `body` to `uri` signed with [`TEST_SECRET`] at `timestamp`.
#[must_use]
pub fn signed_request_at(uri: &str, body: &str, timestamp: i64) -> Request<Body> {
    let timestamp = timestamp.to_string();
    let signature = compute_signature(TEST_SECRET.as_bytes(), &timestamp, body.as_bytes())
        .expect("HMAC accepts any key length");

    request_with_headers(uri, body, Some(&timestamp), Some(&signature))
}

/// POST `body` to `uri` with explicit (possibly absent) Slack headers.
#[must_use]
pub fn request_with_headers(
    uri: &str,
    body: &str,
    timestamp: Option<&str>,
    signature: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(timestamp) = timestamp {
        builder = builder.header(TIMESTAMP_HEADER, timestamp);
    }
    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    builder
        .body(Body::from(body.to_owned()))
        .expect("request builds")
}
