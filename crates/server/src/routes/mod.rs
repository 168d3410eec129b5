//! HTTP route handlers.
//!
//! # Route Structure
//!
//! Signed (Slack signature required, always 200 once verified):
//! - `POST /add` - Add a todo for the invoking user
//! - `POST /done` - Mark one of the invoking user's todos complete
//! - `POST /list` - List the invoking user's todos
//! - `POST /slack/commands` - Single endpoint dispatching on the `command` field
//!
//! Unsigned:
//! - `GET /health` - Liveness
//! - `GET /health/ready` - Readiness (store reachable)

mod commands;
mod health;

use axum::{
    Router,
    middleware::from_fn,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::middleware::{request_id_middleware, verify_slack_request};
use crate::state::AppState;

/// Build the application router.
///
/// Tracing and Sentry layers are added by the binary so tests can drive the
/// bare router.
pub fn router(state: AppState) -> Router {
    let signed = Router::new()
        .route("/add", post(commands::add))
        .route("/done", post(commands::done))
        .route("/list", post(commands::list))
        .route("/slack/commands", post(commands::dispatch))
        .route_layer(from_fn_with_state(state.clone(), verify_slack_request));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(signed)
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
