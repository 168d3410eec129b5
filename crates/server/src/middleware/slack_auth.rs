//! Slack request authentication middleware.
//!
//! Runs as a route layer on every slash-command route:
//!
//! 1. Capture the raw body to end-of-stream
//! 2. Verify timestamp freshness and the `v0` signature over those bytes
//! 3. Rebuild the request with the same bytes and attach [`VerifiedBody`]
//!
//! Only this layer may answer with a non-200 status; handlers behind it
//! always reply 200.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::raw_body::capture_raw_body;
use crate::error::AppError;
use crate::slack::{FormError, SIGNATURE_HEADER, SlashCommand, TIMESTAMP_HEADER};
use crate::state::AppState;

/// Request body whose Slack signature has been verified.
///
/// Only [`verify_slack_request`] inserts this extension, so a handler that
/// extracts it cannot run on an unverified request.
#[derive(Debug, Clone)]
pub struct VerifiedBody(Bytes);

impl VerifiedBody {
    /// The verified bytes exactly as received.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode the verified bytes as a slash-command form.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid URL-encoded form data.
    pub fn slash_command(&self) -> Result<SlashCommand, FormError> {
        SlashCommand::from_form(&self.0)
    }
}

/// Middleware that authenticates Slack webhook requests.
///
/// # Errors
///
/// - [`AppError::Capture`] if the body stream aborts or is too large
/// - [`AppError::Configuration`] if no signing secret is configured
/// - [`AppError::Unauthorized`] for missing headers, stale timestamps and
///   signature mismatches
pub async fn verify_slack_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    let raw_body = capture_raw_body(body, state.max_body_bytes()).await?;

    let timestamp = header_str(&parts.headers, TIMESTAMP_HEADER);
    let signature = header_str(&parts.headers, SIGNATURE_HEADER);

    if let Err(reason) = state
        .verifier()
        .verify(timestamp, signature, &raw_body)
        .into_result()
    {
        warn!(%reason, uri = %parts.uri, "Slack request rejected");
        return Err(reason.into());
    }

    debug!(body_len = raw_body.len(), "Slack request verified");

    let mut request = Request::from_parts(parts, Body::from(raw_body.clone()));
    request.extensions_mut().insert(VerifiedBody(raw_body));

    Ok(next.run(request).await)
}

/// Header value as `&str`; absent and non-ASCII values both read as `None`.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
