//! Request ID middleware for correlating webhook deliveries in logs.
//!
//! Slack does not send a request ID, so one is generated unless a proxy in
//! front of the service already set `x-request-id`. Slack redeliveries are
//! tagged with their retry number.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header Slack sets on redelivered webhooks.
const SLACK_RETRY_NUM_HEADER: &str = "x-slack-retry-num";

/// Longest upstream request ID that is trusted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Middleware that ensures every request has a unique request ID.
///
/// An upstream `x-request-id` is reused when it is short printable ASCII;
/// otherwise a UUID v4 is generated. The ID is recorded in the current span,
/// set as a Sentry tag and echoed in the response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| is_acceptable_request_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    let span = Span::current();
    span.record("request_id", request_id.as_str());

    if let Some(retry) = request
        .headers()
        .get(SLACK_RETRY_NUM_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        span.record("slack_retry_num", retry);
    }

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn is_acceptable_request_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_request_ids() {
        assert!(is_acceptable_request_id("abc-123"));
        assert!(is_acceptable_request_id(&Uuid::new_v4().to_string()));
    }

    #[test]
    fn test_rejected_request_ids() {
        assert!(!is_acceptable_request_id(""));
        assert!(!is_acceptable_request_id("has space"));
        assert!(!is_acceptable_request_id(&"a".repeat(MAX_REQUEST_ID_LEN + 1)));
    }
}
