//! Unified error handling for the webhook server.
//!
//! Only failures raised before a command handler runs become HTTP errors.
//! Bodies stay generic so callers cannot tell which check failed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::middleware::CaptureError;
use crate::slack::RejectReason;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be captured.
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Server is missing required configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request failed Slack authentication.
    #[error("Unauthorized: {0}")]
    Unauthorized(RejectReason),
}

impl From<RejectReason> for AppError {
    fn from(reason: RejectReason) -> Self {
        if reason.is_configuration_error() {
            Self::Configuration(reason.to_string())
        } else {
            Self::Unauthorized(reason)
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Capture(CaptureError::Aborted(_)) => StatusCode::BAD_REQUEST,
            Self::Capture(CaptureError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Client-facing message; never names the failing check.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Capture(CaptureError::Aborted(_)) => "Bad request",
            Self::Capture(CaptureError::TooLarge { .. }) => "Payload too large",
            Self::Configuration(_) => "Server configuration error",
            Self::Unauthorized(_) => "Unauthorized",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Configuration(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Webhook request error"
            );
        }

        let status = self.status();
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
