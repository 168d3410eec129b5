//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing, added in `main`)
//! 3. Request ID (add unique ID to each request)
//! 4. Slack auth (route layer on signed routes only): capture raw body,
//!    verify signature, hand the verified bytes to the handler

pub mod raw_body;
pub mod request_id;
pub mod slack_auth;

pub use raw_body::{CaptureError, capture_raw_body};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use slack_auth::{VerifiedBody, verify_slack_request};
