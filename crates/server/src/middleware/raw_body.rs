//! Raw request body capture.
//!
//! Drains the body stream into one owned buffer before anything parses it,
//! so the signature is checked over exactly the bytes Slack signed.

use axum::body::{Body, Bytes};
use futures::StreamExt;
use thiserror::Error;
use tracing::debug;

/// Errors that stop a body from being captured.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The stream failed before end-of-stream.
    #[error("request body aborted: {0}")]
    Aborted(String),

    /// The body exceeded the configured limit.
    #[error("request body exceeds {limit} bytes")]
    TooLarge {
        /// Configured maximum in bytes.
        limit: usize,
    },
}

/// Read `body` to end-of-stream and return its bytes in arrival order.
///
/// Chunks are appended verbatim; nothing is decoded or transcoded. The
/// future completes only once the stream is exhausted, so no caller can
/// observe a partial body.
///
/// # Errors
///
/// Returns [`CaptureError::Aborted`] if the stream yields an error and
/// [`CaptureError::TooLarge`] once more than `limit` bytes arrive.
pub async fn capture_raw_body(body: Body, limit: usize) -> Result<Bytes, CaptureError> {
    let mut stream = body.into_data_stream();
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| CaptureError::Aborted(e.to_string()))?;

        if buffer.len().saturating_add(chunk.len()) > limit {
            return Err(CaptureError::TooLarge { limit });
        }

        debug!(chunk_len = chunk.len(), "Received body chunk");
        buffer.extend_from_slice(&chunk);
    }

    debug!(body_len = buffer.len(), "Finished capturing body");
    Ok(Bytes::from(buffer))
}
