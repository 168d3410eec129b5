//! Slack slash-command protocol support.
//!
//! This module provides:
//! - [`SignatureVerifier`] for authenticating webhook requests
//! - [`SlashCommand`] for the URL-encoded slash-command payload
//! - [`SlashResponse`] for the ephemeral reply envelope
//!
//! # Flow
//!
//! 1. Raw body is captured byte-for-byte
//! 2. Timestamp freshness is checked, then the `v0` HMAC signature
//! 3. Only a verified body is decoded into a [`SlashCommand`]
//! 4. The command handler replies with a [`SlashResponse`]

mod error;
mod signature;
mod types;

pub use error::RejectReason;
pub use signature::{
    REPLAY_WINDOW_SECS, SIGNATURE_HEADER, SIGNATURE_VERSION, SignatureVerifier, TIMESTAMP_HEADER,
    Verification, compute_signature,
};
pub use types::{FormError, ResponseType, SlashCommand, SlashResponse, parse_form_fields};
