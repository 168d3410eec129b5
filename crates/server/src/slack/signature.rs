//! Slack request signature verification (`v0` signing scheme).
//!
//! See: <https://api.slack.com/authentication/verifying-requests-from-slack>

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use tracing::{debug, warn};

use super::error::RejectReason;
use crate::config::SlackConfig;

/// Header carrying the `v0=`-prefixed hex signature.
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Header carrying the request timestamp in Unix seconds.
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Signing scheme version, used both in the base string and as signature prefix.
pub const SIGNATURE_VERSION: &str = "v0";

/// Largest accepted distance between the request timestamp and now, in
/// seconds. Fixed by the Slack protocol.
pub const REPLAY_WINDOW_SECS: u64 = 300;

/// Outcome of verifying one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Verification {
    /// Signature matched inside the replay window.
    Verified,
    /// Request must not be processed further.
    Rejected(RejectReason),
}

impl Verification {
    /// Returns `true` for [`Verification::Verified`].
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Convert into a `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] of a rejected request.
    pub const fn into_result(self) -> Result<(), RejectReason> {
        match self {
            Self::Verified => Ok(()),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Verifies Slack webhook signatures against an injected signing secret.
///
/// The secret is fixed at construction; nothing is read from the environment
/// at request time.
#[derive(Clone)]
pub struct SignatureVerifier {
    /// Signing secret, `None` when the server is misconfigured.
    signing_secret: Option<SecretString>,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SignatureVerifier {
    /// Create a verifier; `None` rejects every request as misconfigured.
    #[must_use]
    pub const fn new(signing_secret: Option<SecretString>) -> Self {
        Self { signing_secret }
    }

    /// Create a verifier from the Slack section of the server configuration.
    #[must_use]
    pub fn from_config(config: &SlackConfig) -> Self {
        Self::new(config.signing_secret.clone())
    }

    /// Returns `true` if a signing secret is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.signing_secret.is_some()
    }

    /// Verify a request against the current wall clock.
    pub fn verify(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        raw_body: &[u8],
    ) -> Verification {
        self.verify_at(timestamp, signature, raw_body, chrono::Utc::now().timestamp())
    }

    /// Verify a request as of `now` (Unix seconds).
    ///
    /// Checks run in a fixed order: secret configured, headers present,
    /// timestamp fresh, signature equal. The first failing check decides
    /// the [`RejectReason`].
    pub fn verify_at(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        raw_body: &[u8],
        now: i64,
    ) -> Verification {
        let Some(secret) = &self.signing_secret else {
            return Verification::Rejected(RejectReason::SecretNotConfigured);
        };

        let (Some(timestamp), Some(signature)) = (
            timestamp.filter(|t| !t.is_empty()),
            signature.filter(|s| !s.is_empty()),
        ) else {
            return Verification::Rejected(RejectReason::MissingHeaders);
        };

        let Ok(ts) = timestamp.parse::<i64>() else {
            warn!("Unparseable Slack request timestamp");
            return Verification::Rejected(RejectReason::StaleTimestamp);
        };

        let age_secs = now.abs_diff(ts);
        if age_secs > REPLAY_WINDOW_SECS {
            warn!(age_secs, "Slack request timestamp outside replay window");
            return Verification::Rejected(RejectReason::StaleTimestamp);
        }

        let Ok(expected) =
            compute_signature(secret.expose_secret().as_bytes(), timestamp, raw_body)
        else {
            return Verification::Rejected(RejectReason::SignatureMismatch);
        };

        if !constant_time_compare(expected.as_bytes(), signature.as_bytes()) {
            return Verification::Rejected(RejectReason::SignatureMismatch);
        }

        debug!("Slack signature verified");
        Verification::Verified
    }
}

/// Compute the `v0=<hex>` signature for a raw body.
///
/// The HMAC input is `v0:{timestamp}:{raw_body}` with the body bytes fed in
/// exactly as received.
///
/// # Errors
///
/// Returns an error if the key is rejected by the HMAC implementation.
pub fn compute_signature(
    secret: &[u8],
    timestamp: &str,
    raw_body: &[u8],
) -> Result<String, hmac::digest::InvalidLength> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)?;

    mac.update(SIGNATURE_VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(raw_body);

    Ok(format!(
        "{SIGNATURE_VERSION}={}",
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// Only the length check may return early; every byte pair is visited.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
