//! Slack verification errors.

use thiserror::Error;

/// Why a webhook request failed verification.
///
/// The variants are diagnostics for logs only. Clients see a single generic
/// unauthorized response for every variant except
/// [`RejectReason::SecretNotConfigured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Signature or timestamp header absent.
    #[error("missing Slack signature headers")]
    MissingHeaders,

    /// No signing secret configured on this server.
    #[error("Slack signing secret not configured")]
    SecretNotConfigured,

    /// Timestamp outside the replay window, or not a number.
    #[error("request timestamp outside replay window")]
    StaleTimestamp,

    /// Computed signature does not match the provided one.
    #[error("signature mismatch")]
    SignatureMismatch,
}

impl RejectReason {
    /// Returns `true` if the rejection is a server misconfiguration rather
    /// than a failed authentication attempt.
    #[must_use]
    pub const fn is_configuration_error(self) -> bool {
        matches!(self, Self::SecretNotConfigured)
    }
}
