//! Error taxonomy shared across the workspace.
//!
//! Client-input faults (`EnvelopeError`) map to 400 responses; everything
//! else is a dependency failure that surfaces as a 500. Adapters wrap their
//! own typed errors and box them into the matching [`RelayError`] variant at
//! the port boundary.

use crate::credentials::CredentialsError;

/// Faults in the inbound request: envelope structure or payload content.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The request body did not deserialize as a JSON envelope at all.
    #[error("request body is not a JSON envelope")]
    Malformed(#[source] serde_json::Error),

    /// The envelope has no `message` field.
    #[error("envelope has no message field")]
    MissingMessage,

    /// The message has no `data` field.
    #[error("message has no data field")]
    MissingData,

    /// The decoded payload is not valid JSON.
    #[error("payload is not valid JSON")]
    InvalidPayload(#[source] serde_json::Error),
}

/// Top-level error for one webhook invocation.
///
/// Every failure is terminal: nothing is retried, and each variant maps
/// directly to one caller-visible HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The inbound request could not be understood (caller's fault).
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// A resolved credential was unusable.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// A named secret could not be resolved from the secret store.
    #[error("secret {name:?} is unavailable")]
    SecretUnavailable {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The refresh-token exchange did not yield an access token.
    #[error("access token refresh failed")]
    TokenRefresh(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device API rejected or failed the fan command.
    #[error("fan command execution failed")]
    Command(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RelayError {
    /// Whether this failure was caused by the inbound request itself.
    #[must_use]
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::Envelope(_))
    }
}
