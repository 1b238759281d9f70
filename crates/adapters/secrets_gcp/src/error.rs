//! Secret-store adapter error types.

use fanbridge_domain::error::RelayError;

/// Errors specific to the Secret Manager adapter.
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("secret manager request failed")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("secret manager returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The secret payload was not valid base64.
    #[error("secret payload is not valid base64")]
    Decode(#[from] base64::DecodeError),

    /// The decoded secret payload was not UTF-8 text.
    #[error("secret payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SecretsError {
    /// Wrap into the domain error, naming the secret that was requested.
    pub fn into_domain(self, name: &str) -> RelayError {
        RelayError::SecretUnavailable {
            name: name.to_string(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_secret_unavailable() {
        let err = SecretsError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "secret not found".to_string(),
        };
        let domain: RelayError = err.into_domain("nest-client-id");
        assert!(matches!(
            domain,
            RelayError::SecretUnavailable { ref name, .. } if name == "nest-client-id"
        ));
    }
}
