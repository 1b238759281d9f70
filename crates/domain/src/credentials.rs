//! Credentials — secrets resolved per triggered invocation.
//!
//! Nothing here is cached or persisted: credentials are fetched when a cycle
//! end is detected, used once, and dropped with the invocation.

use serde::Deserialize;

/// Names under which the deployment's secrets are stored.
pub mod secret_names {
    /// OAuth client id.
    pub const CLIENT_ID: &str = "nest-client-id";
    /// OAuth client secret.
    pub const CLIENT_SECRET: &str = "nest-client-secret";
    /// Long-lived refresh token.
    pub const REFRESH_TOKEN: &str = "nest-refresh-token";
    /// Device-management project id.
    pub const PROJECT_ID: &str = "nest-project-id";
}

/// Inputs to the refresh-token exchange.
#[derive(Debug, Clone)]
pub struct OauthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// A credential resolved to an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// A required credential resolved to an empty string.
    #[error("credential {0:?} is empty")]
    Empty(&'static str),
}

impl OauthCredentials {
    /// Check that every input to the token exchange is present.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Empty`] naming the first empty field.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.client_id.is_empty() {
            return Err(CredentialsError::Empty("client_id"));
        }
        if self.client_secret.is_empty() {
            return Err(CredentialsError::Empty("client_secret"));
        }
        if self.refresh_token.is_empty() {
            return Err(CredentialsError::Empty("refresh_token"));
        }
        Ok(())
    }
}

/// Short-lived bearer credential, valid only for the current invocation.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw bearer value for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token is a live credential; keep it out of debug output.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}
