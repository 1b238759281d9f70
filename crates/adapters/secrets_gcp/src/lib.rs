//! # fanbridge-adapter-secrets-gcp
//!
//! Secret-store adapter backed by the Google Secret Manager REST API.
//!
//! ## Responsibilities
//! - Authenticate as the runtime service account via the metadata server
//! - Resolve `projects/{project}/secrets/{name}/versions/latest` to its
//!   text value (payloads arrive base64-encoded)
//! - Implement the [`SecretStore`] port, mapping every failure to
//!   `RelayError::SecretUnavailable`
//!
//! No caching: each `resolve` call stands alone, matching the stateless
//! invocation model.

pub mod config;
pub mod error;

pub use config::SecretsConfig;
pub use error::SecretsError;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use fanbridge_app::ports::SecretStore;
use fanbridge_domain::error::RelayError;

/// Secret store client talking to Secret Manager.
#[derive(Clone)]
pub struct GcpSecretStore {
    http: reqwest::Client,
    config: SecretsConfig,
}

/// Metadata-server token response.
#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
}

/// `versions/latest:access` response.
#[derive(Debug, Deserialize)]
struct AccessResponse {
    payload: SecretPayload,
}

#[derive(Debug, Deserialize)]
struct SecretPayload {
    data: String,
}

impl GcpSecretStore {
    /// Build a store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SecretsConfig) -> Result<Self, SecretsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch the service-account access token from the metadata server.
    async fn service_token(&self) -> Result<String, SecretsError> {
        let response = self
            .http
            .get(&self.config.token_url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SecretsError::Status {
                status,
                body: snippet(&response.text().await.unwrap_or_default()),
            });
        }

        let token: MetadataToken = response.json().await?;
        Ok(token.access_token)
    }

    /// Access the latest version of the named secret.
    async fn access_latest(&self, name: &str) -> Result<String, SecretsError> {
        let token = self.service_token().await?;
        let url = format!(
            "{}/v1/projects/{}/secrets/{}/versions/latest:access",
            self.config.api_base.trim_end_matches('/'),
            self.config.project_id,
            name,
        );

        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SecretsError::Status {
                status,
                body: snippet(&response.text().await.unwrap_or_default()),
            });
        }

        let access: AccessResponse = response.json().await?;
        let bytes = BASE64.decode(access.payload.data)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl SecretStore for GcpSecretStore {
    async fn resolve(&self, name: &str) -> Result<String, RelayError> {
        self.access_latest(name).await.map_err(|err| {
            tracing::error!(secret = name, error = %err, "secret lookup failed");
            err.into_domain(name)
        })
    }
}

/// Bound the upstream body carried inside error values.
fn snippet(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &body[..cut])
    }
}
