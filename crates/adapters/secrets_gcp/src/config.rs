//! Secret-store adapter configuration.

use serde::Deserialize;

/// Configuration for the Secret Manager adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// GCP project that owns the secrets.
    pub project_id: String,
    /// Secret Manager API base URL.
    pub api_base: String,
    /// Metadata-server URL yielding the service-account token.
    pub token_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_base: "https://secretmanager.googleapis.com".to_string(),
            token_url: "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}
