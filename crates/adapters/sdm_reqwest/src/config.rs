//! Device-API adapter configuration.

use serde::Deserialize;

/// Configuration for the Smart Device Management adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SdmConfig {
    /// OAuth token endpoint for the refresh-token exchange.
    pub token_url: String,
    /// Device-management API base URL.
    pub api_base: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for SdmConfig {
    fn default() -> Self {
        Self {
            token_url: "https://www.googleapis.com/oauth2/v4/token".to_string(),
            api_base: "https://smartdevicemanagement.googleapis.com".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}
