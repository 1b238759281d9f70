//! # fanbridge-adapter-sdm-reqwest
//!
//! Outbound adapter for the Smart Device Management API and its OAuth
//! token endpoint, built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Exchange the refresh token for an access token (form-encoded POST,
//!   `grant_type=refresh_token`) — the [`AccessTokenSource`] port
//! - Send `:executeCommand` requests with bearer auth and the command JSON
//!   body — the [`CommandGateway`] port
//!
//! Both calls are one-shot: any non-2xx answer is a terminal failure for the
//! invocation, surfaced with a bounded body snippet for diagnosis.

pub mod config;
pub mod error;

pub use config::SdmConfig;
pub use error::SdmError;

use std::time::Duration;

use serde::Deserialize;

use fanbridge_app::ports::{AccessTokenSource, CommandGateway};
use fanbridge_domain::command::FanTimerCommand;
use fanbridge_domain::credentials::{AccessToken, OauthCredentials};
use fanbridge_domain::error::RelayError;

/// Client for the token endpoint and the device-management API.
#[derive(Clone)]
pub struct SdmClient {
    http: reqwest::Client,
    config: SdmConfig,
}

/// Token endpoint response; only `access_token` matters here.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: AccessToken,
}

impl SdmClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SdmError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SdmConfig) -> Result<Self, SdmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;
        Ok(Self { http, config })
    }

    async fn exchange_refresh_token(
        &self,
        credentials: &OauthCredentials,
    ) -> Result<AccessToken, SdmError> {
        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("refresh_token", credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SdmError::Status {
                status,
                body: snippet(&response.text().await.unwrap_or_default()),
            });
        }

        // A 2xx body without an access_token is still a refresh failure.
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn post_command(
        &self,
        project_id: &str,
        device_id: &str,
        token: &AccessToken,
        command: &FanTimerCommand,
    ) -> Result<(), SdmError> {
        let url = format!(
            "{}/v1/enterprises/{}/devices/{}:executeCommand",
            self.config.api_base.trim_end_matches('/'),
            project_id,
            device_id,
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(token.as_str())
            .json(command)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SdmError::Status {
                status,
                body: snippet(&response.text().await.unwrap_or_default()),
            });
        }

        Ok(())
    }
}

impl AccessTokenSource for SdmClient {
    async fn refresh(&self, credentials: &OauthCredentials) -> Result<AccessToken, RelayError> {
        self.exchange_refresh_token(credentials).await.map_err(|err| {
            tracing::error!(error = %err, "refresh token exchange failed");
            RelayError::TokenRefresh(Box::new(err))
        })
    }
}

impl CommandGateway for SdmClient {
    async fn execute_fan_timer(
        &self,
        project_id: &str,
        device_id: &str,
        token: &AccessToken,
        command: &FanTimerCommand,
    ) -> Result<(), RelayError> {
        self.post_command(project_id, device_id, token, command)
            .await
            .map_err(|err| {
                tracing::error!(device_id, error = %err, "fan command dispatch failed");
                RelayError::Command(Box::new(err))
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
