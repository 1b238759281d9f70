//! Notification service — the decision-and-dispatch pipeline.
//!
//! One invocation per inbound push. Control flow is strictly linear: each
//! stage either produces input for the next or short-circuits with a
//! terminal outcome or error. Nothing is retried and nothing outlives the
//! invocation.

use fanbridge_domain::command::FanTimerCommand;
use fanbridge_domain::credentials::{OauthCredentials, secret_names};
use fanbridge_domain::decision::CycleDecision;
use fanbridge_domain::envelope::PushEnvelope;
use fanbridge_domain::error::RelayError;
use fanbridge_domain::event::DeviceEvent;
use fanbridge_domain::outcome::Outcome;

use crate::ports::{AccessTokenSource, CommandGateway, SecretStore};

/// Deployment-time fan settings, read-only after startup.
#[derive(Debug, Clone)]
pub struct FanSettings {
    /// Device id of the thermostat whose fan is driven.
    pub device_id: String,
    /// How long to run the fan after a cycle, as the API's duration string.
    pub duration: String,
}

/// Application service handling one push notification end to end.
pub struct NotificationService<S, T, C> {
    secrets: S,
    tokens: T,
    commands: C,
    settings: FanSettings,
}

impl<S, T, C> NotificationService<S, T, C>
where
    S: SecretStore,
    T: AccessTokenSource,
    C: CommandGateway,
{
    /// Create a new service over the given port implementations.
    pub fn new(secrets: S, tokens: T, commands: C, settings: FanSettings) -> Self {
        Self {
            secrets,
            tokens,
            commands,
            settings,
        }
    }

    /// Handle one raw push body.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Envelope`] for request faults, and the matching
    /// dependency variant when a secret lookup, the token exchange, or the
    /// command dispatch fails. Every error is terminal for the invocation.
    pub async fn handle_push(&self, body: &[u8]) -> Result<Outcome, RelayError> {
        let payload = PushEnvelope::from_body(body)?.into_payload()?;

        let event = DeviceEvent::parse(&payload).inspect_err(|_| {
            // Log the raw text so the event can be diagnosed without replaying it.
            tracing::warn!(payload = %payload, "payload did not parse as a device event");
        })?;

        let Some(update) = event.resource_update else {
            tracing::debug!(event_id = ?event.event_id, "not a resource update event");
            return Ok(Outcome::Ignored);
        };

        match update.cycle_decision() {
            CycleDecision::Ignored => {
                tracing::debug!(device = ?update.name, "no hvac trait in update");
                Ok(Outcome::Ignored)
            }
            CycleDecision::NotMet(status) => {
                tracing::debug!(status = ?status, "hvac status is not OFF");
                Ok(Outcome::ConditionNotMet)
            }
            CycleDecision::CycleEnded => {
                tracing::info!(device = ?update.name, "hvac cycle ended");
                self.activate_fan().await
            }
        }
    }

    /// Resolve credentials, refresh the access token, and dispatch the
    /// fan command.
    async fn activate_fan(&self) -> Result<Outcome, RelayError> {
        let credentials = OauthCredentials {
            client_id: self.secrets.resolve(secret_names::CLIENT_ID).await?,
            client_secret: self.secrets.resolve(secret_names::CLIENT_SECRET).await?,
            refresh_token: self.secrets.resolve(secret_names::REFRESH_TOKEN).await?,
        };
        credentials.validate()?;

        let token = self.tokens.refresh(&credentials).await?;
        let project_id = self.secrets.resolve(secret_names::PROJECT_ID).await?;

        let command = FanTimerCommand::new(self.settings.duration.clone());
        self.commands
            .execute_fan_timer(&project_id, &self.settings.device_id, &token, &command)
            .await?;

        tracing::info!(
            duration = %self.settings.duration,
            device_id = %self.settings.device_id,
            "fan timer started after cycle"
        );
        Ok(Outcome::FanActivated {
            duration: self.settings.duration.clone(),
        })
    }
}
