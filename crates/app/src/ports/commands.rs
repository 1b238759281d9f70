//! Command port — authenticated dispatch to the device-management API.

use std::future::Future;

use fanbridge_domain::command::FanTimerCommand;
use fanbridge_domain::credentials::AccessToken;
use fanbridge_domain::error::RelayError;

/// Gateway executing device commands.
pub trait CommandGateway: Send + Sync {
    /// Send a fan timer command to `device_id` under `project_id`.
    ///
    /// Fails with [`RelayError::Command`] on any non-2xx response; fatal for
    /// the invocation.
    fn execute_fan_timer(
        &self,
        project_id: &str,
        device_id: &str,
        token: &AccessToken,
        command: &FanTimerCommand,
    ) -> impl Future<Output = Result<(), RelayError>> + Send;
}
