//! Shared application state for axum handlers.

use std::sync::Arc;

use fanbridge_app::ports::{AccessTokenSource, CommandGateway, SecretStore};
use fanbridge_app::services::NotificationService;

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, T, C> {
    /// The notification pipeline service.
    pub service: Arc<NotificationService<S, T, C>>,
}

impl<S, T, C> Clone for AppState<S, T, C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S, T, C> AppState<S, T, C>
where
    S: SecretStore + Send + Sync + 'static,
    T: AccessTokenSource + Send + Sync + 'static,
    C: CommandGateway + Send + Sync + 'static,
{
    /// Create application state from a service instance.
    pub fn new(service: NotificationService<S, T, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
