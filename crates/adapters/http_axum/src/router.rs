//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use fanbridge_app::ports::{AccessTokenSource, CommandGateway, SecretStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The push endpoint sits at `/` (where the relay delivers), with a
/// `/health` probe next to it. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, T, C>(state: AppState<S, T, C>) -> Router
where
    S: SecretStore + Send + Sync + 'static,
    T: AccessTokenSource + Send + Sync + 'static,
    C: CommandGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(crate::webhook::receive))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use fanbridge_app::services::{FanSettings, NotificationService};
    use fanbridge_domain::command::FanTimerCommand;
    use fanbridge_domain::credentials::{AccessToken, OauthCredentials};
    use fanbridge_domain::error::RelayError;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Default, Clone)]
    struct StubSecrets;

    #[derive(Default, Clone)]
    struct StubTokens;

    #[derive(Default, Clone)]
    struct StubCommands {
        dispatched: Arc<AtomicUsize>,
    }

    impl SecretStore for StubSecrets {
        async fn resolve(&self, name: &str) -> Result<String, RelayError> {
            Ok(format!("value-of-{name}"))
        }
    }

    impl AccessTokenSource for StubTokens {
        async fn refresh(
            &self,
            _credentials: &OauthCredentials,
        ) -> Result<AccessToken, RelayError> {
            Ok(AccessToken::new("token"))
        }
    }

    impl CommandGateway for StubCommands {
        async fn execute_fan_timer(
            &self,
            _project_id: &str,
            _device_id: &str,
            _token: &AccessToken,
            _command: &FanTimerCommand,
        ) -> Result<(), RelayError> {
            self.dispatched.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn test_app() -> (Router, StubCommands) {
        let commands = StubCommands::default();
        let state = AppState::new(NotificationService::new(
            StubSecrets,
            StubTokens,
            commands.clone(),
            FanSettings {
                device_id: "device-123".to_string(),
                duration: "360s".to_string(),
            },
        ));
        (build(state), commands)
    }

    fn push_request(event_json: &str) -> Request<Body> {
        let encoded = BASE64.encode(event_json);
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"message":{{"data":"{encoded}"}}}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_activate_fan_and_return_200_when_cycle_ends() {
        let (app, commands) = test_app();

        let response = app
            .oneshot(push_request(
                r#"{"resourceUpdate":{"traits":{"sdm.devices.traits.ThermostatHvac":{"status":"OFF"}}}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK: Fan activated for 360s after cycle");
        assert_eq!(commands.dispatched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_return_204_when_status_is_not_off() {
        let (app, commands) = test_app();

        let response = app
            .oneshot(push_request(
                r#"{"resourceUpdate":{"traits":{"sdm.devices.traits.ThermostatHvac":{"status":"HEATING"}}}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(commands.dispatched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_204_for_fan_only_update() {
        let (app, commands) = test_app();

        let response = app
            .oneshot(push_request(
                r#"{"resourceUpdate":{"traits":{"sdm.devices.traits.Fan":{"timerMode":"ON"}}}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(commands.dispatched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_204_when_event_is_not_a_resource_update() {
        let (app, commands) = test_app();

        let response = app
            .oneshot(push_request(r#"{"relationUpdate":{"type":"CREATED"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(commands.dispatched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_400_with_message_when_body_is_not_json() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Bad Request: No JSON payload");
    }

    #[tokio::test]
    async fn should_return_400_when_message_field_is_missing() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(r#"{"subscription":"s"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Bad Request: No message field");
    }

    #[tokio::test]
    async fn should_return_400_when_data_field_is_missing() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(r#"{"message":{"messageId":"1"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Bad Request: No data field");
    }

    #[tokio::test]
    async fn should_return_400_when_decoded_payload_is_invalid_json() {
        let (app, _) = test_app();

        let response = app.oneshot(push_request("{ broken")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Bad Request: Invalid JSON");
    }
}
