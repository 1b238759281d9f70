//! Push endpoint handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use fanbridge_app::ports::{AccessTokenSource, CommandGateway, SecretStore};
use fanbridge_domain::outcome::Outcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the push endpoint.
pub enum PushResponse {
    /// Fan command dispatched — 200.
    Activated { duration: String },
    /// Not our event — 204.
    Ignored,
    /// HVAC status was not `OFF` — 204.
    ConditionNotMet,
}

impl From<Outcome> for PushResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ignored => Self::Ignored,
            Outcome::ConditionNotMet => Self::ConditionNotMet,
            Outcome::FanActivated { duration } => Self::Activated { duration },
        }
    }
}

impl IntoResponse for PushResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Activated { duration } => (
                StatusCode::OK,
                format!("OK: Fan activated for {duration} after cycle"),
            )
                .into_response(),
            Self::Ignored => (StatusCode::NO_CONTENT, "OK: Event ignored").into_response(),
            Self::ConditionNotMet => {
                (StatusCode::NO_CONTENT, "OK: Condition not met").into_response()
            }
        }
    }
}

/// `POST /` — receive one push notification and run the pipeline.
///
/// The body is taken raw: envelope validation belongs to the domain so that
/// each fault maps to its own 400 message.
pub async fn receive<S, T, C>(
    State(state): State<AppState<S, T, C>>,
    body: Bytes,
) -> Result<PushResponse, ApiError>
where
    S: SecretStore + Send + Sync + 'static,
    T: AccessTokenSource + Send + Sync + 'static,
    C: CommandGateway + Send + Sync + 'static,
{
    let outcome = state.service.handle_push(&body).await?;
    Ok(PushResponse::from(outcome))
}
