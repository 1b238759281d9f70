//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use fanbridge_domain::error::{EnvelopeError, RelayError};

/// Maps [`RelayError`] to an HTTP response with the documented status code
/// and message.
pub struct ApiError(RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RelayError::Envelope(envelope) => {
                tracing::warn!(error = %envelope, "rejecting push request");
                (StatusCode::BAD_REQUEST, bad_request_message(envelope))
            }
            err => {
                // Callers only see the short message; the detail goes to the log.
                tracing::error!(error = ?err, "push handling failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, message).into_response()
    }
}

fn bad_request_message(err: &EnvelopeError) -> &'static str {
    match err {
        EnvelopeError::Malformed(_) => "Bad Request: No JSON payload",
        EnvelopeError::MissingMessage => "Bad Request: No message field",
        EnvelopeError::MissingData => "Bad Request: No data field",
        EnvelopeError::InvalidPayload(_) => "Bad Request: Invalid JSON",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{bad").unwrap_err()
    }

    #[test]
    fn should_map_each_envelope_fault_to_its_message() {
        assert_eq!(
            bad_request_message(&EnvelopeError::Malformed(body_error())),
            "Bad Request: No JSON payload"
        );
        assert_eq!(
            bad_request_message(&EnvelopeError::MissingMessage),
            "Bad Request: No message field"
        );
        assert_eq!(
            bad_request_message(&EnvelopeError::MissingData),
            "Bad Request: No data field"
        );
        assert_eq!(
            bad_request_message(&EnvelopeError::InvalidPayload(body_error())),
            "Bad Request: Invalid JSON"
        );
    }

    #[test]
    fn should_map_envelope_faults_to_400() {
        let response =
            ApiError::from(RelayError::from(EnvelopeError::MissingMessage)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_dependency_faults_to_500() {
        let err = RelayError::TokenRefresh(Box::new(std::io::Error::other("denied")));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
