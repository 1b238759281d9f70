//! Push envelope — the transport wrapper delivered by the pub/sub relay.
//!
//! One envelope arrives per invocation and lives only for the duration of the
//! request. Only `message.data` gates processing; the remaining metadata is
//! parsed for logging.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::EnvelopeError;

/// Wrapper object posted by the pub/sub relay: `{message: {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEnvelope {
    /// The wrapped message; its absence is a client fault.
    pub message: Option<PushMessage>,
    /// Subscription path the relay delivered on.
    #[serde(default)]
    pub subscription: Option<String>,
}

/// The message inside the envelope, carrying the opaque payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    /// Payload text, usually base64-encoded.
    pub data: Option<String>,
    /// Relay-assigned message identifier.
    #[serde(default)]
    pub message_id: Option<String>,
    /// When the relay accepted the message.
    #[serde(default)]
    pub publish_time: Option<DateTime<Utc>>,
}

impl PushEnvelope {
    /// Deserialize a raw request body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Malformed`] when the body is not a JSON
    /// object of the expected shape.
    pub fn from_body(body: &[u8]) -> Result<Self, EnvelopeError> {
        serde_json::from_slice(body).map_err(EnvelopeError::Malformed)
    }

    /// Unwrap the envelope into decoded payload text.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::MissingMessage`] or
    /// [`EnvelopeError::MissingData`] when the respective field is absent.
    pub fn into_payload(self) -> Result<String, EnvelopeError> {
        let message = self.message.ok_or(EnvelopeError::MissingMessage)?;
        let data = message.data.ok_or(EnvelopeError::MissingData)?;
        Ok(decode_data(&data))
    }
}

/// Decode `data` as base64, falling back to the literal text.
///
/// The fallback is a deliberate second path, not error recovery: relays may
/// deliver the payload either encoded or as plain text. A decode that
/// succeeds but is not UTF-8 takes the literal path as well.
fn decode_data(data: &str) -> String {
    match BASE64.decode(data) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => data.to_string(),
        },
        Err(_) => data.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_base64_data() {
        let encoded = BASE64.encode(r#"{"resourceUpdate":{}}"#);
        let body = format!(r#"{{"message":{{"data":"{encoded}"}}}}"#);

        let payload = PushEnvelope::from_body(body.as_bytes())
            .unwrap()
            .into_payload()
            .unwrap();
        assert_eq!(payload, r#"{"resourceUpdate":{}}"#);
    }

    #[test]
    fn should_fall_back_to_literal_text_when_data_is_not_base64() {
        let body = r#"{"message":{"data":"{\"resourceUpdate\":{}}"}}"#;

        let payload = PushEnvelope::from_body(body.as_bytes())
            .unwrap()
            .into_payload()
            .unwrap();
        assert_eq!(payload, r#"{"resourceUpdate":{}}"#);
    }

    #[test]
    fn should_fall_back_to_literal_text_when_decoded_bytes_are_not_utf8() {
        // "//79" decodes to 0xff 0xfe 0xfd, which is not valid UTF-8.
        let body = r#"{"message":{"data":"//79"}}"#;

        let payload = PushEnvelope::from_body(body.as_bytes())
            .unwrap()
            .into_payload()
            .unwrap();
        assert_eq!(payload, "//79");
    }

    #[test]
    fn should_reject_body_that_is_not_an_envelope() {
        let result = PushEnvelope::from_body(b"not json at all");
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));

        let result = PushEnvelope::from_body(b"42");
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));
    }

    #[test]
    fn should_reject_envelope_without_message() {
        let envelope = PushEnvelope::from_body(br#"{"subscription":"s"}"#).unwrap();
        assert!(matches!(
            envelope.into_payload(),
            Err(EnvelopeError::MissingMessage)
        ));
    }

    #[test]
    fn should_reject_message_without_data() {
        let envelope = PushEnvelope::from_body(br#"{"message":{"messageId":"1"}}"#).unwrap();
        assert!(matches!(
            envelope.into_payload(),
            Err(EnvelopeError::MissingData)
        ));
    }

    #[test]
    fn should_parse_message_metadata() {
        let body = br#"{
            "message": {
                "data": "e30=",
                "messageId": "1234567890",
                "publishTime": "2024-03-01T12:00:00Z"
            },
            "subscription": "projects/demo/subscriptions/fanbridge"
        }"#;

        let envelope = PushEnvelope::from_body(body).unwrap();
        let message = envelope.message.as_ref().unwrap();
        assert_eq!(message.message_id.as_deref(), Some("1234567890"));
        assert!(message.publish_time.is_some());
        assert_eq!(
            envelope.subscription.as_deref(),
            Some("projects/demo/subscriptions/fanbridge")
        );
        assert_eq!(envelope.into_payload().unwrap(), "{}");
    }
}
