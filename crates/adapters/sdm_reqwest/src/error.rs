//! Device-API adapter error types.

/// Errors specific to the Smart Device Management adapter.
///
/// Conversion into the domain error happens at the port implementation,
/// which knows whether the failing call was the token exchange or the
/// command dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SdmError {
    /// The HTTP request itself failed (connect, timeout, body read/decode).
    #[error("device api request failed")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("device api returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_status_and_body_in_display() {
        let err = SdmError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "invalid_grant".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "device api returned status 401 Unauthorized: invalid_grant"
        );
    }
}
