//! OAuth port — refresh-token exchange against the token endpoint.

use std::future::Future;

use fanbridge_domain::credentials::{AccessToken, OauthCredentials};
use fanbridge_domain::error::RelayError;

/// Source of short-lived access tokens.
pub trait AccessTokenSource: Send + Sync {
    /// Exchange the refresh token for an access token.
    ///
    /// Fails with [`RelayError::TokenRefresh`] on any non-2xx response or a
    /// response body lacking an `access_token`. The failure is fatal for the
    /// invocation; it is never retried.
    fn refresh(
        &self,
        credentials: &OauthCredentials,
    ) -> impl Future<Output = Result<AccessToken, RelayError>> + Send;
}
