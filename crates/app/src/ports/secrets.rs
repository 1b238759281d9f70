//! Secret-store port — resolve-by-name lookups against an external store.

use std::future::Future;

use fanbridge_domain::error::RelayError;

/// Key-value lookup service holding the deployment's secrets.
///
/// Each call is independent: no batching, no caching beyond the caller
/// holding on to an already-fetched value for the rest of the invocation.
pub trait SecretStore: Send + Sync {
    /// Resolve the latest version of the named secret as text.
    ///
    /// Fails with [`RelayError::SecretUnavailable`] when the store has no
    /// such secret or the lookup itself errors.
    fn resolve(&self, name: &str) -> impl Future<Output = Result<String, RelayError>> + Send;
}
