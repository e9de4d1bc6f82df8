//! Identity resolver port.

use async_trait::async_trait;

/// Resolves the current logical caller to a stable identity key.
///
/// Implementations must be cheap and safe to call on every cache access.
/// Returning `None` means no authenticated caller; the cache maps that to
/// its anonymous sentinel key so unauthenticated callers still share one
/// cached client.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the current caller's identity key, if any.
    async fn resolve(&self) -> Option<String>;
}
