//! Access token provider port consumed by the Graph factory.

use async_trait::async_trait;

use crate::domain::errors::{ConstructionError, ReleaseError};
use crate::domain::models::ScopeSet;

/// Bearer token material acquired for one identity.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The raw bearer token. Never log this.
    pub secret: String,
    /// Seconds until the token expires, when the provider reports it.
    pub expires_in_secs: Option<u64>,
}

impl AccessToken {
    /// Create a token with no reported expiry.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in_secs: None,
        }
    }
}

/// Acquires bearer tokens for identities.
///
/// Must be safe to call concurrently. Token refresh is the provider's
/// concern, not the cache's: the cache only bounds how long a provisioned
/// client (and therefore its token material) stays in use.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Acquire a token for the identity covering the requested scopes.
    async fn acquire(
        &self,
        identity: &str,
        scopes: &ScopeSet,
    ) -> Result<AccessToken, ConstructionError>;

    /// Drop any token material cached for the identity. Called when the
    /// identity's resource scope is released; the default is a no-op for
    /// providers that hold no per-identity state.
    async fn invalidate(&self, identity: &str) -> Result<(), ReleaseError> {
        let _ = identity;
        Ok(())
    }
}
