//! Domain errors for the clientele cache.

use thiserror::Error;

/// Errors surfaced synchronously to `use_client` callers when a client
/// cannot be provisioned. The cache performs no retries itself; a failed
/// construction leaves the mapping exactly as it was.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// No credential could be acquired for the identity.
    #[error("Credential unavailable for identity '{identity}': {reason}")]
    CredentialUnavailable {
        /// Identity key the credential was requested for.
        identity: String,
        /// Provider-supplied failure detail.
        reason: String,
    },

    /// The factory failed to assemble a client from its parts.
    #[error("Failed to build client for identity '{identity}': {reason}")]
    BuildFailed {
        /// Identity key the client was being built for.
        identity: String,
        /// Failure detail.
        reason: String,
    },
}

/// Errors raised while releasing an entry's resource scope.
///
/// Never surfaced to request callers: the sweep logs these and keeps going,
/// so one bad release cannot block eviction of the other entries.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The scope's resources could not be freed.
    #[error("Failed to release resource scope for identity '{identity}': {reason}")]
    ScopeRelease {
        /// Identity key the scope belonged to.
        identity: String,
        /// Failure detail.
        reason: String,
    },
}

/// Result alias for operations that can fail with a [`ConstructionError`].
pub type ConstructionResult<T> = Result<T, ConstructionError>;
