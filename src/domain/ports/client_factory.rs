//! Client factory and resource scope ports.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::{ConstructionError, ReleaseError};

/// Ownership container for everything a provisioned client transitively
/// depends on (token material, per-identity state).
///
/// Releasing the scope frees all of it. `release` consumes the boxed scope,
/// so a scope cannot be released twice and cannot outlive its release.
/// Scopes sit inside cache entries shared across request-handling threads,
/// hence the `Send + Sync` bound.
#[async_trait]
pub trait ResourceScope: Send + Sync {
    /// Free every resource held by this scope.
    async fn release(self: Box<Self>) -> Result<(), ReleaseError>;

    /// Identity key the scope was provisioned for, used in release logging.
    fn identity(&self) -> &str;
}

/// A freshly built client bundled with the resource scope that keeps it
/// alive, in a single owning record so one cannot be freed without the other.
pub struct Provisioned<C> {
    /// The ready-to-use client handle.
    pub client: Arc<C>,
    /// The scope whose release frees the client's dependencies.
    pub scope: Box<dyn ResourceScope>,
}

/// Factory interface for provisioning remote-API clients.
///
/// Must be safe to call concurrently; the cache invokes it outside its
/// mapping lock, so two racing misses for the same key may both reach the
/// factory.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// The client type this factory produces.
    type Client: Send + Sync;

    /// Build a new, fully initialized client for the identity, together
    /// with its resource scope.
    async fn build(&self, identity: &str) -> Result<Provisioned<Self::Client>, ConstructionError>;
}
