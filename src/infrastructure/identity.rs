//! Identity resolver implementations.
//!
//! The interesting resolvers live in the host application (session state,
//! request principals). These cover fixed-identity services and the
//! unauthenticated case.

use async_trait::async_trait;

use crate::domain::ports::IdentityResolver;

/// Resolver that always yields the same identity key. Suitable for daemon
/// or service-principal callers where every request acts as one identity.
#[derive(Debug, Clone)]
pub struct StaticIdentityResolver {
    identity: String,
}

impl StaticIdentityResolver {
    /// Create a resolver pinned to `identity`.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self) -> Option<String> {
        Some(self.identity.clone())
    }
}

/// Resolver that never yields an identity; every caller maps to the cache's
/// anonymous sentinel key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentityResolver;

impl AnonymousIdentityResolver {
    /// Create the resolver.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IdentityResolver for AnonymousIdentityResolver {
    async fn resolve(&self) -> Option<String> {
        None
    }
}
