//! Clientele - Identity-Scoped Client Cache
//!
//! Clientele caches expensive remote-API client handles per caller identity:
//! a client is provisioned lazily on first use, reused for a fixed TTL
//! window (one minute by default), and its resources are released exactly
//! once after it expires or is superseded.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): errors, configuration models, and the
//!   port traits the cache composes with
//! - **Service Layer** (`services`): the `ClientCache` itself
//! - **Infrastructure Layer** (`infrastructure`): adapters — a Graph-style
//!   HTTP client factory, identity resolvers, config loading, logging setup
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use clientele::{ClientCache, GraphClientFactory, StaticIdentityResolver, StaticTokenProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = Arc::new(StaticIdentityResolver::new("svc-reporting"));
//!     let factory = Arc::new(GraphClientFactory::new(
//!         Arc::new(StaticTokenProvider::new(std::env::var("GRAPH_TOKEN")?)),
//!     )?);
//!
//!     let cache = ClientCache::new(resolver, factory);
//!     let me = cache.use_client(|client| async move { client.get_json("me").await }).await??;
//!     println!("{me}");
//!
//!     cache.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ConstructionError, ConstructionResult, ReleaseError};
pub use domain::models::{CacheConfig, Config, GraphConfig, LoggingConfig, ScopeSet, DEFAULT_SCOPES};
pub use domain::ports::{
    AccessToken, AccessTokenProvider, ClientFactory, IdentityResolver, Provisioned, ResourceScope,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::graph::{
    GraphApiError, GraphClient, GraphClientFactory, GraphFactoryConfig, StaticTokenProvider,
    GRAPH_BASE_URL,
};
pub use infrastructure::identity::{AnonymousIdentityResolver, StaticIdentityResolver};
pub use services::{ClientCache, ANONYMOUS_KEY};
