//! Graph client factory: provisions per-identity clients for the cache.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::client::{GraphClient, GRAPH_BASE_URL};
use crate::domain::errors::{ConstructionError, ReleaseError};
use crate::domain::models::{GraphConfig, ScopeSet};
use crate::domain::ports::{
    AccessToken, AccessTokenProvider, ClientFactory, Provisioned, ResourceScope,
};

/// Configuration for the Graph client factory
#[derive(Debug, Clone)]
pub struct GraphFactoryConfig {
    /// Base URL for Graph API requests
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Scopes requested for every token acquisition
    pub scopes: ScopeSet,
}

impl Default for GraphFactoryConfig {
    fn default() -> Self {
        Self {
            base_url: GRAPH_BASE_URL.to_string(),
            timeout_secs: 30,
            scopes: ScopeSet::default(),
        }
    }
}

impl From<&GraphConfig> for GraphFactoryConfig {
    fn from(config: &GraphConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            scopes: ScopeSet::default().union_with(config.additional_scopes.iter().cloned()),
        }
    }
}

/// Builds [`GraphClient`] handles for the cache.
///
/// One `reqwest::Client` is built up front and reused across every
/// provisioned handle for connection pooling; only the bearer token differs
/// per identity. Each build bundles a [`ResourceScope`] that tells the token
/// provider to drop the identity's token material on release.
pub struct GraphClientFactory {
    http_client: ReqwestClient,
    base_url: String,
    scopes: ScopeSet,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl GraphClientFactory {
    /// Create a factory with default configuration.
    pub fn new(tokens: Arc<dyn AccessTokenProvider>) -> anyhow::Result<Self> {
        Self::with_config(GraphFactoryConfig::default(), tokens)
    }

    /// Create a factory with custom configuration.
    pub fn with_config(
        config: GraphFactoryConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> anyhow::Result<Self> {
        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            scope_count = config.scopes.len(),
            "Initializing Graph client factory"
        );

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            scopes: config.scopes,
            tokens,
        })
    }
}

#[async_trait]
impl ClientFactory for GraphClientFactory {
    type Client = GraphClient;

    async fn build(&self, identity: &str) -> Result<Provisioned<GraphClient>, ConstructionError> {
        let token = self.tokens.acquire(identity, &self.scopes).await?;
        debug!(identity = %identity, "access token acquired");

        let client = GraphClient::new(self.http_client.clone(), self.base_url.clone(), token);
        let scope = TokenScope {
            identity: identity.to_string(),
            tokens: Arc::clone(&self.tokens),
        };

        Ok(Provisioned {
            client: Arc::new(client),
            scope: Box::new(scope),
        })
    }
}

/// Resource scope for one identity's token material. Releasing it asks the
/// provider to invalidate whatever it cached for the identity.
struct TokenScope {
    identity: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

#[async_trait]
impl ResourceScope for TokenScope {
    async fn release(self: Box<Self>) -> Result<(), ReleaseError> {
        self.tokens.invalidate(&self.identity).await
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}

/// Token provider that hands out one fixed secret for every identity.
/// Useful for development tokens and tests; real deployments supply a
/// provider backed by their authentication broker.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    secret: String,
}

impl StaticTokenProvider {
    /// Create a provider pinned to `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn acquire(
        &self,
        _identity: &str,
        _scopes: &ScopeSet,
    ) -> Result<AccessToken, ConstructionError> {
        Ok(AccessToken::new(self.secret.clone()))
    }
}
