//! Identity-scoped client cache with TTL-based eviction.
//!
//! Hands out at most one live, unexpired client per identity key, building
//! clients lazily through a [`ClientFactory`] and releasing each entry's
//! resource scope exactly once after the entry expires or is superseded.
//!
//! Expiry is measured from entry creation only: a frequently used entry is
//! still evicted and rebuilt every TTL window. Access time never extends an
//! entry's life.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::ConstructionError;
use crate::domain::ports::{ClientFactory, IdentityResolver, ResourceScope};

/// Identity key used when the resolver reports no authenticated caller.
pub const ANONYMOUS_KEY: &str = "anonymous";

/// Default expiry window for cached clients.
const DEFAULT_TTL_SECS: u64 = 60;

/// One provisioned client bound to one identity key.
///
/// The client and its resource scope live and die together: the entry owns
/// both, and eviction drops the client handle and releases the scope as one
/// step. `created_at` is never mutated after construction.
struct CacheEntry<C> {
    client: Arc<C>,
    scope: Box<dyn ResourceScope>,
    created_at: Instant,
}

impl<C> CacheEntry<C> {
    /// An entry exactly at the TTL boundary counts as expired.
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.created_at) >= ttl
    }
}

/// Per-identity, time-bounded cache of provisioned remote-API clients.
///
/// Long-lived and explicitly owned: create one at application startup, share
/// it behind an `Arc`, and call [`ClientCache::shutdown`] at teardown to
/// release whatever is still cached.
///
/// Entry lifetime is governed solely by the TTL. Individual call outcomes
/// (action failures, cancellations) never evict or retain an entry.
pub struct ClientCache<C> {
    resolver: Arc<dyn IdentityResolver>,
    factory: Arc<dyn ClientFactory<Client = C>>,
    entries: RwLock<HashMap<String, CacheEntry<C>>>,
    ttl: Duration,
}

impl<C: Send + Sync + 'static> ClientCache<C> {
    /// Create a cache with the default one-minute TTL.
    pub fn new(
        resolver: Arc<dyn IdentityResolver>,
        factory: Arc<dyn ClientFactory<Client = C>>,
    ) -> Self {
        Self::with_ttl(resolver, factory, Duration::from_secs(DEFAULT_TTL_SECS))
    }

    /// Create a cache with a custom TTL. The TTL is fixed for the cache's
    /// lifetime.
    pub fn with_ttl(
        resolver: Arc<dyn IdentityResolver>,
        factory: Arc<dyn ClientFactory<Client = C>>,
        ttl: Duration,
    ) -> Self {
        Self {
            resolver,
            factory,
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Run `action` against the current caller's cached client, provisioning
    /// one first if needed.
    ///
    /// The client is valid (within TTL) at the moment of hand-off; a
    /// long-running action may outlive that window. Callers must not stash
    /// the handle across calls. The action's output, including any `Result`
    /// of its own, is returned unchanged; factory failures surface as
    /// [`ConstructionError`] without touching the mapping.
    pub async fn use_client<T, Fut, A>(&self, action: A) -> Result<T, ConstructionError>
    where
        A: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = T>,
    {
        let client = self.get_client().await?;
        Ok(action(client).await)
    }

    /// Fire-and-forget variant of [`ClientCache::use_client`] for actions
    /// with no result.
    pub async fn use_client_unit<Fut, A>(&self, action: A) -> Result<(), ConstructionError>
    where
        A: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.use_client(action).await
    }

    /// Number of currently mapped entries. Expired entries still awaiting a
    /// sweep are counted.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Release every remaining entry. Call once at application teardown.
    pub async fn shutdown(&self) {
        let drained: Vec<CacheEntry<C>> = {
            let mut entries = self.entries.write().await;
            entries.drain().map(|(_, entry)| entry).collect()
        };
        if !drained.is_empty() {
            info!(count = drained.len(), "releasing remaining cache entries");
        }
        for entry in drained {
            release_scope(entry.scope).await;
        }
    }

    /// Resolve the caller, sweep expired entries, then reuse or build.
    #[instrument(skip_all)]
    async fn get_client(&self) -> Result<Arc<C>, ConstructionError> {
        let key = self
            .resolver
            .resolve()
            .await
            .unwrap_or_else(|| ANONYMOUS_KEY.to_string());

        self.sweep().await;

        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if !entry.is_expired(now, self.ttl) {
                    debug!(identity = %key, "cache hit");
                    return Ok(Arc::clone(&entry.client));
                }
            }
        }

        // Build outside the lock so a slow factory never blocks callers on
        // other keys. Two racing misses for the same key may both build;
        // last insert wins and the displaced scope is released below.
        debug!(identity = %key, "cache miss, building client");
        let provisioned = self.factory.build(&key).await?;
        let client = Arc::clone(&provisioned.client);

        let displaced = {
            let mut entries = self.entries.write().await;
            entries.insert(
                key.clone(),
                CacheEntry {
                    client: provisioned.client,
                    scope: provisioned.scope,
                    created_at: Instant::now(),
                },
            )
        };
        if let Some(old) = displaced {
            // The displaced entry is unreachable from the mapping, so no
            // later sweep could find it.
            debug!(identity = %key, "releasing entry displaced by concurrent build");
            release_scope(old.scope).await;
        }

        info!(identity = %key, "client provisioned");
        Ok(client)
    }

    /// Remove every entry past its TTL, then release each one individually.
    /// A failed release never aborts the sweep for the other entries.
    async fn sweep(&self) {
        let now = Instant::now();
        let expired: Vec<(String, CacheEntry<C>)> = {
            let mut entries = self.entries.write().await;
            let stale_keys: Vec<String> = entries
                .iter()
                .filter(|(_, entry)| entry.is_expired(now, self.ttl))
                .map(|(key, _)| key.clone())
                .collect();
            stale_keys
                .into_iter()
                .filter_map(|key| entries.remove(&key).map(|entry| (key, entry)))
                .collect()
        };

        for (key, entry) in expired {
            debug!(identity = %key, "evicting expired entry");
            release_scope(entry.scope).await;
        }
    }
}

/// Release a scope, logging failures instead of propagating them: release
/// errors are independent of the request path.
async fn release_scope(scope: Box<dyn ResourceScope>) {
    let identity = scope.identity().to_string();
    match scope.release().await {
        Ok(()) => debug!(identity = %identity, "resource scope released"),
        Err(err) => warn!(identity = %identity, error = %err, "failed to release resource scope"),
    }
}
