//! Shared test doubles for integration tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use clientele::{
    ClientFactory, ConstructionError, IdentityResolver, Provisioned, ReleaseError, ResourceScope,
};

/// Client handle double with an observable build sequence number.
pub struct FakeClient {
    pub id: u32,
}

/// Scope double that records its identity into a shared log on release.
pub struct RecordingScope {
    identity: String,
    released: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ResourceScope for RecordingScope {
    async fn release(self: Box<Self>) -> Result<(), ReleaseError> {
        self.released.lock().unwrap().push(self.identity);
        Ok(())
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}

/// Factory double that counts builds and exposes the release log.
pub struct RecordingFactory {
    built: AtomicU32,
    released: Arc<Mutex<Vec<String>>>,
}

impl Default for RecordingFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self {
            built: AtomicU32::new(0),
            released: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn build_count(&self) -> u32 {
        self.built.load(Ordering::SeqCst)
    }

    pub fn released_identities(&self) -> Vec<String> {
        self.released.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientFactory for RecordingFactory {
    type Client = FakeClient;

    async fn build(&self, identity: &str) -> Result<Provisioned<FakeClient>, ConstructionError> {
        let id = self.built.fetch_add(1, Ordering::SeqCst);
        Ok(Provisioned {
            client: Arc::new(FakeClient { id }),
            scope: Box::new(RecordingScope {
                identity: identity.to_string(),
                released: Arc::clone(&self.released),
            }),
        })
    }
}

/// Resolver double whose identity can be swapped between calls.
pub struct SettableResolver {
    current: Mutex<Option<String>>,
}

impl SettableResolver {
    pub fn new(identity: Option<&str>) -> Self {
        Self {
            current: Mutex::new(identity.map(ToString::to_string)),
        }
    }

    pub fn set(&self, identity: Option<&str>) {
        *self.current.lock().unwrap() = identity.map(ToString::to_string);
    }
}

#[async_trait]
impl IdentityResolver for SettableResolver {
    async fn resolve(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }
}
