//! Service layer: the identity-scoped client cache.

pub mod client_cache;

pub use client_cache::{ClientCache, ANONYMOUS_KEY};
