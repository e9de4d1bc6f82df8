//! Domain models: configuration and authorization scope sets.

pub mod config;
pub mod scopes;

pub use config::{CacheConfig, Config, GraphConfig, LoggingConfig};
pub use scopes::{ScopeSet, DEFAULT_SCOPES};
