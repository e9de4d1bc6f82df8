//! Domain layer for the clientele cache
//!
//! This module contains the cache's error taxonomy, configuration models,
//! and the port traits it composes with.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConstructionError, ConstructionResult, ReleaseError};
