//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Graph API client and factory (reqwest)
//! - Identity resolver implementations
//! - Configuration management (figment)
//! - Logging setup (tracing)
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod graph;
pub mod identity;
pub mod logging;
