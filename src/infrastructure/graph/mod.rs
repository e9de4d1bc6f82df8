//! Graph API adapter: a concrete client and factory for the cache.
//!
//! Implements the `ClientFactory` port against a Graph-style HTTP API:
//! bearer-token auth acquired per identity through an `AccessTokenProvider`,
//! one pooled `reqwest::Client` shared across all provisioned handles.

pub mod client;
pub mod errors;
pub mod factory;

pub use client::{GraphClient, GRAPH_BASE_URL};
pub use errors::GraphApiError;
pub use factory::{GraphClientFactory, GraphFactoryConfig, StaticTokenProvider};
