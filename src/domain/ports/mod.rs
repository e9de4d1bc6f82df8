//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces the cache composes with:
//! - `IdentityResolver`: stable identity key per logical caller
//! - `ClientFactory` / `ResourceScope`: client provisioning and disposal
//! - `AccessTokenProvider`: bearer tokens for the Graph adapter
//!
//! These traits define the contracts that allow the cache to be independent
//! of specific authentication and transport implementations.

pub mod access_token;
pub mod client_factory;
pub mod identity_resolver;

pub use access_token::{AccessToken, AccessTokenProvider};
pub use client_factory::{ClientFactory, Provisioned, ResourceScope};
pub use identity_resolver::IdentityResolver;
