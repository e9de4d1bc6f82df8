//! Authorization scope sets consumed by client factories.
//!
//! The cache itself never interprets scopes; they are part of the setup
//! surface handed to the factory when a client is provisioned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default scopes requested for every provisioned client: the minimal
/// OpenID Connect set plus the application's default read scope.
pub const DEFAULT_SCOPES: [&str; 5] = ["openid", "profile", "email", "offline_access", "User.Read"];

/// An ordered, deduplicated set of authorization scopes.
///
/// Starts from [`DEFAULT_SCOPES`] and can be unioned with caller-supplied
/// additional scopes at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeSet {
    scopes: BTreeSet<String>,
}

impl Default for ScopeSet {
    fn default() -> Self {
        Self {
            scopes: DEFAULT_SCOPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ScopeSet {
    /// Create an empty scope set (no defaults).
    pub fn empty() -> Self {
        Self {
            scopes: BTreeSet::new(),
        }
    }

    /// Union this set with additional scopes, deduplicating.
    #[must_use]
    pub fn union_with<I, S>(mut self, additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(additional.into_iter().map(Into::into));
        self
    }

    /// Whether the set contains the given scope.
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Number of scopes in the set.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Iterate over the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Render the set as a single space-delimited string, the form OAuth
    /// token endpoints expect.
    pub fn to_scope_string(&self) -> String {
        self.scopes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
