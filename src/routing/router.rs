//! Route lookup.
//!
//! # Responsibilities
//! - Store the prefix table built at startup
//! - Decide, per request path, between the identity response, a backend, or no match
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - O(n) prefix scan; tables are small
//! - Explicit NotFound rather than silent default

use crate::config::RouteConfig;
use crate::routing::matcher::{Matcher, PathPrefixMatcher};

/// A compiled route: prefix matcher plus backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    matcher: PathPrefixMatcher,
    backend: String,
}

impl Route {
    pub fn new(prefix: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            matcher: PathPrefixMatcher::new(prefix),
            backend: backend.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        self.matcher.prefix()
    }

    /// Backend base URL this route forwards to.
    pub fn backend(&self) -> &str {
        &self.backend
    }
}

/// Immutable prefix to backend table.
///
/// Entries keep configuration order. Callers should not depend on which of
/// two overlapping prefixes wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(configs: impl IntoIterator<Item = RouteConfig>) -> Self {
        Self {
            routes: configs
                .into_iter()
                .map(|c| Route::new(c.prefix, c.backend))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// Outcome of routing a request path.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteDecision<'a> {
    /// Bare root: answer with the proxy identity, no table lookup.
    Identity,
    /// Forward to this route's backend.
    Forward(&'a Route),
    /// No prefix matched.
    NotFound,
}

/// Routes request paths against a [`RouteTable`].
#[derive(Debug, Clone, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn from_config(routes: Vec<RouteConfig>) -> Self {
        Self::new(RouteTable::new(routes))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Match a raw request path (leading slash included).
    pub fn match_path(&self, path: &str) -> RouteDecision<'_> {
        let trimmed = path.strip_prefix('/').unwrap_or(path).trim();
        if trimmed.is_empty() {
            return RouteDecision::Identity;
        }

        self.table
            .iter()
            .find(|route| route.matcher.matches(trimmed))
            .map_or(RouteDecision::NotFound, RouteDecision::Forward)
    }
}
