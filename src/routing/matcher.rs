//! Route matching logic.
//!
//! # Design Decisions
//! - Matching is a byte-wise prefix test, not segment aware: `api` matches `api2/foo`
//! - Matching is case-sensitive
//! - Paths are matched as received, percent-encoding included: `%61pi/x` does not match `api`
//! - No regex to guarantee O(n) matching

/// Trait for matching a normalized request path against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.as_bytes().starts_with(self.prefix.as_bytes())
    }
}
