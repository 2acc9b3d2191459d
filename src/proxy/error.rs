//! Forwarding error taxonomy.

use thiserror::Error;

/// Errors that can occur while routing or forwarding a request.
///
/// Only `RouteNotFound` is visible to callers as such (404); every other
/// variant collapses to a generic 500 and is distinguished in logs only.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No configured prefix matches the path.
    #[error("no route matches path '{0}'")]
    RouteNotFound(String),

    /// The outbound URL or request could not be built.
    #[error("error creating request for {target}: {reason}")]
    RequestConstruction { target: String, reason: String },

    /// Transport-level failure contacting the backend.
    #[error("error requesting {target}: {source}")]
    UpstreamUnreachable {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend response body could not be read in full.
    #[error("error reading response from {target}: {source}")]
    UpstreamBodyReadError {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The shared outbound client could not be built at startup.
    #[error("failed to build upstream client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ProxyError {
    pub(crate) fn request_construction(target: &str, reason: impl ToString) -> Self {
        Self::RequestConstruction {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RouteNotFound(_) => "route_not_found",
            Self::RequestConstruction { .. } => "request_construction",
            Self::UpstreamUnreachable { .. } => "upstream_unreachable",
            Self::UpstreamBodyReadError { .. } => "upstream_body_read",
            Self::ClientBuild(_) => "client_build",
        }
    }
}
