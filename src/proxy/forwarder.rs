//! Request forwarding.
//!
//! # Responsibilities
//! - Rewrite the inbound path into the backend target URL
//! - Issue a GET carrying the inbound body and first-value headers
//! - Buffer the backend response and hand it back for relay
//!
//! # Design Decisions
//! - One shared client for all requests (connection reuse, internal locking)
//! - The outbound method is always GET, whatever the inbound method was
//! - No retries: the first failure is returned

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};

use crate::config::UpstreamConfig;
use crate::proxy::client::build_client;
use crate::proxy::headers::collapse_headers;
use crate::proxy::rewrite::rewrite_target;
use crate::proxy::ProxyError;

/// An inbound request, fully read.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Raw path as received, leading slash included.
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A buffered backend response ready to be written to the caller.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    /// First value of each backend header.
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Forwards requests to backends over a shared client.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        Ok(Self::new(build_client(config)?))
    }

    /// Forward `inbound` to `backend` and buffer the response.
    pub async fn forward(
        &self,
        backend: &str,
        inbound: InboundRequest,
    ) -> Result<RelayedResponse, ProxyError> {
        let target = rewrite_target(backend, &inbound.path, inbound.query.as_deref());

        tracing::info!(
            method = %inbound.method,
            path = %inbound.path,
            target = %target,
            "Proxying request"
        );

        let result = self.execute(&target, inbound).await;
        if let Err(e) = &result {
            tracing::error!(kind = e.kind(), target = %target, error = %e, "Forwarding failed");
        }
        result
    }

    async fn execute(
        &self,
        target: &str,
        inbound: InboundRequest,
    ) -> Result<RelayedResponse, ProxyError> {
        let url = reqwest::Url::parse(target)
            .map_err(|e| ProxyError::request_construction(target, e))?;

        let request = self
            .client
            .request(Method::GET, url)
            .headers(collapse_headers(&inbound.headers))
            .body(inbound.body)
            .build()
            .map_err(|e| ProxyError::request_construction(target, e))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| ProxyError::UpstreamUnreachable {
                target: target.to_string(),
                source,
            })?;

        let status = response.status();
        let headers = collapse_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|source| ProxyError::UpstreamBodyReadError {
                target: target.to_string(),
                source,
            })?;

        tracing::debug!(target = %target, status = %status, bytes = body.len(), "Upstream responded");

        Ok(RelayedResponse {
            status,
            headers,
            body,
        })
    }
}
