//! Inbound request extraction.
//!
//! # Responsibilities
//! - Capture method, raw path, query and headers
//! - Read the body fully, bounded by the configured limit

use axum::body::Body;
use axum::http::Request;

use crate::proxy::{InboundRequest, ProxyError};

impl InboundRequest {
    /// Read an axum request into memory.
    ///
    /// A body that cannot be read (or exceeds `max_body_bytes`) means no
    /// outbound request can be built.
    pub async fn from_request(
        request: Request<Body>,
        max_body_bytes: usize,
    ) -> Result<Self, ProxyError> {
        let (parts, body) = request.into_parts();
        let path = parts.uri.path().to_string();

        let body = axum::body::to_bytes(body, max_body_bytes)
            .await
            .map_err(|e| ProxyError::request_construction(&path, e))?;

        Ok(Self {
            method: parts.method,
            query: parts.uri.query().map(str::to_string),
            path,
            headers: parts.headers,
            body,
        })
    }
}
