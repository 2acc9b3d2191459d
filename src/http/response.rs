//! Response construction.
//!
//! # Responsibilities
//! - Fixed bodies for the identity, not-found and failure responses
//! - Relay a buffered backend response: status, headers, then body
//!
//! # Design Decisions
//! - Failure kinds are not distinguished to callers; every forwarding error is a plain 500

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::proxy::{ProxyError, RelayedResponse};

pub const IDENTITY_BODY: &str = "Pico Proxy";
pub const NOT_FOUND_BODY: &str = "Not found";
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Response for the bare root path.
pub fn identity() -> Response {
    (StatusCode::OK, IDENTITY_BODY).into_response()
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::RouteNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response(),
        }
    }
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
