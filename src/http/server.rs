//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with the proxy handler
//! - Wire up middleware (request spans)
//! - Dispatch requests to the routing table
//! - Forward matched requests to backends
//! - Record request metrics

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

use crate::config::ProxyConfig;
use crate::http::response;
use crate::observability::metrics;
use crate::proxy::{Forwarder, InboundRequest, ProxyError, RelayedResponse};
use crate::routing::{RouteDecision, Router as ProxyRouter};

/// Application state injected into handlers.
///
/// Everything here is immutable or internally synchronized; handlers never
/// coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    pub forwarder: Forwarder,
    pub max_body_bytes: usize,
}

/// HTTP server for the proxy.
pub struct ProxyServer {
    router: Router,
}

impl ProxyServer {
    /// Create a server, building the shared outbound client from `config`.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let forwarder = Forwarder::from_config(&config.upstream)?;
        Ok(Self::with_forwarder(&config, forwarder))
    }

    /// Create a server around an existing forwarder.
    pub fn with_forwarder(config: &ProxyConfig, forwarder: Forwarder) -> Self {
        let proxy_router = Arc::new(ProxyRouter::from_config(config.routes.clone()));

        if proxy_router.table().is_empty() {
            tracing::warn!("Routing table is empty; every non-root path will return 404");
        }
        for route in proxy_router.table().iter() {
            tracing::info!(prefix = %route.prefix(), backend = %route.backend(), "Route registered");
        }

        let state = AppState {
            router: proxy_router,
            forwarder,
            max_body_bytes: config.listener.max_request_body_bytes,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(proxy_handler))
            .route("/{*path}", get(proxy_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http().make_span_with(request_span)),
            )
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Main proxy handler.
/// Answers the root identity check, or looks up a route and forwards.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let path = request.uri().path().to_string();

    let (outcome, response) = match state.router.match_path(&path) {
        RouteDecision::Identity => ("identity", response::identity()),
        RouteDecision::NotFound => {
            tracing::warn!(path = %path, "No route matched");
            ("not_found", ProxyError::RouteNotFound(path).into_response())
        }
        RouteDecision::Forward(route) => {
            match forward(&state, route.backend(), request).await {
                Ok(relayed) => ("forwarded", relayed.into_response()),
                Err(e) => (e.kind(), e.into_response()),
            }
        }
    };

    metrics::record_request(outcome, response.status().as_u16(), start_time);
    response
}

async fn forward(
    state: &AppState,
    backend: &str,
    request: Request<Body>,
) -> Result<RelayedResponse, ProxyError> {
    let path = request.uri().path().to_string();
    let inbound = InboundRequest::from_request(request, state.max_body_bytes)
        .await
        .inspect_err(|e| {
            tracing::error!(kind = e.kind(), path = %path, error = %e, "Failed to read inbound request");
        })?;

    state.forwarder.forward(backend, inbound).await
}
