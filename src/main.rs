//! Pico Proxy
//!
//! ```text
//!     Client ──▶ axum server ──▶ Router ──▶ Forwarder ──▶ Backend
//!            ◀── status/headers/body ◀────────────────────┘
//! ```
//!
//! Configuration comes from the environment (`PATHS`, `PORT`,
//! `INSECURE_SKIP_VERIFY`, ...), optionally on top of a TOML file named by
//! `PICO_PROXY_CONFIG`.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use pico_proxy::lifecycle::{wait_for_signal, Shutdown};
use pico_proxy::observability::{logging, metrics};
use pico_proxy::{ProxyConfig, ProxyServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProxyConfig::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.observability.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    logging::init_logging(&log_level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!("pico-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        routes = config.routes.len(),
        insecure_skip_verify = config.upstream.insecure_skip_verify,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if let Some(metrics_address) = &config.observability.metrics_address {
        let addr: SocketAddr = metrics_address.parse().map_err(|e| {
            tracing::error!(metrics_address = %metrics_address, "Failed to parse metrics address");
            e
        })?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    let server = ProxyServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
