//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header::HOST, Request, StatusCode},
    response::Response,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use pico_proxy::config::{ProxyConfig, RouteConfig};
use pico_proxy::{ProxyServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start an axum backend that echoes what it received.
///
/// Response headers describe the upstream request as seen by the backend:
/// `x-backend`, `x-upstream-method`, `x-upstream-uri`, `x-upstream-host` and
/// `x-upstream-x-test` (all `x-test` values, comma-joined). It also sets
/// `x-reply: xyz` and two `x-multi` values. The body is `<name>:<request body>`.
/// `/teapot` answers 418.
pub async fn start_echo_backend(name: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(move |request: Request<Body>| echo(name, request));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn echo(name: &'static str, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    let status = if parts.uri.path() == "/teapot" {
        StatusCode::IM_A_TEAPOT
    } else {
        StatusCode::OK
    };
    let x_test: Vec<_> = parts
        .headers
        .get_all("x-test")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    let host = parts
        .headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Response::builder()
        .status(status)
        .header("x-reply", "xyz")
        .header("x-backend", name)
        .header("x-upstream-method", parts.method.as_str())
        .header("x-upstream-uri", parts.uri.to_string())
        .header("x-upstream-host", host)
        .header("x-upstream-x-test", x_test.join(","))
        .header("x-multi", "first")
        .header("x-multi", "second")
        .body(Body::from(format!("{}:{}", name, String::from_utf8_lossy(&body))))
        .unwrap()
}

/// Start a raw backend that promises more body bytes than it sends.
pub async fn start_truncating_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start the echo backend over HTTPS with a self-signed certificate for
/// `localhost` and `127.0.0.1`.
pub async fn start_tls_echo_backend(name: &'static str) -> SocketAddr {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let tls = RustlsConfig::from_pem_file(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/self_signed.crt"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/self_signed.key"),
    )
    .await
    .unwrap();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(move |request: Request<Body>| echo(name, request));

    tokio::spawn(async move {
        axum_server::from_tcp_rustls(listener, tls)
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    addr
}

/// Start a backend that waits `delay` before answering.
pub async fn start_slow_backend(delay: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        "late"
    });

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// An address nothing is listening on.
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Run the proxy on an ephemeral port with the given routes.
pub async fn start_proxy(routes: Vec<RouteConfig>) -> (SocketAddr, Shutdown) {
    let mut config = ProxyConfig::default();
    config.routes = routes;
    start_proxy_with(config).await
}

/// Run the proxy on an ephemeral port with a full configuration.
///
/// System proxy variables are always ignored so the host environment cannot
/// redirect test traffic.
pub async fn start_proxy_with(mut config: ProxyConfig) -> (SocketAddr, Shutdown) {
    config.upstream.system_proxy = false;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = ProxyServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
