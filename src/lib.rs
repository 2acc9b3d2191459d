//! Pico Proxy: a minimal path-prefix HTTP reverse proxy.
//!
//! A request for `/<prefix>/rest?query` is forwarded as a GET to
//! `<backend>/rest?query`, where `<backend>` is the base URL configured for
//! the first prefix that the path (without its leading slash) starts with.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod routing;

pub use config::ProxyConfig;
pub use http::ProxyServer;
pub use lifecycle::Shutdown;
