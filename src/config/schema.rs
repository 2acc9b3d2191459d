//! Configuration schema definitions.
//!
//! All types derive Serde traits so a TOML file can supply them; the
//! environment is layered on top by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (port, host, body limit).
    pub listener: ListenerConfig,

    /// Prefix to backend mappings.
    pub routes: Vec<RouteConfig>,

    /// Outbound client settings.
    pub upstream: UpstreamConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

impl ProxyConfig {
    /// Address the listener binds to, e.g. `0.0.0.0:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Interface to bind.
    pub host: String,

    /// Upper bound on an inbound request body read into memory.
    pub max_request_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            max_request_body_bytes: 16 * 1024 * 1024,
        }
    }
}

/// A single `prefix:backend` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal prefix matched against the path without its leading slash.
    pub prefix: String,

    /// Backend base URL (e.g. `http://backend:9000`).
    pub backend: String,
}

impl RouteConfig {
    pub fn new(prefix: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            backend: backend.into(),
        }
    }
}

/// Outbound client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Accept any upstream TLS certificate.
    pub insecure_skip_verify: bool,

    /// Total request timeout in seconds. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for outbound calls.
    pub system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            insecure_skip_verify: false,
            timeout_secs: None,
            system_proxy: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prometheus exporter bind address; metrics are not exported when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_8080() {
        let config = ProxyConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.routes.is_empty());
        assert!(!config.upstream.insecure_skip_verify);
        assert!(config.upstream.timeout_secs.is_none());
    }

    #[test]
    fn parses_partial_toml() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [listener]
            port = 9000

            [[routes]]
            prefix = "api"
            backend = "http://backend:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.routes, vec![RouteConfig::new("api", "http://backend:9000")]);
        assert_eq!(config.observability.log_level, "info");
    }
}
