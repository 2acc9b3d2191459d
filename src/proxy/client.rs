//! Shared outbound HTTP client.

use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::proxy::ProxyError;

/// Build the long-lived pooled client used for every upstream call.
///
/// No timeout is applied unless one is configured.
pub fn build_client(config: &UpstreamConfig) -> Result<reqwest::Client, ProxyError> {
    let mut builder = reqwest::Client::builder();

    if config.insecure_skip_verify {
        tracing::warn!("Upstream TLS certificate verification disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if !config.system_proxy {
        builder = builder.no_proxy();
    }

    builder.build().map_err(ProxyError::ClientBuild)
}
