//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): requests by outcome and status
//! - `proxy_request_duration_seconds` (histogram): latency by outcome
//!
//! Recording is always cheap; nothing is exported unless an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a finished request.
pub fn record_request(outcome: &'static str, status: u16, start: Instant) {
    ::metrics::counter!(
        "proxy_requests_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!("proxy_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
