//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_exchanges_total` (counter): inbound exchanges by method, status
//! - `relay_exchange_duration_seconds` (histogram): end-to-end latency
//!
//! # Design Decisions
//! - Recorded by the adapter only; pipeline decorators stay metric-free
//!   (the log sink is the core's only sanctioned side effect)
//! - Recording without an installed exporter is a no-op, so tests and
//!   metric-disabled deployments pay nothing

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`. Call once at startup, inside
/// the tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "failed to install metrics exporter"),
    }
}

/// Record one completed inbound exchange.
pub fn record_exchange(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "relay_exchanges_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!(
        "relay_exchange_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .record(start.elapsed().as_secs_f64());
}
