//! Metrics collection and exposition.
//!
//! # Metrics
//! - `kv_requests_total` (counter): handled requests by operation, status
//! - `kv_database_size` (gauge): key count at the last status report
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(operation: &'static str, status: u16) {
    counter!(
        "kv_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_database_size(size: usize) {
    gauge!("kv_database_size").set(size as f64);
}
