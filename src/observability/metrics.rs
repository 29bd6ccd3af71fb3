//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Count requests per emulated protocol and status code
//! - Time request handling
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `mock_requests_total` (counter): requests by protocol, status
//! - `mock_request_duration_seconds` (histogram): handling latency by protocol
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::Protocol;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(protocol: Protocol, status: StatusCode, start_time: Instant) {
    ::metrics::counter!(
        "mock_requests_total",
        "protocol" => protocol.as_str(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "mock_request_duration_seconds",
        "protocol" => protocol.as_str()
    )
    .record(start_time.elapsed().as_secs_f64());
}
