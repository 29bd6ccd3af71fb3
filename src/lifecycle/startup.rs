//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter if enabled
//! - Load TLS material or bind the plaintext listener
//! - Run the HTTP server until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Expects an already validated config

use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::MockConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::load_tls_config;
use crate::observability::metrics;

/// Errors that stop the emulator from starting or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid address {0:?}: {1}")]
    Address(String, AddrParseError),

    #[error("Failed to bind {0}: {1}")]
    Bind(SocketAddr, std::io::Error),

    #[error("Failed to load TLS configuration: {0}")]
    Tls(std::io::Error),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

fn parse_addr(value: &str) -> Result<SocketAddr, StartupError> {
    value
        .parse()
        .map_err(|e| StartupError::Address(value.to_string(), e))
}

/// Start every subsystem and serve until `shutdown` is triggered.
pub async fn start(config: MockConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    let addr = parse_addr(&config.listener.bind_address)?;
    let tls = config.listener.tls.clone();
    let server = HttpServer::new(config);

    if !tls.is_empty() {
        let rustls = load_tls_config(&tls).await.map_err(StartupError::Tls)?;
        server
            .run_tls(addr, rustls, shutdown.subscribe())
            .await
            .map_err(StartupError::Serve)
    } else {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| StartupError::Bind(addr, e))?;
        server
            .run(listener, shutdown.subscribe())
            .await
            .map_err(StartupError::Serve)
    }
}
