//! HTTP/2 Service Mock -- Emulator of multiple HTTP/2 services.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                 HTTP2 MOCK                    │
//!   Client Request    │  ┌─────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ──────────────────┼─▶│ TLS/h2c │──▶│  http   │──▶│   routing   │  │
//!                     │  │listener │   │ server  │   │ path table  │  │
//!                     │  └─────────┘   └─────────┘   └──────┬──────┘  │
//!                     │                                     │         │
//!                     │              ┌──────────────┬───────┴──────┐  │
//!                     │              ▼              ▼              ▼  │
//!                     │        ┌──────────┐   ┌──────────┐   ┌───────┐│
//!   Client Response   │        │   apns   │   │   vui    │   │ index ││
//!   ◀─────────────────┼────────│ validate │   │ classify │   │welcome││
//!                     │        └──────────┘   │synthesize│   └───────┘│
//!                     │                       └──────────┘            │
//!                     └───────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use http2_mock::config::{load_config, validate_config, ConfigError, MockConfig, TlsConfig};
use http2_mock::lifecycle::{self, signals, Shutdown};
use http2_mock::observability::logging;

#[derive(Parser)]
#[command(name = "http2-mock")]
#[command(about = "HTTP/2 Service Mock -- Emulator of multiple HTTP/2 services.", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the configured bind address port)
    #[arg(short, long)]
    port: Option<u16>,

    /// -v enables DEBUG, -vv enables TRACE logging
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,

    /// PEM certificate; enables TLS together with --key, replacing configured certificates
    #[arg(long, requires = "key")]
    cert: Option<PathBuf>,

    /// PEM private key; enables TLS together with --cert
    #[arg(long, requires = "cert")]
    key: Option<PathBuf>,
}

impl Cli {
    /// Load the config file (or defaults) and apply command line overrides.
    fn resolve_config(&self) -> Result<MockConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MockConfig::default(),
        };

        if let Some(port) = self.port {
            let mut addr: SocketAddr = config.listener.bind_address.parse()?;
            addr.set_port(port);
            config.listener.bind_address = addr.to_string();
        }

        if let (Some(cert), Some(key)) = (&self.cert, &self.key) {
            config.listener.tls = vec![TlsConfig {
                cert_path: cert.to_string_lossy().into_owned(),
                key_path: key.to_string_lossy().into_owned(),
                server_names: Vec::new(),
            }];
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&logging::filter_directive(
        cli.verbose,
        &config.observability.log_level,
    ))?;

    tracing::info!("http2-mock v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls_certificates = config.listener.tls.len(),
        apns_prefix = %config.routes.apns_prefix,
        vui_path = %config.routes.vui_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    lifecycle::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
