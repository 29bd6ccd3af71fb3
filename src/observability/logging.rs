//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem once per process
//! - Resolve the filter from `RUST_LOG`, `-v` flags or config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Handlers only emit events; they never touch subscriber setup
//! - `RUST_LOG` overrides everything else

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter};

/// Filter directive for a `-v` count and the configured log level.
///
/// `0` keeps the configured level, `1` is debug, `2` or more is trace.
pub fn filter_directive(verbosity: u8, configured: &str) -> String {
    let level = match verbosity {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    format!("http2_mock={level},tower_http={level}")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(default_directive: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
