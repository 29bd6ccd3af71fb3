//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Configure HTTP/1.1 and HTTP/2 support (h2c or TLS with ALPN)
//! - Wire up middleware (tracing, timeout)
//! - Dispatch requests to the protocol handlers via the routing table
//! - Observability (metrics per protocol and status)
//!
//! # Design Decisions
//! - No router-wide body limit: only the VUI handler reads bodies, and it
//!   enforces `limits.max_body_size` itself
//! - Routing sees the percent-decoded path

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use percent_encoding::percent_decode_str;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::MockConfig;
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::http::{apns, index, vui};
use crate::observability::metrics;
use crate::routing::{Protocol, Router as PathRouter};

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<PathRouter>,
    pub max_body_size: usize,
}

/// HTTP server for the emulator.
pub struct HttpServer {
    router: Router,
    config: MockConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        let state = AppState {
            routes: Arc::new(PathRouter::from_config(&config.routes)),
            max_body_size: config.limits.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &MockConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Serve plaintext HTTP/1.1 and HTTP/2 (prior knowledge) until shutdown fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Serving on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS with ALPN (`h2`, `http/1.1`) until shutdown fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "Serving on https://{}", addr);

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            shutdown.wait().await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Route a request to its protocol handler.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let path = percent_decode_str(request.uri().path())
        .decode_utf8_lossy()
        .into_owned();
    let route = state.routes.resolve(&path);

    tracing::debug!(
        protocol = %route.protocol,
        method = %request.method(),
        path = %path,
        version = ?request.version(),
        "Got connection"
    );

    let response = match route.protocol {
        Protocol::Apns => apns::handle(request.method(), route.remainder, request.headers()),
        Protocol::Vui => {
            let today = chrono::Local::now().date_naive();
            vui::handle(request, state.max_body_size, today).await
        }
        Protocol::Index => index::handle(),
    };

    metrics::record_request(route.protocol, response.status(), start_time);
    response
}
