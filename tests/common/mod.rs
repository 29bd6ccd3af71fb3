//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use http2_mock::config::MockConfig;
use http2_mock::http::HttpServer;
use http2_mock::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running emulator bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the emulator with the default configuration.
pub async fn start_server() -> TestServer {
    start_server_with(MockConfig::default()).await
}

/// Start the emulator with a custom configuration.
pub async fn start_server_with(mut config: MockConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to accept
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    TestServer { addr, shutdown }
}

/// HTTP/1.1 client.
#[allow(dead_code)]
pub fn http1_client() -> reqwest::Client {
    reqwest::Client::builder().http1_only().build().unwrap()
}

/// HTTP/2 cleartext client (prior knowledge).
#[allow(dead_code)]
pub fn h2c_client() -> reqwest::Client {
    reqwest::Client::builder()
        .http2_prior_knowledge()
        .build()
        .unwrap()
}
