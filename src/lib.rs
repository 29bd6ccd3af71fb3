//! HTTP/2 service emulator library.
//!
//! Serves canned responses for an APNs-style push gateway and the VUI
//! location query/update XML protocol, for integration testing clients
//! without the real backends.

pub mod apns;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod vui;

pub use config::MockConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
