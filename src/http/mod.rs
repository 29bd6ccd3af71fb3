//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, HTTP/1.1 + HTTP/2, middleware)
//!     → routing::Router (path → protocol)
//!     → apns.rs | vui.rs | index.rs (validate, synthesize)
//!     → response.rs (status, content type, body)
//!     → Send to client
//! ```

pub mod apns;
pub mod index;
pub mod request;
pub mod response;
pub mod server;
pub mod vui;

pub use server::{AppState, HttpServer};
