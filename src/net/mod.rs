//! Network layer subsystem.
//!
//! TLS is optional: without it the listener speaks plaintext HTTP/1.1 and
//! HTTP/2 with prior knowledge; with it ALPN picks the protocol.

pub mod tls;

pub use tls::load_tls_config;
