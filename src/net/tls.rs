//! TLS configuration and certificate loading.
//!
//! # Responsibilities
//! - Load every configured certificate chain and private key (PEM)
//! - Pick the certificate for each handshake from the SNI server name
//!
//! # Design Decisions
//! - The first configured certificate answers clients without SNI or with an
//!   unknown name
//! - ALPN advertises `h2` then `http/1.1`

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use rustls::crypto::aws_lc_rs;
use rustls::pki_types::CertificateDer;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use rustls::ServerConfig;

use crate::config::TlsConfig;

/// Certificates keyed by lowercase server name, with a fallback.
#[derive(Debug)]
struct SniTable<T> {
    by_name: HashMap<String, T>,
    default: T,
}

impl<T> SniTable<T> {
    fn select(&self, server_name: Option<&str>) -> &T {
        server_name
            .and_then(|name| self.by_name.get(&name.to_ascii_lowercase()))
            .unwrap_or(&self.default)
    }
}

#[derive(Debug)]
struct SniResolver(SniTable<Arc<CertifiedKey>>);

impl ResolvesServerCert for SniResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        let server_name = client_hello.server_name();
        tracing::trace!(server_name = ?server_name, "Selecting certificate");
        Some(self.0.select(server_name).clone())
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn ensure_exists(path: &Path, what: &str) -> io::Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} file not found: {:?}", what, path),
        ))
    }
}

async fn load_certified_key(tls: &TlsConfig) -> io::Result<CertifiedKey> {
    let cert_path = Path::new(&tls.cert_path);
    let key_path = Path::new(&tls.key_path);
    ensure_exists(cert_path, "Certificate")?;
    ensure_exists(key_path, "Private key")?;

    tracing::debug!(cert = ?cert_path, key = ?key_path, "Loading key and certificate");

    let cert_pem = tokio::fs::read(cert_path).await?;
    let certs = rustls_pemfile::certs(&mut cert_pem.as_slice())
        .collect::<Result<Vec<CertificateDer<'static>>, _>>()?;
    if certs.is_empty() {
        return Err(invalid_data(format!("No certificate in {:?}", cert_path)));
    }

    let key_pem = tokio::fs::read(key_path).await?;
    let key = rustls_pemfile::private_key(&mut key_pem.as_slice())?
        .ok_or_else(|| invalid_data(format!("No private key in {:?}", key_path)))?;
    let signing_key = aws_lc_rs::sign::any_supported_type(&key)
        .map_err(|e| invalid_data(format!("Unusable private key {:?}: {}", key_path, e)))?;

    Ok(CertifiedKey::new(certs, signing_key))
}

/// Load TLS configuration for every configured certificate.
///
/// Fails if `entries` is empty or any certificate or key cannot be loaded.
pub async fn load_tls_config(entries: &[TlsConfig]) -> io::Result<RustlsConfig> {
    let mut by_name = HashMap::new();
    let mut default = None;

    for tls in entries {
        let key = Arc::new(load_certified_key(tls).await?);
        for name in &tls.server_names {
            by_name
                .entry(name.to_ascii_lowercase())
                .or_insert_with(|| key.clone());
        }
        default.get_or_insert(key);
    }

    let default = default.ok_or_else(|| invalid_data("No TLS certificate configured".into()))?;
    tracing::info!(
        certificates = entries.len(),
        server_names = by_name.len(),
        "TLS certificates loaded"
    );

    let mut config = ServerConfig::builder_with_provider(Arc::new(aws_lc_rs::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|e| invalid_data(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(Arc::new(SniResolver(SniTable { by_name, default })));
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

    Ok(RustlsConfig::from_config(Arc::new(config)))
}
