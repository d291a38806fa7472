//! TLS connection establishment using rustls

use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{CryptoProvider, verify_tls12_signature, verify_tls13_signature};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;

use crate::config::TlsConfig;
use crate::error::{self, Result};

/// Build a rustls client configuration from the request's TLS settings.
///
/// # Errors
///
/// Returns a connect error if a configured PEM root cannot be parsed or added.
pub fn client_config(tls: &TlsConfig) -> Result<Arc<ClientConfig>> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let builder = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()
        .map_err(error::tls)?;

    let config = if tls.accept_invalid_certs {
        tracing::warn!(target: "chainreq_client::tls", "certificate verification disabled");
        builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(NoVerifier(provider)))
            .with_no_client_auth()
    } else {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        for pem in &tls.extra_root_certs_pem {
            for cert in rustls_pemfile::certs(&mut pem.as_slice()) {
                let cert = cert.map_err(|e| error::tls(format!("invalid PEM root certificate: {e}")))?;
                roots.add(cert).map_err(error::tls)?;
            }
        }
        builder.with_root_certificates(roots).with_no_client_auth()
    };

    Ok(Arc::new(config))
}

/// Perform the TLS handshake over an established TCP stream.
///
/// # Errors
///
/// Returns a connect error for invalid server names and failed handshakes.
pub async fn handshake(stream: TcpStream, host: &str, tls: &TlsConfig) -> Result<TlsStream<TcpStream>> {
    let config = client_config(tls)?;
    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| error::tls(format!("invalid server name {host}: {e}")))?;

    let tls_stream = TlsConnector::from(config)
        .connect(server_name, stream)
        .await
        .map_err(|e| error::tls(format!("TLS handshake with {host} failed: {e}")))?;

    tracing::debug!(target: "chainreq_client::tls", "TLS established with {}", host);
    Ok(tls_stream)
}

/// Accepts any server certificate; signatures are still checked
#[derive(Debug)]
struct NoVerifier(Arc<CryptoProvider>);

impl ServerCertVerifier for NoVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}
