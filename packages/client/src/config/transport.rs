//! Per-request transport settings
//!
//! A request builder owns one `TransportConfig` and hands it to the
//! transport on every execution, so two builders sharing a client can use
//! different timeouts or proxies.

use std::time::Duration;

use url::Url;

use super::validation::{ConfigResult, ConfigurationError};

/// Timeout, proxy and TLS settings for one request
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Bounds the TCP connect and, separately, the rest of the round trip
    pub timeout: Option<Duration>,
    /// HTTP proxy; `None` connects directly
    pub proxy: Option<Url>,
    pub tls: TlsConfig,
}

impl TransportConfig {
    /// Parse and install a proxy URL; an empty string clears the proxy
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidProxy` if the URL does not parse,
    /// has no host, or uses a scheme other than `http`; the hop to the proxy
    /// is plaintext, so `https` proxies are refused. The current proxy is
    /// left unchanged in that case.
    pub fn set_proxy(&mut self, proxy: &str) -> ConfigResult<()> {
        if proxy.is_empty() {
            self.proxy = None;
            return Ok(());
        }

        let url = Url::parse(proxy)
            .map_err(|e| ConfigurationError::InvalidProxy(format!("{proxy:?}: {e}")))?;
        if url.scheme() != "http" {
            return Err(ConfigurationError::InvalidProxy(format!(
                "unsupported proxy scheme {:?}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(ConfigurationError::InvalidProxy(format!(
                "{proxy:?} has no host"
            )));
        }

        self.proxy = Some(url);
        Ok(())
    }
}

/// TLS verification settings
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Skip certificate and hostname verification entirely
    pub accept_invalid_certs: bool,
    /// PEM-encoded certificates trusted in addition to the webpki roots
    pub extra_root_certs_pem: Vec<Vec<u8>>,
}

impl TlsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub fn add_root_certificate_pem(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.extra_root_certs_pem.push(pem.into());
        self
    }
}
