//! HTTP client construction

use std::sync::Arc;

use super::HttpClient;
use crate::config::{ConfigResult, HttpConfig};
use crate::cookie::{CookieStore, Jar};
use crate::transport::{HyperTransport, Transport};

/// Builder for an [`HttpClient`] with non-default parts
#[must_use]
pub struct HttpClientBuilder {
    config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
    cookie_store: Option<Arc<dyn CookieStore>>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self {
            config: HttpConfig::default(),
            transport: None,
            cookie_store: None,
        }
    }

    pub fn config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.default_timeout = Some(timeout);
        self
    }

    /// Replace the network transport, e.g. with a recording test double
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `store` as the session cookie jar and enable cookie handling
    pub fn cookie_provider(mut self, store: Arc<dyn CookieStore>) -> Self {
        self.config.cookie_store = true;
        self.cookie_store = Some(store);
        self
    }

    /// Enable or disable the session cookie jar
    pub fn cookie_store(mut self, enable: bool) -> Self {
        self.config.cookie_store = enable;
        if !enable {
            self.cookie_store = None;
        }
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if `HttpConfig::validate` rejects the settings.
    pub fn build(self) -> ConfigResult<HttpClient> {
        self.config.validate()?;

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HyperTransport::new()) as Arc<dyn Transport>);
        let cookie_store = if self.config.cookie_store {
            Some(
                self.cookie_store
                    .unwrap_or_else(|| Arc::new(Jar::default()) as Arc<dyn CookieStore>),
            )
        } else {
            None
        };

        Ok(HttpClient::from_parts(self.config, transport, cookie_store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_store_can_be_disabled() {
        let client = HttpClientBuilder::new()
            .cookie_store(false)
            .build()
            .expect("default config is valid");
        assert!(client.cookie_store().is_none());
        assert!(!client.config().cookie_store);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = HttpClientBuilder::new()
            .timeout(std::time::Duration::ZERO)
            .build();
        assert!(result.is_err());
    }
}
