//! Timeout, TLS, proxy and redirect settings

use std::time::Duration;

use chainreq_client::{BoxError, HttpRequest, Policy, TlsConfig, error};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Bound the TCP connect by `timeout`, and the rest of the round trip
    /// (writing the request and reading the response) by the same duration
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.transport.timeout = Some(timeout);
        self
    }

    /// Certificate verification settings for HTTPS requests
    pub fn tls_config(&mut self, tls: TlsConfig) -> &mut Self {
        self.transport.tls = tls;
        self
    }

    /// Route requests through an HTTP proxy
    ///
    /// An empty string removes any proxy. A URL that does not parse, or uses
    /// a scheme other than `http`, is recorded as a construction error and
    /// the previous proxy stays in place. HTTPS targets are still reached
    /// through an `http` proxy by tunnelling.
    ///
    /// # Examples
    /// ```no_run
    /// let result = chainreq::new()
    ///     .proxy("http://proxy.local:3128")
    ///     .get("http://example.com/")
    ///     .end();
    /// ```
    pub fn proxy(&mut self, proxy: &str) -> &mut Self {
        if let Err(e) = self.transport.set_proxy(proxy) {
            self.record_error(error::builder(e));
        }
        self
    }

    /// Decide whether each redirect is followed
    ///
    /// The function sees the pending request and every request already sent
    /// in the chain. Returning an error stops with that error; returning
    /// [`UseLastResponse`](chainreq_client::UseLastResponse) stops and hands
    /// back the redirect response.
    pub fn redirect_policy<F>(&mut self, policy: F) -> &mut Self
    where
        F: Fn(&HttpRequest, &[HttpRequest]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.redirect_policy = Some(Policy::custom(policy));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_proxy_clears_previous_proxy() {
        let mut builder = RequestBuilder::new();
        builder.proxy("http://proxy.local:3128");
        assert!(builder.transport_config().proxy.is_some());
        builder.proxy("");
        assert!(builder.transport_config().proxy.is_none());
        assert!(builder.errors().is_empty());
    }

    #[test]
    fn invalid_proxy_keeps_previous_and_records_error() {
        let mut builder = RequestBuilder::new();
        builder
            .proxy("http://proxy.local:3128")
            .proxy("socks5://other:1080")
            .proxy("https://tls-proxy.local:8443");
        assert_eq!(
            builder.transport_config().proxy.as_ref().map(url::Url::as_str),
            Some("http://proxy.local:3128/")
        );
        assert_eq!(builder.errors().len(), 2);
        assert!(builder.errors().iter().all(chainreq_client::HttpError::is_builder));
    }
}
