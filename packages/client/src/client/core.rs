//! Core HTTP client structure and request execution

use std::sync::Arc;

use http::header::{CONTENT_LENGTH, CONTENT_TYPE, LOCATION, REFERER, SET_COOKIE, USER_AGENT};
use http::HeaderValue;

use super::configuration::HttpClientBuilder;
use super::stats::ClientStats;
use crate::config::{HttpConfig, TransportConfig};
use crate::cookie::CookieStore;
use crate::cookie::utils::add_cookie_header;
use crate::error::{self, Result, UseLastResponse};
use crate::http::{HttpRequest, HttpResponse};
use crate::redirect::{self, Policy};
use crate::transport::Transport;

/// Per-execution settings supplied by the request builder
#[derive(Debug, Clone, Default)]
pub struct ExecuteOptions {
    pub transport: TransportConfig,
    /// Replaces the client's default hop limit for this execution
    pub redirect_policy: Option<Policy>,
}

struct ClientInner {
    config: HttpConfig,
    transport: Arc<dyn Transport>,
    cookie_store: Option<Arc<dyn CookieStore>>,
    stats: ClientStats,
}

/// Shareable HTTP client
///
/// Cloning is cheap; every clone shares the transport, cookie jar,
/// configuration and statistics of the original.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .field("cookie_store", &self.inner.cookie_store.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Client with the hyper transport, a cookie jar and default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            HttpConfig::default(),
            Arc::new(crate::transport::HyperTransport::new()),
            Some(Arc::new(crate::cookie::Jar::default())),
        )
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Client with the hyper transport and the given settings
    ///
    /// # Errors
    ///
    /// Returns the configuration error if `config` does not validate.
    pub fn with_config(config: HttpConfig) -> crate::config::ConfigResult<Self> {
        HttpClientBuilder::new().config(config).build()
    }

    /// Client with default settings routed through `transport`
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_parts(
            HttpConfig::default(),
            transport,
            Some(Arc::new(crate::cookie::Jar::default())),
        )
    }

    /// Client that keeps session cookies in `store`
    #[must_use]
    pub fn with_cookie_store(store: Arc<dyn CookieStore>) -> Self {
        Self::from_parts(
            HttpConfig::default(),
            Arc::new(crate::transport::HyperTransport::new()),
            Some(store),
        )
    }

    /// Client that neither stores nor replays cookies
    #[must_use]
    pub fn without_cookie_store() -> Self {
        Self::from_parts(
            HttpConfig::default().with_cookie_store(false),
            Arc::new(crate::transport::HyperTransport::new()),
            None,
        )
    }

    pub(crate) fn from_parts(
        config: HttpConfig,
        transport: Arc<dyn Transport>,
        cookie_store: Option<Arc<dyn CookieStore>>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                cookie_store,
                stats: ClientStats::new(),
            }),
        }
    }

    /// Whether two handles refer to the same client
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn stats(&self) -> &ClientStats {
        &self.inner.stats
    }

    #[must_use]
    pub fn cookie_store(&self) -> Option<&Arc<dyn CookieStore>> {
        self.inner.cookie_store.as_ref()
    }

    /// Send `request`, following redirects, and return the final response.
    ///
    /// Responses of every status are returned as `Ok`; only transport
    /// failures and redirect-policy rejections are errors.
    ///
    /// # Errors
    ///
    /// Returns the transport's error, a redirect error when the policy stops
    /// the chain or a `Location` header cannot be resolved.
    pub fn execute(&self, request: HttpRequest, options: &ExecuteOptions) -> Result<HttpResponse> {
        let config = &self.inner.config;
        let policy = options
            .redirect_policy
            .clone()
            .unwrap_or_else(|| Policy::limited(config.max_redirects));
        let mut transport_config = options.transport.clone();
        if transport_config.timeout.is_none() {
            transport_config.timeout = config.default_timeout;
        }

        let mut current = request;
        if !current.headers().contains_key(USER_AGENT) {
            if let Ok(agent) = HeaderValue::from_str(&config.user_agent) {
                current.headers_mut().insert(USER_AGENT, agent);
            }
        }

        let mut via: Vec<HttpRequest> = Vec::new();
        loop {
            let response = self.round_trip(&current, &transport_config)?;

            let Some((method, keep_body)) = redirect::next_method(response.status(), current.method()) else {
                return Ok(response);
            };
            let Some(location) = response.headers().get(LOCATION) else {
                return Ok(response);
            };
            let next_url = location
                .to_str()
                .ok()
                .and_then(|location| response.url().join(location).ok())
                .ok_or_else(|| {
                    error::redirect(
                        format!("invalid Location header {location:?}"),
                        response.url().clone(),
                    )
                })?;

            let mut headers = current.headers().clone();
            redirect::remove_sensitive_headers(&mut headers, &next_url, current.url());
            if !keep_body {
                headers.remove(CONTENT_TYPE);
                headers.remove(CONTENT_LENGTH);
            }
            if config.referer {
                if let Some(referer) = redirect::make_referer(&next_url, current.url()) {
                    headers.insert(REFERER, referer);
                }
            }

            let mut next = current
                .clone()
                .with_method(method)
                .with_url(next_url)
                .with_headers(headers);
            if !keep_body {
                next = next.without_body();
            }

            via.push(current);
            if let Err(e) = policy.check(&next, &via) {
                if e.is::<UseLastResponse>() {
                    tracing::debug!(target: "chainreq_client::redirect", "policy kept last response from {}", response.url());
                    return Ok(response);
                }
                tracing::debug!(target: "chainreq_client::redirect", "redirect to {} refused: {}", next.url(), e);
                return Err(error::redirect(e, next.url().clone()));
            }

            tracing::debug!(
                target: "chainreq_client::redirect",
                "following {} redirect to {}",
                response.status(),
                next.url()
            );
            self.inner.stats.record_redirect();
            current = next;
        }
    }

    /// One hop: jar cookies out, transport, jar cookies in
    fn round_trip(&self, request: &HttpRequest, config: &TransportConfig) -> Result<HttpResponse> {
        let stats = &self.inner.stats;
        stats.record_request();

        let outbound;
        let request = match &self.inner.cookie_store {
            Some(store) => {
                let mut with_cookies = request.clone();
                let url = with_cookies.url().clone();
                add_cookie_header(with_cookies.headers_mut(), store.as_ref(), &url);
                outbound = with_cookies;
                &outbound
            }
            None => request,
        };

        let response = match self.inner.transport.round_trip(request, config) {
            Ok(response) => response,
            Err(e) => {
                stats.record_failure();
                tracing::debug!(target: "chainreq_client::client", "{} {} failed: {}", request.method(), request.url(), e);
                return Err(if e.url().is_none() {
                    e.with_url(request.url().clone())
                } else {
                    e
                });
            }
        };
        stats.record_response(response.body().len());

        if let Some(store) = &self.inner.cookie_store {
            let mut set_cookies = response.headers().get_all(SET_COOKIE).iter();
            store.set_cookies(&mut set_cookies, response.url());
        }
        Ok(response)
    }
}
