//! Outbound HTTP request
//!
//! `HttpRequest` is the resolved form of a request: method, absolute URL,
//! headers and an optional fully-encoded body. Transports and redirect
//! policies only ever see this type.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl HttpRequest {
    /// Creates a new `HttpRequest` without headers or body
    #[inline]
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Set a header, replacing any previous value with the same name
    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the encoded request body
    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn body_bytes(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Drop the body; 301/302/303 redirects send the follow-up without one
    #[must_use = "Request builder methods return a new request and should be used"]
    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Path and query in origin-form, as written on the request line
    #[must_use]
    pub fn origin_form(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    /// Value for the `Host` header derived from the URL
    #[must_use]
    pub fn host_header(&self) -> Option<String> {
        let host = self.url.host_str()?;
        match self.url.port() {
            Some(port) => Some(format!("{host}:{port}")),
            None => Some(host.to_string()),
        }
    }
}
