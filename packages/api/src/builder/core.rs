//! Core `RequestBuilder` structure and session settings

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chainreq_client::{DumpSink, HeaderMap, HttpClient, HttpError, Policy, TracingSink, TransportConfig};

use crate::data::StructuredData;

/// HTTP methods the builder can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Patch => "PATCH",
        }
    }

    /// Whether requests with this method carry a body
    #[must_use]
    pub fn has_body(self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Head => http::Method::HEAD,
            Method::Patch => http::Method::PATCH,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulator for one logical HTTP request
///
/// Every setter returns `&mut Self`, so calls chain left to right and the
/// builder can be reused after [`reset`](Self::reset).
///
/// # Examples
/// ```no_run
/// let (response, body) = chainreq::new()
///     .post("http://localhost:8080/users")
///     .content_type("json")
///     .send_map_string(r#"{"name":"Jerry"}"#)
///     .end()
///     .unwrap();
/// println!("{} {body}", response.status());
/// ```
pub struct RequestBuilder {
    pub(crate) method: Option<Method>,
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) data: StructuredData,
    pub(crate) raw_string: String,
    pub(crate) raw_bytes: Bytes,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) cookies: Vec<chainreq_client::Cookie>,
    pub(crate) basic_auth: Option<(String, String)>,
    pub(crate) transport: TransportConfig,
    pub(crate) redirect_policy: Option<Policy>,
    pub(crate) errors: Vec<HttpError>,
    pub(crate) client: Option<HttpClient>,
    pub(crate) debug: bool,
    pub(crate) logger: Arc<dyn DumpSink>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: None,
            url: String::new(),
            headers: HeaderMap::new(),
            data: StructuredData::new(),
            raw_string: String::new(),
            raw_bytes: Bytes::new(),
            query: Vec::new(),
            cookies: Vec::new(),
            basic_auth: None,
            transport: TransportConfig::default(),
            redirect_policy: None,
            errors: Vec::new(),
            client: None,
            debug: false,
            logger: Arc::new(TracingSink),
        }
    }

    /// Clear all request state.
    ///
    /// The client (and with it the session cookie jar), the debug flag and
    /// the logger are kept.
    pub fn reset(&mut self) -> &mut Self {
        let client = self.client.take();
        let debug = self.debug;
        let logger = Arc::clone(&self.logger);
        *self = Self {
            client,
            debug,
            logger,
            ..Self::new()
        };
        self
    }

    /// Enable wire-format dumps of each request and response
    pub fn set_debug(&mut self, enable: bool) -> &mut Self {
        self.debug = enable;
        self
    }

    /// Destination for debug dumps; defaults to `tracing`
    pub fn set_logger(&mut self, logger: Arc<dyn DumpSink>) -> &mut Self {
        self.logger = logger;
        self
    }

    /// Send through `client` instead of the lazily created default
    pub fn set_client(&mut self, client: HttpClient) -> &mut Self {
        self.client = Some(client);
        self
    }

    /// The client used by the last execution, or set explicitly
    #[must_use]
    pub fn client(&self) -> Option<&HttpClient> {
        self.client.as_ref()
    }

    /// Construction errors recorded so far
    #[must_use]
    pub fn errors(&self) -> &[HttpError] {
        &self.errors
    }

    #[must_use]
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn data(&self) -> &StructuredData {
        &self.data
    }

    #[must_use]
    pub fn transport_config(&self) -> &TransportConfig {
        &self.transport
    }

    pub(crate) fn record_error(&mut self, error: HttpError) {
        if self.debug {
            log::debug!("recorded construction error: {error}");
        }
        self.errors.push(error);
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("data", &self.data)
            .field("query", &self.query)
            .field("errors", &self.errors.len())
            .field("client", &self.client.is_some())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_client_and_debug_settings() {
        let client = HttpClient::new();
        let mut builder = RequestBuilder::new();
        builder
            .set_client(client.clone())
            .set_debug(true)
            .post("http://example.com/")
            .set_header("x-trace", "1")
            .send_map_string("a=1")
            .param("q", "x")
            .proxy("::bad::");
        assert!(!builder.errors().is_empty());

        builder.reset();

        assert!(builder.method().is_none());
        assert!(builder.url().is_empty());
        assert!(builder.headers().is_empty());
        assert!(builder.data().is_empty());
        assert!(builder.errors().is_empty());
        assert!(builder.query.is_empty());
        assert!(builder.debug);
        assert!(builder.client().is_some_and(|c| c.ptr_eq(&client)));
    }

    #[test]
    fn only_post_put_patch_carry_bodies() {
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(Method::Patch.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Head.has_body());
        assert!(!Method::Delete.has_body());
    }
}
