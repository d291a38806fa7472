//! Materialized HTTP response
//!
//! The body is read completely before the response is returned, so it can be
//! inspected as bytes and still be consumed again through a fresh reader.

use std::borrow::Cow;
use std::io::Cursor;

use bytes::Bytes;
use http::{HeaderMap, StatusCode, Version};
use url::Url;

/// HTTP response with an in-memory body
///
/// Cloning is cheap: headers are copied and the body buffer is shared.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: StatusCode, version: Version, headers: HeaderMap, url: Url, body: Bytes) -> Self {
        Self {
            status,
            version,
            headers,
            url,
            body,
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The URL that produced this response, after any redirects
    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// A fresh reader over the body; each call starts from the beginning
    #[must_use]
    pub fn body_reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn sample() -> HttpResponse {
        let url = Url::parse("http://localhost/echo").expect("test URL should parse");
        HttpResponse::new(
            StatusCode::OK,
            Version::HTTP_11,
            HeaderMap::new(),
            url,
            Bytes::from_static(b"hello body"),
        )
    }

    #[test]
    fn body_reader_is_rereadable() {
        let response = sample();

        let mut first = String::new();
        response
            .body_reader()
            .read_to_string(&mut first)
            .expect("reading in-memory body should succeed");

        let mut second = String::new();
        response
            .body_reader()
            .read_to_string(&mut second)
            .expect("reading in-memory body should succeed");

        assert_eq!(first, "hello body");
        assert_eq!(first, second);
        assert_eq!(response.text(), "hello body");
    }
}
