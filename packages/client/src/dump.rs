//! Wire-format request/response dumps for debug mode
//!
//! The builder renders the outbound request and the inbound response as
//! HTTP/1.1 text and hands it to a [`DumpSink`]. The default sink forwards to
//! `tracing`; tests capture output with [`MemorySink`].

use std::fmt::Write as _;
use std::sync::Mutex;

use http::{HeaderMap, Version};

use crate::http::{HttpRequest, HttpResponse};

/// Prefix applied to every dump line, matching the `[http] ` log convention
pub const DUMP_PREFIX: &str = "[http] ";

/// Destination for debug dumps
pub trait DumpSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards dumps to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "chainreq_client::dump", "{message}");
    }
}

/// Collects dumps in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message logged so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DumpSink for MemorySink {
    fn log(&self, message: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}

fn write_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        let _ = write!(out, "{name}: {value}\r\n");
    }
}

/// Render a request as it would appear on the wire
#[must_use]
pub fn dump_request(request: &HttpRequest) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{} {} HTTP/1.1\r\n",
        request.method(),
        request.origin_form()
    );
    if !request.headers().contains_key(http::header::HOST) {
        if let Some(host) = request.host_header() {
            let _ = write!(out, "Host: {host}\r\n");
        }
    }
    write_headers(&mut out, request.headers());
    out.push_str("\r\n");
    if let Some(body) = request.body() {
        out.push_str(&String::from_utf8_lossy(body));
    }
    out
}

/// Render a response as it arrived on the wire
#[must_use]
pub fn dump_response(response: &HttpResponse) -> String {
    let mut out = String::new();
    let status = response.status();
    let _ = write!(
        out,
        "{} {} {}\r\n",
        version_str(response.version()),
        status.as_str(),
        status.canonical_reason().unwrap_or("")
    );
    write_headers(&mut out, response.headers());
    out.push_str("\r\n");
    out.push_str(&response.text());
    out
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{HeaderValue, Method, StatusCode};
    use url::Url;

    use super::*;

    #[test]
    fn request_dump_uses_origin_form_and_host() {
        let url = Url::parse("http://example.com:8080/search?q=rust").expect("test URL should parse");
        let request = HttpRequest::new(Method::POST, url)
            .header(http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body_bytes(Bytes::from_static(br#"{"a":"1"}"#));

        let dump = dump_request(&request);
        assert!(dump.starts_with("POST /search?q=rust HTTP/1.1\r\n"));
        assert!(dump.contains("Host: example.com:8080\r\n"));
        assert!(dump.contains("content-type: application/json\r\n"));
        assert!(dump.ends_with("\r\n\r\n{\"a\":\"1\"}"));
    }

    #[test]
    fn response_dump_has_status_line() {
        let url = Url::parse("http://example.com/").expect("test URL should parse");
        let response = HttpResponse::new(
            StatusCode::NOT_FOUND,
            Version::HTTP_11,
            HeaderMap::new(),
            url,
            Bytes::from_static(b"missing"),
        );

        let dump = dump_response(&response);
        assert!(dump.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(dump.ends_with("missing"));
    }

    #[test]
    fn memory_sink_collects_lines() {
        let sink = MemorySink::new();
        sink.log("one");
        sink.log("two");
        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }
}
