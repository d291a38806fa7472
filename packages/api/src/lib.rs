//! # chainreq
//!
//! Chainable HTTP request builder.
//!
//! A [`RequestBuilder`] collects a request's method, URL, headers, query
//! parameters, body, cookies, credentials and transport settings through
//! chained calls, then sends exactly one request when a terminal call
//! ([`end`](RequestBuilder::end), [`end_bytes`](RequestBuilder::end_bytes))
//! runs. Invalid input never breaks the chain: it is recorded and returned
//! by the terminal call, which then sends nothing.
//!
//! String bodies are sniffed: a JSON object is merged as structured data, a
//! form string is merged as form pairs, and anything else is sent verbatim.
//! Structured data is rendered as JSON or as a form body according to the
//! content type.
//!
//! ```no_run
//! let mut request = chainreq::new();
//! let (response, body) = request
//!     .post("http://localhost:8080/users")
//!     .content_type("json")
//!     .send_map_string(r#"{"Name":"Jerry"}"#)
//!     .end()
//!     .unwrap();
//! println!("{}: {body}", response.status());
//!
//! // The client, and with it the cookie jar, survives a reset
//! request.reset();
//! let result = request
//!     .get("http://localhost:8080/search")
//!     .query("query=bicycle&size=50x50")
//!     .query(r#"{"weight":"20kg"}"#)
//!     .end();
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod sniff;

pub use builder::{Method, RequestBuilder, SHORT_CONTENT_TYPES, resolve_content_type};
pub use data::{DataValue, StructuredData};
pub use error::Errors;

// Re-export the client types that appear in the builder's API
pub use chainreq_client::{
    BoxError, Cookie, DumpSink, HttpClient, HttpConfig, HttpError, HttpRequest, HttpResponse, MemorySink,
    TlsConfig, TracingSink, UseLastResponse,
};

/// Start a new request
#[must_use]
pub fn new() -> RequestBuilder {
    RequestBuilder::new()
}
