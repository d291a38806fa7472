//! # chainreq client
//!
//! Blocking HTTP/1.1 client layer underneath the `chainreq` request builder.
//!
//! ## Features
//!
//! - **HTTP/1.1 over hyper**, driven on an internal current-thread runtime
//! - **Rustls TLS** with webpki roots, extra PEM roots and an opt-out for
//!   certificate verification
//! - **HTTP proxies**: absolute-form requests for `http`, `CONNECT` tunnels
//!   for `https`
//! - **Session cookie jar** shared by every clone of a client
//! - **Redirect following** with pluggable policies
//! - **Wire-format dumps** for debugging
//!
//! ## Usage
//!
//! ```no_run
//! use chainreq_client::{ExecuteOptions, HttpClient, HttpRequest, Method};
//!
//! let client = HttpClient::new();
//! let url = url::Url::parse("https://example.com/").unwrap();
//! let response = client
//!     .execute(HttpRequest::new(Method::GET, url), &ExecuteOptions::default())
//!     .unwrap();
//! println!("{} {}", response.status(), response.text());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod connect;
pub mod cookie;
pub mod dump;
pub mod error;
pub mod http;
pub mod prelude;
pub mod redirect;
pub mod transport;

pub use client::{ClientStats, ClientStatsSnapshot, ExecuteOptions, HttpClient, HttpClientBuilder};
pub use config::{ConfigurationError, HttpConfig, TlsConfig, TransportConfig};
pub use cookie::{Cookie, CookieStore, Jar};
pub use dump::{DUMP_PREFIX, DumpSink, MemorySink, TracingSink, dump_request, dump_response};
pub use error::{BoxError, Error, HttpError, Kind, Result, UseLastResponse};
pub use crate::http::{HttpRequest, HttpResponse};
pub use redirect::Policy;
pub use transport::{HyperTransport, Transport};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Version};
pub use url::Url;
