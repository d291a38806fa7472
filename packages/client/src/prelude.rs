//! chainreq client prelude
//!
//! The types most callers need to send a request through an [`HttpClient`].

pub use crate::client::{ExecuteOptions, HttpClient};
pub use crate::config::{HttpConfig, TlsConfig, TransportConfig};
pub use crate::cookie::{Cookie, CookieStore, Jar};
pub use crate::dump::{DumpSink, MemorySink, TracingSink};
pub use crate::error::{Error, HttpError, UseLastResponse};
pub use crate::http::{HttpRequest, HttpResponse};
pub use crate::redirect::Policy;
pub use crate::transport::{HyperTransport, Transport};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Version};
