//! Network transports
//!
//! A [`Transport`] performs exactly one HTTP exchange: it writes the
//! request and returns the response with its body fully read. Redirects and
//! cookies are handled above it by [`HttpClient`](crate::HttpClient), so
//! test doubles only need to answer single requests.

mod http1;

pub use http1::HyperTransport;

use crate::config::TransportConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// Single-exchange HTTP transport
pub trait Transport: Send + Sync {
    /// Send `request` and read the whole response.
    ///
    /// # Errors
    ///
    /// Returns a connect, timeout, request or body error when no complete
    /// response could be read.
    fn round_trip(&self, request: &HttpRequest, config: &TransportConfig) -> Result<HttpResponse>;
}
