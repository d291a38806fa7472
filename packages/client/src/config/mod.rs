//! Client and transport configuration
//!
//! `HttpConfig` holds client-wide settings shared by every request sent
//! through one `HttpClient`. `TransportConfig` is the per-request transport
//! state (timeout, proxy, TLS) owned by a request builder.

pub mod client;
pub mod transport;
pub mod validation;

pub use client::HttpConfig;
pub use transport::{TlsConfig, TransportConfig};
pub use validation::{ConfigResult, ConfigurationError};
