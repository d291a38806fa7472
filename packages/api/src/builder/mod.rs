//! Request builder
//!
//! [`RequestBuilder`] accumulates one request's intent across chained
//! calls. Setters never fail: invalid input is recorded as a construction
//! error and surfaced by the terminal call.

pub mod auth;
pub mod body;
pub mod cookies;
pub mod core;
pub mod headers;
pub mod methods;
pub mod query;
pub mod transport;

pub use self::core::{Method, RequestBuilder};
pub use headers::{SHORT_CONTENT_TYPES, resolve_content_type};
