//! HTTP request and response types
//!
//! The outbound `HttpRequest` assembled by the builder layer and the fully
//! materialized `HttpResponse` handed back from a round trip.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
