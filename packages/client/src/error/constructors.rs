use super::BoxError;
use super::helpers::TimedOut;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a request error.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e.into())
}

/// Creates an `Error` for a redirect error.
pub fn redirect<E: Into<BoxError>>(e: E, url: url::Url) -> Error {
    Error::new(Kind::Redirect).with(e.into()).with_url(url)
}

/// Creates an `Error` for a body error.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}

/// Creates an `Error` for connection establishment failures.
pub fn connect<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e.into())
}

/// Creates an `Error` for TLS handshake and configuration failures.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e.into())
}

/// Creates a timeout `Error` carrying the `TimedOut` marker.
pub fn timeout() -> Error {
    Error::new(Kind::Timeout).with(TimedOut)
}

pub fn invalid_url<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

pub fn url_bad_scheme(url: url::Url) -> Error {
    Error::new(Kind::Builder)
        .with(super::helpers::BadScheme)
        .with_url(url)
}
