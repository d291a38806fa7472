use std::fmt;

/// A marker type to indicate that a connection timed out.
#[derive(Debug)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl std::error::Error for TimedOut {}

/// A marker type to indicate that a URI scheme was bad.
#[derive(Debug)]
pub struct BadScheme;

impl fmt::Display for BadScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bad scheme")
    }
}

impl std::error::Error for BadScheme {}

/// A marker type to indicate that a connection was closed.
#[derive(Debug)]
pub struct ConnectionClosed;

impl fmt::Display for ConnectionClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection closed")
    }
}

impl std::error::Error for ConnectionClosed {}

/// Returned from a redirect policy to stop following redirects.
///
/// The client hands back the 3xx response itself instead of an error.
#[derive(Debug)]
pub struct UseLastResponse;

impl fmt::Display for UseLastResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("use last response")
    }
}

impl std::error::Error for UseLastResponse {}
