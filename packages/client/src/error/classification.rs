use std::error::Error as StdError;
use std::io;

use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error was recorded while building the request.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the error is from a redirect policy.
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self.inner.kind, Kind::Redirect)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.inner.kind, Kind::Timeout) {
            return true;
        }

        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
                if hyper_err.is_timeout() {
                    return true;
                }
            }
            if let Some(io) = err.downcast_ref::<io::Error>() {
                if io.kind() == io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the error is related to the request
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self.inner.kind, Kind::Request)
    }

    /// Returns true if the error is related to connect
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self.inner.kind, Kind::Connect)
    }

    /// Returns true if the error is related to the request or response body
    #[must_use]
    pub fn is_body(&self) -> bool {
        matches!(self.inner.kind, Kind::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn timeout_is_detected_through_kind_and_source() {
        assert!(error::timeout().is_timeout());

        let io_timeout = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
        assert!(error::request(io_timeout).is_timeout());

        assert!(!error::connect("refused").is_timeout());
    }

    #[test]
    fn display_includes_url_and_source() {
        let url = url::Url::parse("http://example.com/a").expect("test URL should parse");
        let err = error::redirect("stopped after 10 redirects", url);
        let text = err.to_string();
        assert!(text.starts_with("error following redirect"));
        assert!(text.contains("http://example.com/a"));
        assert!(text.ends_with("stopped after 10 redirects"));
    }

    #[test]
    fn clone_keeps_source() {
        let err = error::builder("invalid header name");
        let cloned = err.clone();
        assert!(cloned.is_builder());
        assert_eq!(
            cloned.source().map(ToString::to_string).as_deref(),
            Some("invalid header name")
        );
    }
}
