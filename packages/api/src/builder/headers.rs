//! Header management and content-type aliases

use chainreq_client::error;
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue};

use crate::builder::core::RequestBuilder;

pub const JSON: &str = "application/json";
pub const FORM: &str = "application/x-www-form-urlencoded";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Short names accepted by [`RequestBuilder::content_type`]
pub const SHORT_CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("text", "text/plain"),
    ("json", JSON),
    ("xml", "application/xml"),
    ("urlencoded", FORM),
    ("form", FORM),
    ("form-data", FORM),
    ("stream", OCTET_STREAM),
];

/// Expand a short content-type name; anything else passes through unchanged
#[must_use]
pub fn resolve_content_type(name: &str) -> &str {
    SHORT_CONTENT_TYPES
        .iter()
        .find(|(short, _)| *short == name)
        .map_or(name, |(_, full)| full)
}

/// Whether `content_type` names the media type `essence`, ignoring case and
/// parameters such as `charset`
#[must_use]
pub fn media_type_is(content_type: &str, essence: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(essence))
}

impl RequestBuilder {
    /// Set a header, replacing any previous value with the same name
    ///
    /// Header names are case-insensitive. An invalid name or value is
    /// recorded as a construction error.
    ///
    /// # Examples
    /// ```no_run
    /// let result = chainreq::new()
    ///     .get("http://localhost:8080/")
    ///     .set_header("Accept", "application/json")
    ///     .end();
    /// ```
    pub fn set_header(&mut self, name: &str, value: &str) -> &mut Self {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                self.record_error(error::builder(format!("invalid header name {name:?}: {e}")));
                return self;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => self.record_error(error::builder(format!("invalid value for header {name}: {e}"))),
        }
        self
    }

    /// Set the `Content-Type` header from a short name or a full media type
    ///
    /// Short names: `html`, `text`, `json`, `xml`, `urlencoded`, `form`,
    /// `form-data` and `stream`.
    pub fn content_type(&mut self, name: &str) -> &mut Self {
        let full = resolve_content_type(name).to_string();
        self.set_header(CONTENT_TYPE.as_str(), &full)
    }

    pub(crate) fn content_type_value(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Set `Content-Type` only if the caller has not chosen one
    pub(crate) fn default_content_type(&mut self, value: &'static str) {
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        }
    }
}
