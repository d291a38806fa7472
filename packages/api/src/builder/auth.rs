//! Basic authentication

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;

use crate::builder::core::RequestBuilder;

/// `Authorization` value for HTTP basic authentication
pub(crate) fn basic_auth_header(username: &str, password: &str) -> Option<HeaderValue> {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}")).ok()?;
    value.set_sensitive(true);
    Some(value)
}

impl RequestBuilder {
    /// Send HTTP basic credentials
    ///
    /// The `Authorization` header is added at execution and overrides one set
    /// with [`set_header`](Self::set_header). An empty username and password
    /// together mean no credentials.
    pub fn set_basic_auth(&mut self, username: &str, password: &str) -> &mut Self {
        self.basic_auth = if username.is_empty() && password.is_empty() {
            None
        } else {
            Some((username.to_string(), password.to_string()))
        };
        self
    }
}
