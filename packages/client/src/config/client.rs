//! Client-wide configuration

use std::time::Duration;

use super::validation::{ConfigResult, ConfigurationError};

/// Default cap on redirect hops, after which the default policy errors
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings shared by every request sent through one client
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Sent as `User-Agent` unless the request sets its own
    pub user_agent: String,
    /// Hops followed by the default redirect policy
    pub max_redirects: usize,
    /// Persist `Set-Cookie` responses in a jar and replay them
    pub cookie_store: bool,
    /// Timeout applied when a request does not configure one
    pub default_timeout: Option<Duration>,
    /// Add a `Referer` header when following redirects
    pub referer: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("chainreq/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            cookie_store: true,
            default_timeout: None,
            referer: true,
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    #[must_use]
    pub fn with_cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_referer(mut self, enabled: bool) -> Self {
        self.referer = enabled;
        self
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if:
    /// - the user agent is empty or contains characters not allowed in a header
    /// - the default timeout is zero or exceeds one hour
    pub fn validate(&self) -> ConfigResult<()> {
        if self.user_agent.is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "user agent cannot be empty".to_string(),
            ));
        }
        if http::HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "user agent {:?} is not a valid header value",
                self.user_agent
            )));
        }
        if let Some(timeout) = self.default_timeout {
            super::validation::validate_timeout(timeout, "default timeout")?;
        }
        Ok(())
    }
}
