//! Redirect policy

use std::fmt;
use std::sync::Arc;

use crate::config::client::DEFAULT_MAX_REDIRECTS;
use crate::error::BoxError;
use crate::http::HttpRequest;

/// User decision function over (pending request, prior requests)
pub type RedirectFn = dyn Fn(&HttpRequest, &[HttpRequest]) -> Result<(), BoxError> + Send + Sync;

/// A type that controls the policy on how to handle the following of redirects.
#[derive(Clone)]
pub enum Policy {
    /// Follow up to the given number of hops, then error
    Limited(usize),
    /// Delegate every hop to a user function
    Custom(Arc<RedirectFn>),
}

impl Policy {
    /// Create a `Policy` with a maximum number of redirects.
    #[must_use]
    pub fn limited(max: usize) -> Self {
        Self::Limited(max)
    }

    /// Create a `Policy` from a user decision function.
    pub fn custom<F>(policy: F) -> Self
    where
        F: Fn(&HttpRequest, &[HttpRequest]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(policy))
    }

    /// Decide whether `next` may be sent after the requests in `via`.
    ///
    /// # Errors
    ///
    /// Returns the policy's error when the redirect must not be followed.
    pub fn check(&self, next: &HttpRequest, via: &[HttpRequest]) -> Result<(), BoxError> {
        match self {
            Self::Limited(max) => {
                if via.len() >= *max {
                    Err(format!("stopped after {max} redirects").into())
                } else {
                    Ok(())
                }
            }
            Self::Custom(policy) => policy(next, via),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::Limited(DEFAULT_MAX_REDIRECTS)
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(max) => f.debug_tuple("Limited").field(max).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}
