//! Redirect Handling
//!
//! By default, a client follows HTTP redirects up to a maximum chain of 10
//! hops. A custom [`Policy`] replaces that check: it sees the pending request
//! and every request already sent in the chain, and either lets the redirect
//! proceed or returns an error. Returning [`UseLastResponse`] stops without
//! failing and hands back the 3xx response.
//!
//! [`UseLastResponse`]: crate::error::UseLastResponse

mod headers;
mod policy;

pub use headers::{make_referer, remove_sensitive_headers};
pub use policy::{Policy, RedirectFn};

use http::{Method, StatusCode};

/// Method used for the follow-up request, or `None` if the status is not a
/// followable redirect.
///
/// 301/302/303 switch to GET and drop the body (HEAD stays HEAD); 307/308
/// replay the original method and body.
#[must_use]
pub fn next_method(status: StatusCode, method: &Method) -> Option<(Method, bool)> {
    match status {
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER => {
            if *method == Method::HEAD {
                Some((Method::HEAD, false))
            } else {
                Some((Method::GET, false))
            }
        }
        StatusCode::TEMPORARY_REDIRECT | StatusCode::PERMANENT_REDIRECT => Some((method.clone(), true)),
        _ => None,
    }
}
