//! Cookie records and the session jar

use std::sync::{Arc, RwLock};

use bytes::Bytes;
use http::HeaderValue;
use once_cell::sync::Lazy;

/// A cookie record attached to an outbound request
pub type Cookie = ::cookie::Cookie<'static>;

/// Actions for a persistent cookie store providing session support.
pub trait CookieStore: Send + Sync {
    /// Store a set of Set-Cookie header values received from `url`
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &url::Url);
    /// Get any Cookie values in the store for `url`
    fn cookies(&self, url: &url::Url) -> Option<HeaderValue>;
}

/// Mozilla public suffix list, parsed on first use
static PUBLIC_SUFFIXES: Lazy<Option<publicsuffix::List>> = Lazy::new(|| {
    match publicsuffix::List::from_bytes(include_bytes!("../../data/public_suffix_list.dat")) {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::warn!(target: "chainreq_client::cookie", "public suffix list unavailable: {e}");
            None
        }
    }
});

/// The default `CookieStore`, backed by `cookie_store::CookieStore`.
///
/// Domain and path matching, expiry and `Secure` handling follow RFC 6265.
/// Cookies scoped to a public suffix such as `co.uk` are rejected.
/// Cloning a `Jar` shares the underlying store.
#[derive(Debug, Clone)]
pub struct Jar(Arc<RwLock<cookie_store::CookieStore>>);

impl Default for Jar {
    fn default() -> Self {
        let store = cookie_store::CookieStore::new_with_public_suffix(PUBLIC_SUFFIXES.clone());
        Self(Arc::new(RwLock::new(store)))
    }
}

impl Jar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cookie to this jar as if `url` had sent it in a `Set-Cookie` header.
    ///
    /// # Example
    ///
    /// ```
    /// use chainreq_client::cookie::{CookieStore, Jar};
    ///
    /// let url = url::Url::parse("https://yolo.local").unwrap();
    /// let jar = Jar::default();
    /// jar.add_cookie_str("foo=bar; Domain=yolo.local", &url);
    /// assert!(jar.cookies(&url).is_some());
    /// ```
    pub fn add_cookie_str(&self, cookie: &str, url: &url::Url) {
        let cookies = ::cookie::Cookie::parse(cookie)
            .ok()
            .map(::cookie::Cookie::into_owned)
            .into_iter();
        match self.0.write() {
            Ok(mut store) => store.store_response_cookies(cookies, url),
            Err(_) => tracing::warn!(target: "chainreq_client::cookie", "cookie jar lock poisoned"),
        }
    }
}

impl CookieStore for Jar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &url::Url) {
        let cookies: Vec<_> = cookie_headers
            .filter_map(|val| val.to_str().ok())
            .filter_map(|val| {
                ::cookie::Cookie::parse(val)
                    .map(::cookie::Cookie::into_owned)
                    .map_err(|e| {
                        tracing::debug!(target: "chainreq_client::cookie", "ignoring Set-Cookie {val:?}: {e}");
                    })
                    .ok()
            })
            .collect();

        if cookies.is_empty() {
            return;
        }

        match self.0.write() {
            Ok(mut store) => store.store_response_cookies(cookies.into_iter(), url),
            Err(_) => tracing::warn!(target: "chainreq_client::cookie", "cookie jar lock poisoned"),
        }
    }

    fn cookies(&self, url: &url::Url) -> Option<HeaderValue> {
        let s = match self.0.read() {
            Ok(store) => store
                .get_request_values(url)
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
            Err(_) => return None,
        };

        if s.is_empty() {
            return None;
        }

        HeaderValue::from_maybe_shared(Bytes::from(s)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_replays_cookies_for_matching_url() {
        let jar = Jar::new();
        let origin = url::Url::parse("http://localhost/login").expect("test URL should parse");
        let headers = [
            HeaderValue::from_static("session=abc123; Path=/"),
            HeaderValue::from_static("theme=dark; Path=/"),
        ];
        jar.set_cookies(&mut headers.iter(), &origin);

        let next = url::Url::parse("http://localhost/profile").expect("test URL should parse");
        let header = jar.cookies(&next).expect("cookies should be replayed");
        let header = header.to_str().expect("cookie header should be ASCII");
        assert!(header.contains("session=abc123"));
        assert!(header.contains("theme=dark"));

        let other = url::Url::parse("http://example.com/").expect("test URL should parse");
        assert!(jar.cookies(&other).is_none());
    }

    #[test]
    fn public_suffix_domain_is_rejected() {
        let jar = Jar::new();
        let origin = url::Url::parse("http://shop.example.co.uk/").expect("test URL should parse");
        let headers = [
            HeaderValue::from_static("tracker=1; Domain=co.uk; Path=/"),
            HeaderValue::from_static("cart=2; Domain=example.co.uk; Path=/"),
        ];
        jar.set_cookies(&mut headers.iter(), &origin);

        let sibling = url::Url::parse("http://blog.example.co.uk/").expect("test URL should parse");
        let header = jar.cookies(&sibling).expect("registrable-domain cookie is shared");
        assert_eq!(header.to_str().ok(), Some("cart=2"));

        let stranger = url::Url::parse("http://other.co.uk/").expect("test URL should parse");
        assert!(jar.cookies(&stranger).is_none());
    }
}
