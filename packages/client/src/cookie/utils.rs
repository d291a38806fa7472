//! Cookie header utilities

use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};

use super::core::{Cookie, CookieStore};

/// Append `name=value` pairs to the request's `Cookie` header.
///
/// Existing `Cookie` values are kept; pairs are joined with `"; "`.
pub fn append_cookie_pairs<'a>(headers: &mut HeaderMap, pairs: impl IntoIterator<Item = &'a str>) {
    let mut joined = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_default();

    for pair in pairs {
        if pair.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str("; ");
        }
        joined.push_str(pair);
    }

    if joined.is_empty() {
        return;
    }
    match HeaderValue::from_str(&joined) {
        Ok(value) => {
            headers.insert(COOKIE, value);
        }
        Err(e) => tracing::warn!(target: "chainreq_client::cookie", "dropping invalid Cookie header: {e}"),
    }
}

/// Format a cookie record as the `name=value` pair sent in a `Cookie` header
#[must_use]
pub fn request_pair(cookie: &Cookie) -> String {
    format!("{}={}", cookie.name(), cookie.value())
}

/// Add the jar's cookies for `url` to the request headers
pub(crate) fn add_cookie_header(headers: &mut HeaderMap, cookie_store: &dyn CookieStore, url: &url::Url) {
    if let Some(header) = cookie_store.cookies(url) {
        if let Ok(value) = header.to_str() {
            append_cookie_pairs(headers, [value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_existing_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("a=1"));

        let b = Cookie::new("b", "2");
        let c = Cookie::build(("c", "3")).path("/").secure(true).build();
        let pairs = [request_pair(&b), request_pair(&c)];
        append_cookie_pairs(&mut headers, pairs.iter().map(String::as_str));

        assert_eq!(
            headers.get(COOKIE).and_then(|v| v.to_str().ok()),
            Some("a=1; b=2; c=3")
        );
    }
}
