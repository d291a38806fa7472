//! Header manipulation utilities for redirects

use http::header::{AUTHORIZATION, COOKIE, PROXY_AUTHORIZATION, WWW_AUTHENTICATE};
use http::{HeaderMap, HeaderValue};
use url::Url;

/// Remove sensitive headers when redirecting across different hosts/ports
pub fn remove_sensitive_headers(headers: &mut HeaderMap, next: &Url, previous: &Url) {
    let cross_host = next.host_str() != previous.host_str()
        || next.port_or_known_default() != previous.port_or_known_default();
    if cross_host {
        headers.remove(AUTHORIZATION);
        headers.remove(COOKIE);
        headers.remove("cookie2");
        headers.remove(PROXY_AUTHORIZATION);
        headers.remove(WWW_AUTHENTICATE);
    }
}

/// Create a referer header value from previous URL, handling HTTPS->HTTP downgrade
#[must_use]
pub fn make_referer(next: &Url, previous: &Url) -> Option<HeaderValue> {
    if next.scheme() == "http" && previous.scheme() == "https" {
        return None;
    }

    let mut referer = previous.clone();
    let _ = referer.set_username("");
    let _ = referer.set_password(None);
    referer.set_fragment(None);
    referer.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use http::header::ACCEPT;

    use super::*;

    #[test]
    fn strips_credentials_only_across_hosts() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("let me in"));
        headers.insert(COOKIE, HeaderValue::from_static("foo=bar"));

        let previous = Url::parse("http://initial-domain.com/path").expect("test URL should parse");
        let same = Url::parse("http://initial-domain.com/new_path").expect("test URL should parse");
        let mut kept = headers.clone();
        remove_sensitive_headers(&mut kept, &same, &previous);
        assert_eq!(kept, headers);

        let other = Url::parse("http://other-domain.com/path").expect("test URL should parse");
        remove_sensitive_headers(&mut headers, &other, &previous);
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTHORIZATION));
        assert!(!headers.contains_key(COOKIE));
    }

    #[test]
    fn referer_dropped_on_https_downgrade() {
        let https = Url::parse("https://user:pw@secure.com/a#frag").expect("test URL should parse");
        let http = Url::parse("http://plain.com/").expect("test URL should parse");
        assert!(make_referer(&http, &https).is_none());

        let referer = make_referer(&https, &https).expect("same-scheme referer");
        assert_eq!(referer, "https://secure.com/a");
    }
}
