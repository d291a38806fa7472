//! Request cookies

use chainreq_client::Cookie;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Attach a cookie to this request
    ///
    /// Cookies are sent in the order they were added; duplicates are kept.
    pub fn add_cookie(&mut self, cookie: Cookie) -> &mut Self {
        self.cookies.push(cookie);
        self
    }

    pub fn add_cookies<I>(&mut self, cookies: I) -> &mut Self
    where
        I: IntoIterator<Item = Cookie>,
    {
        self.cookies.extend(cookies);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookies_append_without_dedup() {
        let mut builder = RequestBuilder::new();
        builder
            .add_cookie(Cookie::new("a", "1"))
            .add_cookies([Cookie::new("a", "2"), Cookie::new("b", "3")]);
        let names: Vec<_> = builder.cookies.iter().map(|c| (c.name(), c.value())).collect();
        assert_eq!(names, vec![("a", "1"), ("a", "2"), ("b", "3")]);
    }
}
