//! HTTP method setters
//!
//! Each setter records the method and target URL. The URL is kept as given
//! and only parsed when the request executes.

use crate::builder::core::{Method, RequestBuilder};

impl RequestBuilder {
    fn target(&mut self, method: Method, url: &str) -> &mut Self {
        self.method = Some(method);
        self.url = url.to_string();
        if self.debug {
            log::debug!("{method} {url}");
        }
        self
    }

    /// Target a GET request at `url`
    ///
    /// # Examples
    /// ```no_run
    /// let (_, body) = chainreq::new()
    ///     .get("http://localhost:8080/search")
    ///     .query("query=bicycle&size=50x50")
    ///     .end()
    ///     .unwrap();
    /// ```
    pub fn get(&mut self, url: &str) -> &mut Self {
        self.target(Method::Get, url)
    }

    /// Target a POST request at `url`
    pub fn post(&mut self, url: &str) -> &mut Self {
        self.target(Method::Post, url)
    }

    /// Target a PUT request at `url`
    pub fn put(&mut self, url: &str) -> &mut Self {
        self.target(Method::Put, url)
    }

    /// Target a DELETE request at `url`; DELETE requests are sent without a body
    pub fn delete(&mut self, url: &str) -> &mut Self {
        self.target(Method::Delete, url)
    }

    /// Target a HEAD request at `url`
    pub fn head(&mut self, url: &str) -> &mut Self {
        self.target(Method::Head, url)
    }

    /// Target a PATCH request at `url`
    pub fn patch(&mut self, url: &str) -> &mut Self {
        self.target(Method::Patch, url)
    }
}
