//! Request dispatch
//!
//! Turns the state accumulated by a [`RequestBuilder`] into one outbound
//! request, sends it through the builder's client and hands back the
//! response with its fully read body.

pub mod body;
pub mod query;

use std::mem;

use bytes::Bytes;
use chainreq_client::cookie::{append_cookie_pairs, request_pair};
use chainreq_client::{
    DUMP_PREFIX, ExecuteOptions, HttpClient, HttpError, HttpRequest, HttpResponse, Url, dump_request,
    dump_response, error,
};
use http::header::AUTHORIZATION;

use crate::builder::RequestBuilder;
use crate::builder::auth::basic_auth_header;
use crate::builder::headers::JSON;
use crate::error::Errors;
use body::{BodyParts, resolve_body};

impl RequestBuilder {
    /// Build the outbound request from accumulated state
    fn build_request(&mut self) -> Result<HttpRequest, HttpError> {
        let method = self
            .method
            .ok_or_else(|| error::builder("no HTTP method set; call get, post, put, delete, head or patch"))?;
        let mut url = Url::parse(&self.url)
            .map_err(|e| error::invalid_url(format!("invalid URL {:?}: {e}", self.url)))?;

        self.default_content_type(JSON);
        let body = resolve_body(
            method,
            &BodyParts {
                content_type: self.content_type_value().unwrap_or(JSON),
                data: &self.data,
                raw_bytes: &self.raw_bytes,
                raw_string: &self.raw_string,
            },
        )?;

        query::merge_query(&mut url, &self.query).map_err(error::builder)?;

        let mut request = HttpRequest::new(method.into(), url).with_headers(self.headers.clone());
        if let Some(body) = body {
            request = request.body_bytes(body);
        }
        if let Some((username, password)) = &self.basic_auth {
            if let Some(value) = basic_auth_header(username, password) {
                request.headers_mut().insert(AUTHORIZATION, value);
            }
        }
        if !self.cookies.is_empty() {
            let pairs: Vec<String> = self.cookies.iter().map(request_pair).collect();
            append_cookie_pairs(request.headers_mut(), pairs.iter().map(String::as_str));
        }
        Ok(request)
    }

    /// The explicit client, or the default one created on first use
    fn resolve_client(&mut self) -> HttpClient {
        self.client.get_or_insert_with(HttpClient::new).clone()
    }

    fn dump(&self, message: &str) {
        self.logger.log(&format!("{DUMP_PREFIX}{message}"));
    }

    fn dispatch(&mut self) -> Result<HttpResponse, Errors> {
        let pending = mem::take(&mut self.errors);
        if !pending.is_empty() {
            if self.debug {
                log::debug!("not sending request: {} construction error(s)", pending.len());
            }
            return Err(Errors::new(pending));
        }

        let request = self.build_request()?;
        let client = self.resolve_client();
        let options = ExecuteOptions {
            transport: self.transport.clone(),
            redirect_policy: self.redirect_policy.clone(),
        };

        if self.debug {
            self.dump(&format!("HTTP Request: {}", dump_request(&request)));
        }

        match client.execute(request, &options) {
            Ok(response) => {
                if self.debug {
                    self.dump(&format!("HTTP Response: {}", dump_response(&response)));
                }
                Ok(response)
            }
            Err(e) => {
                if self.debug {
                    self.dump(&format!("Error: {e}"));
                }
                Err(Errors::from(e))
            }
        }
    }

    /// Send the request and return the response with its body as bytes
    ///
    /// If any construction error was recorded, no request is sent and every
    /// recorded error is returned. Either way the error list is cleared.
    /// A response of any status is `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the recorded construction errors, or the single transport or
    /// redirect error that ended the exchange.
    pub fn end_bytes(&mut self) -> Result<(HttpResponse, Bytes), Errors> {
        let response = self.dispatch()?;
        let body = response.body().clone();
        Ok((response, body))
    }

    /// Like [`end_bytes`](Self::end_bytes), with the body decoded as lossy UTF-8
    ///
    /// # Errors
    ///
    /// See [`end_bytes`](Self::end_bytes).
    pub fn end(&mut self) -> Result<(HttpResponse, String), Errors> {
        let (response, body) = self.end_bytes()?;
        let text = String::from_utf8_lossy(&body).into_owned();
        Ok((response, text))
    }

    /// Like [`end_bytes`](Self::end_bytes), also calling `callback` with a
    /// copy of the response, the body and the (empty) error list before
    /// returning. The callback is not called when the request fails.
    ///
    /// # Errors
    ///
    /// See [`end_bytes`](Self::end_bytes).
    pub fn end_bytes_with<F>(&mut self, callback: F) -> Result<(HttpResponse, Bytes), Errors>
    where
        F: FnOnce(HttpResponse, &[u8], &[HttpError]),
    {
        let (response, body) = self.end_bytes()?;
        callback(response.clone(), &body, &[]);
        Ok((response, body))
    }

    /// Like [`end`](Self::end), also calling `callback` before returning
    ///
    /// # Examples
    /// ```no_run
    /// let _ = chainreq::new()
    ///     .get("http://localhost:8080/")
    ///     .end_with(|response, body, _errors| {
    ///         println!("{} ({} bytes)", response.status(), body.len());
    ///     });
    /// ```
    ///
    /// # Errors
    ///
    /// See [`end_bytes`](Self::end_bytes).
    pub fn end_with<F>(&mut self, callback: F) -> Result<(HttpResponse, String), Errors>
    where
        F: FnOnce(HttpResponse, &str, &[HttpError]),
    {
        let (response, body) = self.end()?;
        callback(response.clone(), &body, &[]);
        Ok((response, body))
    }
}

#[cfg(test)]
mod tests {
    use http::header::{CONTENT_TYPE, COOKIE};

    use super::*;

    #[test]
    fn missing_method_is_a_construction_error() {
        let mut builder = RequestBuilder::new();
        let err = builder.build_request().expect_err("no method set");
        assert!(err.is_builder());
    }

    #[test]
    fn unparsable_url_is_a_construction_error() {
        let mut builder = RequestBuilder::new();
        builder.get("not a url");
        let err = builder.build_request().expect_err("URL does not parse");
        assert!(err.is_builder());
    }

    #[test]
    fn request_carries_auth_cookies_and_default_json() {
        let mut builder = RequestBuilder::new();
        builder
            .post("http://a.test/users?x=1")
            .set_header("Cookie", "theme=dark")
            .set_basic_auth("user", "pass")
            .add_cookie(chainreq_client::Cookie::new("session", "abc"))
            .send_map_string(r#"{"Name":"Jerry"}"#)
            .param("b", "2");

        let request = builder.build_request().expect("request should build");
        assert_eq!(request.url().as_str(), "http://a.test/users?b=2&x=1");
        assert_eq!(request.headers()[CONTENT_TYPE], JSON);
        assert_eq!(request.headers()[AUTHORIZATION], "Basic dXNlcjpwYXNz");
        assert_eq!(request.headers()[COOKIE], "theme=dark; session=abc");
        assert_eq!(request.body().map(|b| &b[..]), Some(&br#"{"Name":"Jerry"}"#[..]));
    }

    #[test]
    fn delete_never_carries_a_body() {
        let mut builder = RequestBuilder::new();
        builder.delete("http://a.test/item").send_raw_string("ignored");
        let request = builder.build_request().expect("request should build");
        assert!(request.body().is_none());
    }
}
