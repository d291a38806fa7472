//! Query parameters

use chainreq_client::error;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::builder::core::RequestBuilder;
use crate::sniff::{self, FormMode};

impl RequestBuilder {
    fn add_query_object(&mut self, object: Map<String, Value>) {
        for (key, value) in object {
            match sniff::query_values(&value) {
                Some(values) => self
                    .query
                    .extend(values.into_iter().map(|v| (key.clone(), v))),
                None => self.record_error(error::builder(format!(
                    "query parameter {key:?} has unsupported value {value}"
                ))),
            }
        }
    }

    /// Add query parameters from a JSON object or a query string
    ///
    /// Parameters are added to any already on the URL; nothing is replaced.
    /// Input that is neither is recorded as a construction error.
    ///
    /// # Examples
    /// ```no_run
    /// let result = chainreq::new()
    ///     .get("http://localhost:8080/search")
    ///     .query("query=bicycle&size=50x50")
    ///     .query(r#"{"weight":"20kg"}"#)
    ///     .end();
    /// ```
    pub fn query(&mut self, content: &str) -> &mut Self {
        match sniff::json_object(content) {
            Ok(object) => self.add_query_object(object),
            Err(_) => match sniff::form_pairs(content, FormMode::Query) {
                Ok(pairs) => self.query.extend(pairs),
                Err(e) => self.record_error(error::builder(format!("invalid query {content:?}: {e}"))),
            },
        }
        self
    }

    /// Add the top-level fields of `content` as query parameters
    pub fn query_struct<T: Serialize + ?Sized>(&mut self, content: &T) -> &mut Self {
        match serde_json::to_value(content) {
            Ok(Value::Object(object)) => self.add_query_object(object),
            Ok(other) => self.record_error(error::builder(format!(
                "query_struct expects a value that serializes to a JSON object, got {other}"
            ))),
            Err(e) => self.record_error(error::builder(e)),
        }
        self
    }

    /// Add one query parameter verbatim
    ///
    /// Useful for values a query string cannot carry, such as `fields=f1;f2`.
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}
