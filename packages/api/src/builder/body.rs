//! Request body accumulation
//!
//! Structured data collected here is rendered as JSON or as a form body at
//! execution, depending on the content type. Raw strings and bytes are sent
//! as-is when no structured rendering applies.

use bytes::Bytes;
use chainreq_client::error;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::builder::core::RequestBuilder;
use crate::builder::headers::{FORM, OCTET_STREAM};
use crate::data::DataValue;
use crate::sniff::{self, FormMode};

impl RequestBuilder {
    fn merge_json(&mut self, object: Map<String, Value>) {
        for (key, value) in object {
            self.data.insert(key, DataValue::from_json(value));
        }
    }

    fn merge_form(&mut self, pairs: Vec<(String, String)>) {
        for (key, values) in sniff::group_pairs(pairs) {
            let merged = match self.data.remove(&key) {
                Some(existing) => existing.widen(values),
                None => DataValue::from_form(values),
            };
            self.data.insert(key, merged);
        }
    }

    /// Add body content from a JSON object, a form string or plain text
    ///
    /// The input is tried as a JSON object first; its keys overwrite earlier
    /// values and numbers keep their literal text. Otherwise, if every
    /// segment is a `key=value` pair, it is merged as form data: a key that
    /// already exists becomes a list with the new values first, and the
    /// content type defaults to `application/x-www-form-urlencoded`. Anything
    /// else becomes the raw string body.
    ///
    /// # Examples
    /// ```no_run
    /// let result = chainreq::new()
    ///     .post("http://localhost:8080/search")
    ///     .send_map_string("query=bicycle&size=50x50")
    ///     .send_map_string(r#"{"wheel":"4"}"#)
    ///     .end();
    /// ```
    pub fn send_map_string(&mut self, content: &str) -> &mut Self {
        match sniff::json_object(content) {
            Ok(object) => self.merge_json(object),
            Err(json_err) => match sniff::form_pairs(content, FormMode::Body) {
                Ok(pairs) => {
                    self.merge_form(pairs);
                    self.default_content_type(FORM);
                }
                Err(form_err) => {
                    if self.debug {
                        log::debug!("body is neither JSON ({json_err}) nor form ({form_err}); sending raw");
                    }
                    self.raw_string = content.to_string();
                }
            },
        }
        self
    }

    /// Serialize `content` and merge its top-level fields into the body
    ///
    /// `content` must serialize to a JSON object; anything else, or a
    /// serialization failure, is recorded as a construction error.
    pub fn send_struct<T: Serialize + ?Sized>(&mut self, content: &T) -> &mut Self {
        match serde_json::to_value(content) {
            Ok(Value::Object(object)) => self.merge_json(object),
            Ok(other) => self.record_error(error::builder(format!(
                "send_struct expects a value that serializes to a JSON object, got {other}"
            ))),
            Err(e) => self.record_error(error::builder(e)),
        }
        self
    }

    /// Use `content` verbatim as the body
    pub fn send_raw_string(&mut self, content: &str) -> &mut Self {
        self.raw_string = content.to_string();
        self
    }

    /// Use `content` verbatim as the body; the content type defaults to
    /// `application/octet-stream`
    pub fn send_raw_bytes(&mut self, content: impl Into<Bytes>) -> &mut Self {
        self.default_content_type(OCTET_STREAM);
        self.raw_bytes = content.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;
    use serde::Serialize;

    use super::*;

    #[test]
    fn json_keys_overwrite() {
        let mut builder = RequestBuilder::new();
        builder
            .send_map_string(r#"{"name":"Tom","age":7}"#)
            .send_map_string(r#"{"name":"Jerry"}"#);
        assert_eq!(builder.data()["name"], DataValue::Text("Jerry".into()));
        assert!(matches!(&builder.data()["age"], DataValue::Number(n) if n.to_string() == "7"));
        assert!(!builder.headers().contains_key(CONTENT_TYPE));
    }

    #[test]
    fn form_keys_widen_newest_first() {
        let mut builder = RequestBuilder::new();
        builder.send_map_string("key=a").send_map_string("key=b");
        assert_eq!(
            builder.data()["key"],
            DataValue::List(vec!["b".into(), "a".into()])
        );
        assert_eq!(builder.headers()[CONTENT_TYPE], FORM);
    }

    #[test]
    fn form_does_not_override_chosen_content_type() {
        let mut builder = RequestBuilder::new();
        builder.content_type("json").send_map_string("a=1");
        assert_eq!(builder.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(builder.data()["a"], DataValue::Text("1".into()));
    }

    #[test]
    fn unparsable_content_becomes_raw_string() {
        let mut builder = RequestBuilder::new();
        builder.send_map_string("just some text");
        assert!(builder.data().is_empty());
        assert_eq!(builder.raw_string, "just some text");
    }

    #[test]
    fn send_struct_merges_fields() {
        #[derive(Serialize)]
        struct Versions {
            chrome: &'static str,
            build: u32,
        }

        let mut builder = RequestBuilder::new();
        builder
            .send_struct(&Versions { chrome: "37.0", build: 2041 })
            .send_struct(&["not", "an", "object"]);
        assert_eq!(builder.data()["chrome"], DataValue::Text("37.0".into()));
        assert!(matches!(builder.data()["build"], DataValue::Number(_)));
        assert_eq!(builder.errors().len(), 1);
    }

    #[test]
    fn raw_bytes_default_to_octet_stream() {
        let mut builder = RequestBuilder::new();
        builder.send_raw_bytes(vec![0_u8, 1, 2]);
        assert_eq!(builder.headers()[CONTENT_TYPE], OCTET_STREAM);
        assert_eq!(&builder.raw_bytes[..], &[0_u8, 1, 2]);
    }
}
