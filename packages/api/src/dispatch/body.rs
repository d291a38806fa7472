//! Body resolution

use bytes::Bytes;
use chainreq_client::{HttpError, error};

use crate::builder::Method;
use crate::builder::headers::{FORM, JSON, media_type_is};
use crate::data::{self, StructuredData};

/// Body candidates accumulated by the builder
pub struct BodyParts<'a> {
    pub content_type: &'a str,
    pub data: &'a StructuredData,
    pub raw_bytes: &'a Bytes,
    pub raw_string: &'a str,
}

/// Pick and encode the body sent with `method`
///
/// POST, PUT and PATCH use, in order: the structured data as JSON when the
/// content type is JSON and there is data; the structured data as a form when
/// the content type is form-urlencoded; the raw bytes if any; otherwise the
/// raw string, even when empty. Other methods never carry a body.
///
/// # Errors
///
/// Returns a builder error if the structured data cannot be encoded.
pub fn resolve_body(method: Method, parts: &BodyParts<'_>) -> Result<Option<Bytes>, HttpError> {
    if !method.has_body() {
        return Ok(None);
    }

    let body = if media_type_is(parts.content_type, JSON) && !parts.data.is_empty() {
        Bytes::from(data::encode_json(parts.data).map_err(error::builder)?)
    } else if media_type_is(parts.content_type, FORM) {
        Bytes::from(data::encode_form(parts.data).map_err(error::builder)?)
    } else if !parts.raw_bytes.is_empty() {
        parts.raw_bytes.clone()
    } else {
        Bytes::copy_from_slice(parts.raw_string.as_bytes())
    };
    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataValue;

    fn data() -> StructuredData {
        StructuredData::from([
            ("b".to_string(), DataValue::List(vec!["2".into(), "1".into()])),
            ("a".to_string(), DataValue::Text("x".into())),
        ])
    }

    fn resolve(method: Method, content_type: &str, data: &StructuredData, raw_bytes: &[u8], raw_string: &str) -> Option<Bytes> {
        let raw_bytes = Bytes::copy_from_slice(raw_bytes);
        resolve_body(
            method,
            &BodyParts {
                content_type,
                data,
                raw_bytes: &raw_bytes,
                raw_string,
            },
        )
        .expect("body should resolve")
    }

    #[test]
    fn bodyless_methods_send_nothing() {
        for method in [Method::Get, Method::Head, Method::Delete] {
            assert_eq!(resolve(method, JSON, &data(), b"raw", "raw"), None);
        }
    }

    #[test]
    fn json_wins_when_data_present() {
        let body = resolve(Method::Post, "application/json; charset=utf-8", &data(), b"raw", "raw");
        assert_eq!(body.as_deref(), Some(&br#"{"a":"x","b":["2","1"]}"#[..]));
    }

    #[test]
    fn empty_json_data_falls_back_to_raw() {
        let empty = StructuredData::new();
        assert_eq!(resolve(Method::Put, JSON, &empty, b"bytes", "text").as_deref(), Some(&b"bytes"[..]));
        assert_eq!(resolve(Method::Put, JSON, &empty, b"", "text").as_deref(), Some(&b"text"[..]));
        assert_eq!(resolve(Method::Put, JSON, &empty, b"", "").as_deref(), Some(&b""[..]));
    }

    #[test]
    fn form_content_type_encodes_data() {
        let body = resolve(Method::Patch, FORM, &data(), b"raw", "raw");
        assert_eq!(body.as_deref(), Some(&b"a=x&b=2&b=1"[..]));
    }

    #[test]
    fn other_content_types_send_raw() {
        let body = resolve(Method::Post, "text/plain", &data(), b"", "hello");
        assert_eq!(body.as_deref(), Some(&b"hello"[..]));
    }
}
