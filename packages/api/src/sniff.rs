//! Content sniffing
//!
//! String input to the builder is classified by trying typed parses in
//! order: a JSON object first, then form/query pairs. Each attempt returns a
//! `Result` so callers decide what a failure means.

use serde_json::{Map, Value};
use thiserror::Error;

/// How strictly form segments are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Every non-empty segment must be a `key=value` pair
    Body,
    /// Bare keys are accepted with an empty value, as in URL query strings
    Query,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    #[error("invalid semicolon separator in query")]
    Semicolon,
    #[error("segment {0:?} is not a key=value pair")]
    MissingValue(String),
}

/// Decode the leading JSON object of `content`
///
/// Trailing input after the first complete value is ignored.
///
/// # Errors
///
/// Returns the JSON error if the input does not start with an object.
pub fn json_object(content: &str) -> serde_json::Result<Map<String, Value>> {
    let mut stream = serde_json::Deserializer::from_str(content).into_iter::<Map<String, Value>>();
    match stream.next() {
        Some(result) => result,
        None => serde_json::from_str::<Map<String, Value>>(content),
    }
}

fn check_escapes(segment: &str) -> Result<(), FormError> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(FormError::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Parse `content` as `&`-separated form pairs, decoding `+` and
/// percent-escapes. Pairs keep their input order.
///
/// # Errors
///
/// Fails on `;` separators, malformed percent-escapes, and (in
/// [`FormMode::Body`]) segments without `=`.
pub fn form_pairs(content: &str, mode: FormMode) -> Result<Vec<(String, String)>, FormError> {
    let mut pairs = Vec::new();
    for segment in content.split('&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(';') {
            return Err(FormError::Semicolon);
        }
        if mode == FormMode::Body && !segment.contains('=') {
            return Err(FormError::MissingValue(segment.to_string()));
        }
        check_escapes(segment)?;
        pairs.extend(
            url::form_urlencoded::parse(segment.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned())),
        );
    }
    Ok(pairs)
}

/// Group pairs by key, preserving first-seen key order and value order
#[must_use]
pub fn group_pairs(pairs: Vec<(String, String)>) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in pairs {
        match grouped.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => grouped.push((key, vec![value])),
        }
    }
    grouped
}

/// Flatten a JSON value used as a query parameter into strings
///
/// Strings, numbers and booleans give one value and `null` gives an empty
/// one; arrays of those give one value per element. Objects have no query
/// representation.
#[must_use]
pub fn query_values(value: &Value) -> Option<Vec<String>> {
    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some(String::new()),
            _ => None,
        }
    }

    match value {
        Value::Array(items) => items.iter().map(scalar).collect(),
        other => scalar(other).map(|v| vec![v]),
    }
}
