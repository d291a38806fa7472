//! Structured body data
//!
//! Key/value pairs accumulated from JSON objects, form strings and
//! serializable structs. The same map is rendered as a JSON object or as a
//! form-urlencoded string depending on the request's content type.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

/// One value of the structured body
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Text(String),
    /// Values for a key that appeared more than once
    List(Vec<String>),
    /// JSON number with its literal text preserved
    Number(Number),
    /// Any other JSON value: objects, arrays, booleans, null
    Json(Value),
}

/// Structured body keyed in sorted order
pub type StructuredData = BTreeMap<String, DataValue>;

impl DataValue {
    /// Classify a decoded JSON value
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(number) => Self::Number(number),
            other => Self::Json(other),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::List(values) => Value::Array(values.iter().cloned().map(Value::String).collect()),
            Self::Number(number) => Value::Number(number.clone()),
            Self::Json(value) => value.clone(),
        }
    }

    /// Values this entry contributes to a form body, or `None` if it has no
    /// form representation
    #[must_use]
    pub fn form_values(&self) -> Option<Vec<String>> {
        match self {
            Self::Text(text) => Some(vec![text.clone()]),
            Self::List(values) => Some(values.clone()),
            Self::Number(number) => Some(vec![number.to_string()]),
            Self::Json(_) => None,
        }
    }

    /// Merge newly parsed form values ahead of the existing entry
    #[must_use]
    pub fn widen(self, mut incoming: Vec<String>) -> Self {
        match self {
            Self::Text(old) => incoming.push(old),
            Self::List(old) => incoming.extend(old),
            Self::Number(old) => incoming.push(old.to_string()),
            Self::Json(_) => {}
        }
        Self::from_form(incoming)
    }

    /// A single form value stays text; repeated values become a list
    #[must_use]
    pub fn from_form(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            Self::Text(values.remove(0))
        } else {
            Self::List(values)
        }
    }
}

/// Render the data as a JSON object
///
/// # Errors
///
/// Returns the serializer error; in practice rendering a `Value` does not fail.
pub fn encode_json(data: &StructuredData) -> serde_json::Result<Vec<u8>> {
    let object: Map<String, Value> = data
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();
    serde_json::to_vec(&Value::Object(object))
}

/// Render the data as `application/x-www-form-urlencoded`
///
/// Lists become repeated keys and numbers keep their literal text. Values
/// with no form representation are skipped.
///
/// # Errors
///
/// Returns the serializer error from `serde_urlencoded`.
pub fn encode_form(data: &StructuredData) -> Result<String, serde_urlencoded::ser::Error> {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(data.len());
    for (key, value) in data {
        match value.form_values() {
            Some(values) => pairs.extend(values.into_iter().map(|v| (key.as_str(), v))),
            None => log::warn!("skipping {key:?}: nested JSON values have no form encoding"),
        }
    }
    serde_urlencoded::to_string(&pairs)
}
