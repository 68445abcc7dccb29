//! Request input normalization.
//!
//! A read-style request carries its parameters in the query string, a
//! write-style request in a JSON body. Both shapes convert into the same
//! ordered [`InputMap`].

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw input of one request, before normalization.
#[derive(Debug, Clone)]
pub enum RequestInput {
    /// Decoded query-string pairs, in order of appearance.
    Query(Vec<(String, String)>),
    /// Raw request body, expected to hold a JSON object.
    Body(Bytes),
}

impl RequestInput {
    /// Normalize into an input mapping.
    pub fn into_input_map(self) -> InputMap {
        match self {
            Self::Query(pairs) => InputMap::from_query(pairs),
            Self::Body(body) => InputMap::from_body(&body),
        }
    }
}

/// Ordered, string-keyed input of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputMap(BTreeMap<String, Value>);

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from query pairs. A repeated key keeps its last value.
    pub fn from_query<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        )
    }

    /// Build from a JSON body.
    ///
    /// An empty body, invalid JSON or a document that is not an object all
    /// produce an empty mapping.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map.into_iter().collect()),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string value. Non-string values yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Get a value rendered as text, or `default` when absent or null.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The mapping as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for InputMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
