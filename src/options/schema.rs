// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::errors::OptionsError;

/// Allowed-value table of an options container: option key -> ordered list of
/// the values that key may take.
///
/// A schema is checked once, when built. Non-object input, an empty table or an
/// empty key yields [`OptionsError::InvalidSchema`]; an entry that is not a list
/// yields [`OptionsError::MalformedSchemaEntry`]. Both indicate a defective
/// options type rather than bad user input.
///
/// # Example
/// ```
/// use conversio::options::OptionsSchema;
/// use serde_json::json;
///
/// let schema = OptionsSchema::from_value(json!({ "case": ["upper", "lower"] })).unwrap();
/// assert!(schema.contains_key("case"));
/// assert_eq!(schema.allowed("case").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsSchema(Map<String, Value>);

impl OptionsSchema {
    /// Build a schema from a JSON object of key -> array of allowed values.
    pub fn from_value(value: Value) -> Result<Self, OptionsError> {
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(OptionsError::InvalidSchema {
                    reason: format!("expected a mapping, got {}", value_kind(&other)),
                })
            }
        };

        if entries.is_empty() {
            return Err(OptionsError::InvalidSchema {
                reason: "no options declared".to_string(),
            });
        }

        for (key, allowed) in &entries {
            if key.is_empty() {
                return Err(OptionsError::InvalidSchema {
                    reason: "empty option key".to_string(),
                });
            }
            if !allowed.is_array() {
                return Err(OptionsError::MalformedSchemaEntry { key: key.clone() });
            }
        }

        Ok(Self(entries))
    }

    /// Build a schema from `(key, allowed values)` pairs, keeping their order.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (K, Vec<Value>)>,
        K: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, allowed)| (key.into(), Value::Array(allowed)))
            .collect::<Map<String, Value>>();
        Self::from_value(Value::Object(map))
    }

    /// Allowed values for `key`, if the key is declared.
    pub fn allowed(&self, key: &str) -> Option<&[Value]> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw table, as consumed by [`AllowedValuesValidator`](super::AllowedValuesValidator).
    pub fn entries(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Short JSON type name of a value, used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
