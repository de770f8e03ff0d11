// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the options validation layer.
//!
//! `UnknownOption`, `DisallowedValue` and `OptionNotSet` are caller mistakes.
//! `InvalidSchema` and `MalformedSchemaEntry` point at a defective options type.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a schema or reading/writing validated options.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// The schema is not a non-empty mapping of non-empty keys.
    #[error("Options schema is not a hash table: {reason}")]
    InvalidSchema { reason: String },

    /// The key is not part of the schema.
    #[error(
        "Option \"{key}\" does not exist; available options are ({})",
        quoted_list(.available)
    )]
    UnknownOption { key: String, available: Vec<String> },

    /// The schema entry for the key is not a list of allowed values.
    #[error("Option \"{key}\" is not a valid list of allowed values")]
    MalformedSchemaEntry { key: String },

    /// The value is not one of the allowed values for the key.
    #[error(
        "Option \"{key}\" can not be set to value {value}; allowed values are ({})",
        value_list(.allowed)
    )]
    DisallowedValue {
        key: String,
        value: Value,
        allowed: Vec<Value>,
    },

    /// The key is known but has no value yet.
    #[error("Option \"{key}\" has not been set")]
    OptionNotSet { key: String },
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

// Values print as JSON so `1` and `"1"` stay distinguishable.
fn value_list(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
