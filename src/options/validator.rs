// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Allowed-value validation primitive.
//!
//! Works on raw key -> list tables and knows nothing about adapters, so any
//! component needing "option X takes one of these values" can reuse it.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the key is declared (`UnknownOption`)
//! 2. its entry is a list (`MalformedSchemaEntry`)
//! 3. the value is in that list under strict `Value` equality (`DisallowedValue`)
//!
//! State is only written after all three pass.

use serde_json::{Map, Value};

use crate::errors::OptionsError;

/// Validates and records single option writes against an allowed-value table.
pub struct AllowedValuesValidator;

impl AllowedValuesValidator {
    /// Check that `value` is allowed for `key` without touching any state.
    pub fn check(schema: &Map<String, Value>, key: &str, value: &Value) -> Result<(), OptionsError> {
        let entry = schema.get(key).ok_or_else(|| OptionsError::UnknownOption {
            key: key.to_string(),
            available: schema.keys().cloned().collect(),
        })?;

        let allowed = entry
            .as_array()
            .ok_or_else(|| OptionsError::MalformedSchemaEntry {
                key: key.to_string(),
            })?;

        // `Value` equality is strict: 1, 1.0 and "1" are three different candidates.
        if !allowed.iter().any(|candidate| candidate == value) {
            return Err(OptionsError::DisallowedValue {
                key: key.to_string(),
                value: value.clone(),
                allowed: allowed.clone(),
            });
        }

        Ok(())
    }

    /// Validate `value` for `key` and store it in `state`, replacing any previous
    /// value for that key. On error `state` is left untouched.
    pub fn set_option(
        schema: &Map<String, Value>,
        state: &mut Map<String, Value>,
        key: &str,
        value: Value,
    ) -> Result<(), OptionsError> {
        Self::check(schema, key, &value)?;
        state.insert(key.to_string(), value);
        Ok(())
    }
}
