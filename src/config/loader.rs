// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::config::consts::OPTIONS_KEY;
use crate::errors::ConfigError;

/// Settings key naming the adapter to install.
const ADAPTER_KEY: &str = "adapter";

/// Configuration of a single conversion facade.
///
/// Typically loaded from a YAML file and turned into bulk settings with
/// [`to_settings`](Self::to_settings).
///
/// # Fields
/// * `adapter` - registered type path (or alias) of the conversion algorithm
/// * `options` - option values for the algorithm's options type
///
/// # Example
/// ```yaml
/// adapter: conversio::adapter::convert_nothing::ConvertNothing
/// options:
///   prop1: 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default)]
    pub adapter: Option<String>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
}

impl ConversionConfig {
    /// Bulk settings with the adapter ahead of its options, the order in
    /// which the facade can resolve them.
    pub fn to_settings(&self) -> Map<String, Value> {
        let mut settings = Map::new();
        if let Some(adapter) = &self.adapter {
            settings.insert(ADAPTER_KEY.to_string(), Value::String(adapter.clone()));
        }
        if let Some(options) = &self.options {
            settings.insert(OPTIONS_KEY.to_string(), Value::Object(options.clone()));
        }
        settings
    }
}

/// Parse a config from YAML text
pub fn parse_config(yaml: &str) -> Result<ConversionConfig, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConversionConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
