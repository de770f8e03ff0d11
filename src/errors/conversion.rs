// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for adapter resolution, options binding and conversion.

use thiserror::Error;

use super::OptionsError;

/// Errors surfaced by the conversion facade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// No adapter is set, or a named adapter could not be located.
    #[error("Unable to load adapter; {}", missing_adapter(.name))]
    AdapterNotFound { name: Option<String> },

    /// The resolved or supplied value is not a conversion algorithm.
    #[error("Expected a conversion algorithm or its name; received \"{received}\"")]
    InvalidAdapter { received: String },

    /// Nothing is registered at the conventional options path of the adapter.
    #[error("Options type \"{path}\" for the current adapter does not exist")]
    OptionsClassNotFound { path: String },

    /// The options path resolved to something that is not an options container.
    #[error("Options type \"{path}\" does not resolve to an options container; received \"{received}\"")]
    InvalidOptionsClass { path: String, received: String },

    /// Adapter options were neither a mapping nor an options container.
    #[error("Expected a mapping or an options container; received \"{received}\"")]
    InvalidOptions { received: String },

    /// Construction parameters of an unsupported shape.
    #[error("Expected an adapter, an adapter name, a mapping or key/value pairs; received \"{received}\"")]
    InvalidParams { received: String },

    /// An options-enabled adapter was asked for options nobody forwarded.
    #[error("No options instance set for the adapter \"{adapter}\"")]
    OptionsNotBound { adapter: String },

    /// Validation failure from the options layer.
    #[error(transparent)]
    Options(#[from] OptionsError),
}

fn missing_adapter(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("type \"{}\" not found", name),
        None => "adapter not found".to_string(),
    }
}
