// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for adapter resolution and options binding.
//!
//! This module contains message types for logging events related to:
//! * Adapter resolution (by name or by instance)
//! * Options container binding
//! * Options forwarding to options-enabled adapters

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Adapter resolved and stored in the facade.
///
/// # Log Level
/// `debug!` - Configuration detail
///
/// # Example
/// ```
/// use conversio::observability::messages::adapter::AdapterResolved;
///
/// let msg = AdapterResolved {
///     adapter_name: "ConvertNothing",
///     type_path: "conversio::adapter::convert_nothing::ConvertNothing",
///     source: "instance",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AdapterResolved<'a> {
    pub adapter_name: &'a str,
    pub type_path: &'a str,
    /// `"name"` or `"instance"`
    pub source: &'a str,
}

impl Display for AdapterResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Adapter '{}' resolved from {}: type={}",
            self.adapter_name, self.source, self.type_path
        )
    }
}

impl StructuredLog for AdapterResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            adapter_name = self.adapter_name,
            type_path = self.type_path,
            source = self.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "adapter_resolution",
            span_name = name,
            adapter_name = self.adapter_name,
            type_path = self.type_path,
            source = self.source,
        )
    }
}

/// Options container built, validated and bound to the current adapter.
///
/// # Log Level
/// `debug!` - Configuration detail
///
/// # Example
/// ```
/// use conversio::observability::messages::adapter::AdapterOptionsBound;
///
/// let msg = AdapterOptionsBound {
///     adapter_name: "Affix",
///     options_path: "demo::affix::options::AffixOptions",
///     option_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AdapterOptionsBound<'a> {
    pub adapter_name: &'a str,
    pub options_path: &'a str,
    pub option_count: usize,
}

impl Display for AdapterOptionsBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Options '{}' bound to adapter '{}': {} option(s) set",
            self.options_path, self.adapter_name, self.option_count
        )
    }
}

impl StructuredLog for AdapterOptionsBound<'_> {
    fn log(&self) {
        tracing::debug!(
            adapter_name = self.adapter_name,
            options_path = self.options_path,
            option_count = self.option_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "options_binding",
            span_name = name,
            adapter_name = self.adapter_name,
            options_path = self.options_path,
            option_count = self.option_count,
        )
    }
}

/// Options handed to an adapter exposing the options capability.
///
/// # Log Level
/// `trace!` - Fine-grained detail
pub struct OptionsForwarded<'a> {
    pub adapter_name: &'a str,
}

impl Display for OptionsForwarded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Options forwarded to adapter '{}'", self.adapter_name)
    }
}

impl StructuredLog for OptionsForwarded<'_> {
    fn log(&self) {
        tracing::trace!(adapter_name = self.adapter_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "options_forwarding",
            span_name = name,
            adapter_name = self.adapter_name,
        )
    }
}
