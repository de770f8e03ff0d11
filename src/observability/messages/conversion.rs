// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for conversion execution.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Conversion started.
///
/// # Log Level
/// `trace!` - Fine-grained detail
///
/// # Example
/// ```
/// use conversio::observability::messages::StructuredLog;
/// use conversio::observability::messages::conversion::ConversionStarted;
///
/// let msg = ConversionStarted {
///     adapter_name: "ConvertNothing",
///     input_size: 5,
/// };
///
/// let span = msg.span("conversion");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct ConversionStarted<'a> {
    pub adapter_name: &'a str,
    pub input_size: usize,
}

impl Display for ConversionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Conversion with '{}' started: input_size={} bytes",
            self.adapter_name, self.input_size
        )
    }
}

impl StructuredLog for ConversionStarted<'_> {
    fn log(&self) {
        tracing::trace!(
            adapter_name = self.adapter_name,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "conversion",
            span_name = name,
            adapter_name = self.adapter_name,
            input_size = self.input_size,
        )
    }
}

/// Conversion completed.
///
/// # Log Level
/// `trace!` - Fine-grained detail
pub struct ConversionCompleted<'a> {
    pub adapter_name: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for ConversionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Conversion with '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.adapter_name, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ConversionCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            adapter_name = self.adapter_name,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "conversion",
            span_name = name,
            adapter_name = self.adapter_name,
            output_size = self.output_size,
        )
    }
}
