// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `adapter` - adapter resolution and options binding
//! * `options` - bulk settings dispatch
//! * `conversion` - conversion execution
//!
//! # Usage Pattern
//!
//! ```rust
//! use conversio::observability::messages::StructuredLog;
//! use conversio::observability::messages::options::SettingIgnored;
//!
//! let msg = SettingIgnored { key: "colour" };
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod adapter;
pub mod conversion;
pub mod options;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a tracing event with its fields attached.
    fn log(&self);

    /// Open a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
