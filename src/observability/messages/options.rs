// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for bulk settings dispatch.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Settings key with no matching facade setter, skipped on purpose.
///
/// # Log Level
/// `debug!` - Configuration detail
///
/// # Example
/// ```
/// use conversio::observability::messages::options::SettingIgnored;
///
/// let msg = SettingIgnored { key: "colour" };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct SettingIgnored<'a> {
    pub key: &'a str,
}

impl Display for SettingIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Setting '{}' has no setter; ignored", self.key)
    }
}

impl StructuredLog for SettingIgnored<'_> {
    fn log(&self) {
        tracing::debug!(key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("settings", span_name = name, key = self.key)
    }
}

/// Bulk settings applied to the facade.
///
/// # Log Level
/// `trace!` - Fine-grained detail
pub struct SettingsApplied {
    pub entry_count: usize,
}

impl Display for SettingsApplied {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Applying {} setting(s)", self.entry_count)
    }
}

impl StructuredLog for SettingsApplied {
    fn log(&self) {
        tracing::trace!(entry_count = self.entry_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("settings", span_name = name, entry_count = self.entry_count)
    }
}
