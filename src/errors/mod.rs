// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod conversion;
mod options;

pub use config::ConfigError;
pub use conversion::ConversionError;
pub use options::OptionsError;
