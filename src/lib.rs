// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod adapter;       // built-in algorithms
pub mod config;        // YAML config + naming constants
pub mod conversion;    // the facade
pub mod errors;        // error handling
pub mod observability;
pub mod options;       // allowed-value validation
pub mod registry;      // type lookup + naming convention
pub mod traits;        // algorithm contract
