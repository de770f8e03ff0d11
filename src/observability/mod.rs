// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display` implementation
//! so log text lives in one place instead of being scattered through the
//! facade as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::adapter` - adapter resolution and options binding
//! * `messages::options` - bulk settings dispatch
//! * `messages::conversion` - conversion execution
//!
//! Failures are returned to callers, never logged here.
//!
//! # Usage
//!
//! ```rust
//! use conversio::observability::messages::adapter::AdapterResolved;
//!
//! let msg = AdapterResolved {
//!     adapter_name: "ConvertNothing",
//!     type_path: "conversio::adapter::convert_nothing::ConvertNothing",
//!     source: "name",
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
