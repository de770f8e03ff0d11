// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversion algorithms shipped with the crate.

pub mod convert_nothing;

pub use convert_nothing::ConvertNothing;
