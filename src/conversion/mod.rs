// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The conversion facade and the inputs it accepts.

mod facade;
mod params;


pub use facade::Conversion;
pub use params::{apply_params, AdapterRef, ConversionSetup, OptionsInput, Params};
