// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Constrained options: allowed-value schemas, the validator that enforces
//! them, and the containers adapters receive their configuration in.

mod container;
mod schema;
mod validator;

pub use container::{OptionsContainer, OptionsMap};
pub use schema::{value_kind, OptionsSchema};
pub use validator::AllowedValuesValidator;
