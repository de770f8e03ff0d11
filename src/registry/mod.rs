// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Type lookup for the conversion facade.
//!
//! Resolution is split in two replaceable parts:
//!
//! * a [`TypeResolver`] turning a type path into a [`Constructor`]
//! * an [`OptionsNaming`] function deriving an adapter's options type path
//!
//! The crate ships [`TypeRegistry`] as a static resolver and
//! [`conventional_options_path`] as the default naming.

mod naming;
mod resolver;

pub use naming::{conventional_options_path, namespace_of, setter_name, OptionsNaming};
pub use resolver::{Component, Constructor, TypeRegistry, TypeResolver};
