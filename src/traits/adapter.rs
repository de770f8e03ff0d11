// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::errors::ConversionError;
use crate::options::OptionsContainer;
use crate::registry::namespace_of;

/// A pluggable string conversion algorithm.
///
/// Any type with a name and a `convert` qualifies. Algorithms that take
/// configuration additionally implement [`OptionsEnabled`] and return it from
/// [`options_enabled`](Self::options_enabled); the facade probes that before
/// forwarding options and skips forwarding when it returns `None`.
pub trait ConversionAlgorithm: Send + Sync {
    /// Identity of the algorithm family; also selects its options type.
    fn name(&self) -> &str;

    fn convert(&self, text: &str) -> String;

    fn type_path(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Module the options type is looked up under.
    fn namespace(&self) -> &str {
        namespace_of(self.type_path())
    }

    fn options_enabled(&mut self) -> Option<&mut dyn OptionsEnabled> {
        None
    }
}

/// Optional capability of algorithms that accept an options container.
pub trait OptionsEnabled {
    fn set_options(&mut self, options: Arc<dyn OptionsContainer>);
}

/// Holder for the options an [`OptionsEnabled`] algorithm was given.
#[derive(Debug, Clone, Default)]
pub struct OptionsSlot {
    options: Option<Arc<dyn OptionsContainer>>,
}

impl OptionsSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, options: Arc<dyn OptionsContainer>) {
        self.options = Some(options);
    }

    /// Bound options, or `OptionsNotBound` naming `adapter`.
    pub fn get(&self, adapter: &str) -> Result<&Arc<dyn OptionsContainer>, ConversionError> {
        self.options
            .as_ref()
            .ok_or_else(|| ConversionError::OptionsNotBound {
                adapter: adapter.to_string(),
            })
    }

    /// Bound options as their concrete type, if bound and of type `T`.
    pub fn downcast<T: 'static>(&self) -> Option<&T> {
        self.options
            .as_ref()
            .and_then(|options| options.as_any().downcast_ref::<T>())
    }

    pub fn is_bound(&self) -> bool {
        self.options.is_some()
    }
}
