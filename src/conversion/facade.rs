// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value};

use super::params::{apply_params, AdapterRef, ConversionSetup, OptionsInput, Params};
use crate::config::consts::OPTIONS_KEY;
use crate::config::ConversionConfig;
use crate::errors::ConversionError;
use crate::observability::messages::adapter::{AdapterOptionsBound, AdapterResolved, OptionsForwarded};
use crate::observability::messages::conversion::{ConversionCompleted, ConversionStarted};
use crate::observability::messages::options::{SettingIgnored, SettingsApplied};
use crate::observability::messages::StructuredLog;
use crate::options::OptionsContainer;
use crate::registry::{
    conventional_options_path, setter_name, Component, OptionsNaming, TypeRegistry, TypeResolver,
};
use crate::traits::ConversionAlgorithm;

/// String conversion facade.
///
/// Holds two independent slots, the adapter and its bound options. Options
/// can only be bound once an adapter is set, because the options type is
/// derived from the adapter's namespace and name. Replacing the adapter keeps
/// the previously bound options until [`set_adapter_options`](Self::set_adapter_options)
/// runs again.
///
/// # Example
/// ```
/// use conversio::adapter::ConvertNothing;
/// use conversio::conversion::Conversion;
/// use conversio::registry::TypeRegistry;
///
/// let mut conversion = Conversion::new(TypeRegistry::with_builtin());
/// let output = conversion
///     .set_adapter(std::any::type_name::<ConvertNothing>())?
///     .convert("hello")?;
///
/// assert_eq!(output, "hello");
/// # Ok::<(), conversio::errors::ConversionError>(())
/// ```
pub struct Conversion {
    resolver: Arc<dyn TypeResolver>,
    naming: OptionsNaming,
    adapter: Option<Box<dyn ConversionAlgorithm>>,
    adapter_options: Option<Arc<dyn OptionsContainer>>,
}

impl Conversion {
    /// Create a facade with no adapter and no options.
    pub fn new(resolver: impl TypeResolver + 'static) -> Self {
        Self::with_resolver(Arc::new(resolver))
    }

    /// Create a facade over a resolver shared with other facades.
    pub fn with_resolver(resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            resolver,
            naming: conventional_options_path,
            adapter: None,
            adapter_options: None,
        }
    }

    /// Create a facade and apply a single construction parameter.
    pub fn with_params(
        resolver: impl TypeResolver + 'static,
        params: impl Into<Params>,
    ) -> Result<Self, ConversionError> {
        let mut conversion = Self::new(resolver);
        apply_params(&mut conversion, params.into())?;
        Ok(conversion)
    }

    /// Create a facade from a loaded configuration: adapter first, then options.
    pub fn from_config(
        resolver: impl TypeResolver + 'static,
        config: &ConversionConfig,
    ) -> Result<Self, ConversionError> {
        Self::with_params(resolver, Params::Settings(config.to_settings()))
    }

    /// Replace the options naming convention.
    pub fn with_naming(mut self, naming: OptionsNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Install an adapter, by registered type path or by instance.
    pub fn set_adapter(
        &mut self,
        adapter: impl Into<AdapterRef>,
    ) -> Result<&mut Self, ConversionError> {
        let (adapter, source) = match adapter.into() {
            AdapterRef::Instance(adapter) => (adapter, "instance"),
            AdapterRef::Name(name) => {
                let constructor = self.resolver.resolve(&name).ok_or_else(|| {
                    ConversionError::AdapterNotFound {
                        name: Some(name.clone()),
                    }
                })?;

                match constructor()? {
                    Component::Adapter(adapter) => (adapter, "name"),
                    other => {
                        return Err(ConversionError::InvalidAdapter {
                            received: other.type_path().to_string(),
                        })
                    }
                }
            }
        };

        AdapterResolved {
            adapter_name: adapter.name(),
            type_path: adapter.type_path(),
            source,
        }
        .log();

        self.adapter = Some(adapter);
        Ok(self)
    }

    /// Current adapter. Never falls back to a default.
    pub fn get_adapter(&self) -> Result<&dyn ConversionAlgorithm, ConversionError> {
        self.adapter
            .as_deref()
            .ok_or(ConversionError::AdapterNotFound { name: None })
    }

    pub fn adapter_name(&self) -> Result<&str, ConversionError> {
        Ok(self.get_adapter()?.name())
    }

    /// Path of the options type the current adapter binds, per the naming convention.
    pub fn options_path(&self) -> Result<String, ConversionError> {
        let adapter = self.get_adapter()?;
        Ok((self.naming)(adapter.namespace(), adapter.name()))
    }

    /// Build, validate and bind the options of the current adapter.
    ///
    /// A mapping is applied to a fresh instance of the adapter's options type;
    /// a ready container must be of exactly that type. On any error the
    /// previously bound options stay in place.
    pub fn set_adapter_options(
        &mut self,
        options: impl Into<OptionsInput>,
    ) -> Result<&mut Self, ConversionError> {
        let path = self.options_path()?;

        let container = match options.into() {
            OptionsInput::Container(container) => {
                if container.type_path() != path {
                    return Err(ConversionError::InvalidOptionsClass {
                        received: container.type_path().to_string(),
                        path,
                    });
                }
                container
            }
            OptionsInput::Map(entries) => {
                let constructor = self.resolver.resolve(&path).ok_or_else(|| {
                    ConversionError::OptionsClassNotFound { path: path.clone() }
                })?;

                match constructor()? {
                    Component::Options(container) => container.seeded(&entries)?,
                    other => {
                        return Err(ConversionError::InvalidOptionsClass {
                            received: other.type_path().to_string(),
                            path,
                        })
                    }
                }
            }
        };

        let options: Arc<dyn OptionsContainer> = Arc::from(container);

        if let Some(adapter) = self.adapter.as_deref_mut() {
            AdapterOptionsBound {
                adapter_name: adapter.name(),
                options_path: &path,
                option_count: options.options_map().len(),
            }
            .log();

            let adapter_name = adapter.name().to_string();
            if let Some(enabled) = adapter.options_enabled() {
                enabled.set_options(Arc::clone(&options));
                OptionsForwarded {
                    adapter_name: &adapter_name,
                }
                .log();
            }
        }

        self.adapter_options = Some(options);
        Ok(self)
    }

    /// Bound options container, if any. `None` is a normal state.
    pub fn get_adapter_options(&self) -> Option<Arc<dyn OptionsContainer>> {
        self.adapter_options.clone()
    }

    /// Copy of all bound option values, or `None` without a container.
    pub fn get_options(&self) -> Option<Map<String, Value>> {
        self.adapter_options.as_ref().map(|options| options.to_map())
    }

    /// One bound option value. `Ok(None)` without a container; otherwise the
    /// container's validated read (`OptionNotSet`, `UnknownOption`).
    pub fn get_option(&self, key: &str) -> Result<Option<Value>, ConversionError> {
        match &self.adapter_options {
            None => Ok(None),
            Some(options) => Ok(Some(options.get(key)?.clone())),
        }
    }

    /// Apply bulk settings in order.
    ///
    /// `options` is routed to [`set_adapter_options`](Self::set_adapter_options);
    /// any other key goes to the setter named `set_<snake_case key>` and is
    /// skipped when there is none.
    pub fn set_options(
        &mut self,
        settings: &Map<String, Value>,
    ) -> Result<&mut Self, ConversionError> {
        SettingsApplied {
            entry_count: settings.len(),
        }
        .log();

        for (key, value) in settings {
            let setter = if key == OPTIONS_KEY {
                setter_name("adapter_options")
            } else {
                setter_name(key)
            };

            match self.call_setter(&setter, value) {
                Some(result) => result?,
                None => SettingIgnored { key }.log(),
            }
        }

        Ok(self)
    }

    /// Convert `text` with the current adapter.
    pub fn convert(&self, text: &str) -> Result<String, ConversionError> {
        let adapter = self.get_adapter()?;

        let start_msg = ConversionStarted {
            adapter_name: adapter.name(),
            input_size: text.len(),
        };
        let span = start_msg.span("convert");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let output = adapter.convert(text);

        ConversionCompleted {
            adapter_name: adapter.name(),
            input_size: text.len(),
            output_size: output.len(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(output)
    }

    /// Convert string values; every other value passes through unchanged.
    pub fn filter(&self, value: Value) -> Result<Value, ConversionError> {
        match value {
            Value::String(text) => Ok(Value::String(self.convert(&text)?)),
            other => Ok(other),
        }
    }

    fn call_setter(&mut self, setter: &str, value: &Value) -> Option<Result<(), ConversionError>> {
        match setter {
            "set_adapter" => Some(
                AdapterRef::from_value(value).and_then(|adapter| self.set_adapter(adapter).map(|_| ())),
            ),
            "set_adapter_options" => Some(
                OptionsInput::from_value(value)
                    .and_then(|options| self.set_adapter_options(options).map(|_| ())),
            ),
            _ => None,
        }
    }
}

impl ConversionSetup for Conversion {
    fn set_adapter(&mut self, adapter: AdapterRef) -> Result<(), ConversionError> {
        Conversion::set_adapter(self, adapter).map(|_| ())
    }

    fn set_options(&mut self, settings: &Map<String, Value>) -> Result<(), ConversionError> {
        Conversion::set_options(self, settings).map(|_| ())
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::new(TypeRegistry::with_builtin())
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("adapter", &self.adapter.as_ref().map(|adapter| adapter.name()))
            .field("adapter_options", &self.get_options())
            .finish()
    }
}
