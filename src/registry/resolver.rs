// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::adapter::ConvertNothing;
use crate::errors::{ConversionError, OptionsError};
use crate::options::OptionsContainer;
use crate::traits::ConversionAlgorithm;

/// An instantiated type, as handed back by a [`Constructor`].
pub enum Component {
    Adapter(Box<dyn ConversionAlgorithm>),
    Options(Box<dyn OptionsContainer>),
    /// A type that is neither an algorithm nor an options container.
    Other { type_path: String },
}

impl Component {
    /// Type path of the instance, for diagnostics.
    pub fn type_path(&self) -> &str {
        match self {
            Component::Adapter(adapter) => adapter.type_path(),
            Component::Options(options) => options.type_path(),
            Component::Other { type_path } => type_path,
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Component::Adapter(_) => "Adapter",
            Component::Options(_) => "Options",
            Component::Other { .. } => "Other",
        };
        f.debug_struct("Component")
            .field("kind", &kind)
            .field("type_path", &self.type_path())
            .finish()
    }
}

/// Creates a fresh instance of a registered type.
pub type Constructor = Arc<dyn Fn() -> Result<Component, ConversionError> + Send + Sync>;

/// Name -> type lookup used by the facade.
///
/// `None` means no such type exists. Hosts can implement this over any
/// static table; closures of the right shape implement it directly.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, path: &str) -> Option<Constructor>;
}

impl<F> TypeResolver for F
where
    F: Fn(&str) -> Option<Constructor> + Send + Sync,
{
    fn resolve(&self, path: &str) -> Option<Constructor> {
        self(path)
    }
}

/// Static registry of constructors keyed by type path.
///
/// Typed registration keys entries by `std::any::type_name`, which is what the
/// options naming convention is derived from.
///
/// # Examples
///
/// ```
/// use conversio::adapter::ConvertNothing;
/// use conversio::registry::{TypeRegistry, TypeResolver};
///
/// let mut registry = TypeRegistry::new();
/// registry.register_adapter::<ConvertNothing>();
/// registry.register_alias("nothing", std::any::type_name::<ConvertNothing>());
///
/// assert!(registry.contains(std::any::type_name::<ConvertNothing>()));
/// assert!(registry.resolve("nothing").is_some());
/// assert!(registry.resolve("something").is_none());
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
    constructors: HashMap<String, Constructor>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the algorithms shipped in this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_adapter::<ConvertNothing>();
        registry
    }

    /// Register a raw constructor under `path`, replacing any previous entry.
    pub fn register(&mut self, path: impl Into<String>, constructor: Constructor) -> &mut Self {
        self.constructors.insert(path.into(), constructor);
        self
    }

    /// Register algorithm `T`, built with `T::default()`.
    pub fn register_adapter<T>(&mut self) -> &mut Self
    where
        T: ConversionAlgorithm + Default + 'static,
    {
        self.register_adapter_with(T::default)
    }

    /// Register algorithm `T` with a custom factory.
    pub fn register_adapter_with<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ConversionAlgorithm + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register(
            std::any::type_name::<T>(),
            Arc::new(move || -> Result<Component, ConversionError> {
                Ok(Component::Adapter(Box::new(factory())))
            }),
        )
    }

    /// Register options type `T`. Factory failures (a broken schema) surface
    /// when the facade instantiates the type.
    pub fn register_options<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: OptionsContainer + 'static,
        F: Fn() -> Result<T, OptionsError> + Send + Sync + 'static,
    {
        self.register(
            std::any::type_name::<T>(),
            Arc::new(move || -> Result<Component, ConversionError> {
                let options = factory()?;
                Ok(Component::Options(Box::new(options)))
            }),
        )
    }

    /// Register a type that is neither an algorithm nor an options container.
    pub fn register_component<T: 'static>(&mut self) -> &mut Self {
        let type_path = std::any::type_name::<T>();
        self.register(
            type_path,
            Arc::new(move || -> Result<Component, ConversionError> {
                Ok(Component::Other {
                    type_path: type_path.to_string(),
                })
            }),
        )
    }

    /// Make `alias` resolve to whatever is registered at `target`.
    /// Returns `false` (and registers nothing) if `target` is unknown.
    pub fn register_alias(&mut self, alias: impl Into<String>, target: &str) -> bool {
        match self.constructors.get(target).cloned() {
            Some(constructor) => {
                self.constructors.insert(alias.into(), constructor);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.constructors.contains_key(path)
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, path: &str) -> Option<Constructor> {
        self.constructors.get(path).cloned()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("type_count", &self.constructors.len())
            .field("type_paths", &self.paths())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionsMap;
    use serde_json::json;
    use std::any::Any;

    #[derive(Debug)]
    struct BrokenOptions {
        map: OptionsMap,
    }

    impl OptionsContainer for BrokenOptions {
        fn options_map(&self) -> &OptionsMap {
            &self.map
        }

        fn options_map_mut(&mut self) -> &mut OptionsMap {
            &mut self.map
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct NotAnAdapter;

    fn instantiate(resolver: &dyn TypeResolver, path: &str) -> Result<Component, ConversionError> {
        let constructor = resolver.resolve(path).expect("type should be registered");
        constructor()
    }

    #[test]
    fn test_with_builtin_registers_convert_nothing() {
        let registry = TypeRegistry::with_builtin();
        let path = std::any::type_name::<ConvertNothing>();

        assert_eq!(registry.len(), 1);
        match instantiate(&registry, path).unwrap() {
            Component::Adapter(adapter) => assert_eq!(adapter.name(), "ConvertNothing"),
            other => panic!("Expected an adapter, got {:?}", other),
        }
    }

    #[test]
    fn test_register_component_and_options() {
        let mut registry = TypeRegistry::new();
        registry
            .register_component::<NotAnAdapter>()
            .register_options(|| {
                Ok(BrokenOptions {
                    map: OptionsMap::from_schema(json!([]))?,
                })
            });

        let other = instantiate(&registry, std::any::type_name::<NotAnAdapter>()).unwrap();
        assert!(matches!(other, Component::Other { .. }));
        assert!(other.type_path().ends_with("::NotAnAdapter"));

        let broken = instantiate(&registry, std::any::type_name::<BrokenOptions>());
        assert!(matches!(
            broken,
            Err(ConversionError::Options(OptionsError::InvalidSchema { .. }))
        ));
    }

    #[test]
    fn test_alias_requires_existing_target() {
        let mut registry = TypeRegistry::with_builtin();

        assert!(registry.register_alias("nothing", std::any::type_name::<ConvertNothing>()));
        assert!(!registry.register_alias("ghost", "app::Ghost"));
        assert!(registry.contains("nothing"));
        assert!(!registry.contains("ghost"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |path: &str| -> Option<Constructor> {
            (path == "identity").then(|| -> Constructor {
                Arc::new(|| -> Result<Component, ConversionError> {
                    Ok(Component::Adapter(Box::new(ConvertNothing)))
                })
            })
        };

        assert!(resolver.resolve("identity").is_some());
        assert!(resolver.resolve("other").is_none());
    }

    #[test]
    fn test_debug_lists_sorted_paths() {
        let mut registry = TypeRegistry::new();
        registry.register_component::<NotAnAdapter>();
        registry.register_alias("a_alias", std::any::type_name::<NotAnAdapter>());

        let debug = format!("{:?}", registry);
        assert!(debug.contains("type_count: 2"));
        assert!(debug.find("a_alias") < debug.find("NotAnAdapter"));
    }
}
