// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::fmt;

use serde_json::{Map, Value};

use super::{AllowedValuesValidator, OptionsSchema};
use crate::errors::OptionsError;
use crate::registry::setter_name;

/// Schema-bound, validated option values.
///
/// Every write goes through [`AllowedValuesValidator`], so an `OptionsMap` can
/// never hold a key outside its schema or a value outside the allowed list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsMap {
    schema: OptionsSchema,
    values: Map<String, Value>,
}

impl OptionsMap {
    /// Create an empty map for an already checked schema.
    pub fn new(schema: OptionsSchema) -> Self {
        Self {
            schema,
            values: Map::new(),
        }
    }

    /// Check `schema` and create an empty map for it.
    pub fn from_schema(schema: Value) -> Result<Self, OptionsError> {
        Ok(Self::new(OptionsSchema::from_value(schema)?))
    }

    /// Create a map seeded with `initial`, each entry a validated write in
    /// order. The first rejected entry fails construction.
    pub fn with_entries(
        schema: OptionsSchema,
        initial: Option<&Map<String, Value>>,
    ) -> Result<Self, OptionsError> {
        let mut map = Self::new(schema);
        for (key, value) in initial.into_iter().flatten() {
            map.set(key, value.clone())?;
        }
        Ok(map)
    }

    /// Validated write; last write wins.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), OptionsError> {
        AllowedValuesValidator::set_option(self.schema.entries(), &mut self.values, key, value)
    }

    /// Validated read. Unknown keys and unset keys are different errors.
    pub fn get(&self, key: &str) -> Result<&Value, OptionsError> {
        if !self.schema.contains_key(key) {
            return Err(OptionsError::UnknownOption {
                key: key.to_string(),
                available: self.schema.keys().cloned().collect(),
            });
        }

        self.values.get(key).ok_or_else(|| OptionsError::OptionNotSet {
            key: key.to_string(),
        })
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Copy of the current state.
    pub fn to_map(&self) -> Map<String, Value> {
        self.values.clone()
    }

    pub fn schema(&self) -> &OptionsSchema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Options type dedicated to one conversion algorithm.
///
/// Implementors own an [`OptionsMap`] built from their schema and expose it
/// through [`options_map`](Self::options_map) / [`options_map_mut`](Self::options_map_mut).
/// They may also expose named setters: bulk updates look up
/// `set_<snake_case key>` through [`call_setter`](Self::call_setter) before
/// falling back to the generic validated write.
///
/// The type path ([`type_path`](Self::type_path)) is what the facade compares
/// against the conventional options path of the bound adapter.
pub trait OptionsContainer: Send + Sync + fmt::Debug {
    fn options_map(&self) -> &OptionsMap;

    fn options_map_mut(&mut self) -> &mut OptionsMap;

    /// Access to the concrete type, for adapters that downcast their options.
    fn as_any(&self) -> &dyn Any;

    /// Named setter hook. `None` means there is no setter with that name.
    fn call_setter(&mut self, _setter: &str, _value: &Value) -> Option<Result<(), OptionsError>> {
        None
    }

    fn type_path(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn set_option(&mut self, key: &str, value: Value) -> Result<(), OptionsError> {
        self.options_map_mut().set(key, value)
    }

    fn get(&self, key: &str) -> Result<&Value, OptionsError> {
        self.options_map().get(key)
    }

    fn to_map(&self) -> Map<String, Value> {
        self.options_map().to_map()
    }

    /// Apply `entries` in order. The first failure restores the validated state
    /// held before the call and is returned unchanged.
    fn set_from_map(&mut self, entries: &Map<String, Value>) -> Result<(), OptionsError> {
        let snapshot = self.options_map().clone();

        for (key, value) in entries {
            let setter = setter_name(key);
            let result = match self.call_setter(&setter, value) {
                Some(result) => result,
                None => self.set_option(key, value.clone()),
            };

            if let Err(err) = result {
                *self.options_map_mut() = snapshot;
                return Err(err);
            }
        }

        Ok(())
    }

    /// Same as [`set_from_map`](Self::set_from_map) for an ordered list of pairs.
    fn set_from_pairs(&mut self, pairs: Vec<(String, Value)>) -> Result<(), OptionsError> {
        let entries = pairs.into_iter().collect::<Map<String, Value>>();
        self.set_from_map(&entries)
    }

    /// Consume a freshly built container and seed it with `entries` through
    /// the same path as [`set_from_map`](Self::set_from_map).
    fn seeded(mut self, entries: &Map<String, Value>) -> Result<Self, OptionsError>
    where
        Self: Sized,
    {
        self.set_from_map(entries)?;
        Ok(self)
    }

    /// [`seeded`](Self::seeded) for an ordered list of pairs.
    fn seeded_with_pairs(mut self, pairs: Vec<(String, Value)>) -> Result<Self, OptionsError>
    where
        Self: Sized,
    {
        self.set_from_pairs(pairs)?;
        Ok(self)
    }
}

impl<T: OptionsContainer + ?Sized> OptionsContainer for Box<T> {
    fn options_map(&self) -> &OptionsMap {
        (**self).options_map()
    }

    fn options_map_mut(&mut self) -> &mut OptionsMap {
        (**self).options_map_mut()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn call_setter(&mut self, setter: &str, value: &Value) -> Option<Result<(), OptionsError>> {
        (**self).call_setter(setter, value)
    }

    fn type_path(&self) -> &'static str {
        (**self).type_path()
    }

    fn set_from_map(&mut self, entries: &Map<String, Value>) -> Result<(), OptionsError> {
        (**self).set_from_map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Options with a named setter for `mode` that also records how often it ran.
    #[derive(Debug)]
    struct ModeOptions {
        map: OptionsMap,
        mode_setter_calls: usize,
    }

    impl ModeOptions {
        fn new() -> Result<Self, OptionsError> {
            Ok(Self {
                map: OptionsMap::from_schema(json!({
                    "mode": ["fast", "safe"],
                    "level": [1, 2, 3],
                }))?,
                mode_setter_calls: 0,
            })
        }

        fn set_mode(&mut self, value: &Value) -> Result<(), OptionsError> {
            self.mode_setter_calls += 1;
            self.map.set("mode", value.clone())
        }
    }

    impl OptionsContainer for ModeOptions {
        fn options_map(&self) -> &OptionsMap {
            &self.map
        }

        fn options_map_mut(&mut self) -> &mut OptionsMap {
            &mut self.map
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn call_setter(&mut self, setter: &str, value: &Value) -> Option<Result<(), OptionsError>> {
            match setter {
                "set_mode" => Some(self.set_mode(value)),
                _ => None,
            }
        }
    }

    fn entries(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_get_distinguishes_unknown_and_unset() {
        let options = ModeOptions::new().unwrap();

        assert_eq!(
            options.get("level"),
            Err(OptionsError::OptionNotSet {
                key: "level".to_string()
            })
        );
        assert!(matches!(
            options.get("colour"),
            Err(OptionsError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_set_from_map_uses_named_setter_when_present() {
        let mut options = ModeOptions::new().unwrap();

        options
            .set_from_map(&entries(json!({ "mode": "safe", "level": 2 })))
            .unwrap();

        assert_eq!(options.mode_setter_calls, 1);
        assert_eq!(options.get("mode"), Ok(&json!("safe")));
        assert_eq!(options.get("level"), Ok(&json!(2)));
    }

    #[test]
    fn test_set_from_map_is_all_or_nothing() {
        let mut options = ModeOptions::new().unwrap();
        options.set_option("level", json!(1)).unwrap();

        let err = options
            .set_from_map(&entries(json!({ "level": 3, "mode": "reckless" })))
            .unwrap_err();

        assert!(matches!(err, OptionsError::DisallowedValue { ref key, .. } if key == "mode"));
        assert_eq!(options.to_map(), entries(json!({ "level": 1 })));
    }

    #[test]
    fn test_set_from_pairs_applies_in_order() {
        let mut options = ModeOptions::new().unwrap();

        options
            .set_from_pairs(vec![
                ("level".to_string(), json!(1)),
                ("level".to_string(), json!(3)),
            ])
            .unwrap();

        assert_eq!(options.get("level"), Ok(&json!(3)));
    }

    #[test]
    fn test_to_map_returns_a_copy() {
        let mut options = ModeOptions::new().unwrap();
        options.set_option("level", json!(2)).unwrap();

        let mut copy = options.to_map();
        copy.insert("level".to_string(), json!(99));
        copy.insert("colour".to_string(), json!("red"));

        assert_eq!(options.to_map(), entries(json!({ "level": 2 })));
    }

    #[test]
    fn test_with_entries_table_driven() {
        struct TestCase {
            name: &'static str,
            initial: Option<Value>,
            expected: Result<Map<String, Value>, OptionsError>,
        }

        let test_cases = vec![
            TestCase {
                name: "no initial values",
                initial: None,
                expected: Ok(Map::new()),
            },
            TestCase {
                name: "valid seed",
                initial: Some(json!({ "level": 2, "mode": "fast" })),
                expected: Ok(entries(json!({ "level": 2, "mode": "fast" }))),
            },
            TestCase {
                name: "disallowed value",
                initial: Some(json!({ "level": 2, "mode": "reckless" })),
                expected: Err(OptionsError::DisallowedValue {
                    key: "mode".to_string(),
                    value: json!("reckless"),
                    allowed: vec![json!("fast"), json!("safe")],
                }),
            },
            TestCase {
                name: "unknown key",
                initial: Some(json!({ "colour": "red" })),
                expected: Err(OptionsError::UnknownOption {
                    key: "colour".to_string(),
                    available: vec!["mode".to_string(), "level".to_string()],
                }),
            },
        ];

        for test_case in test_cases {
            let schema = OptionsSchema::from_value(json!({
                "mode": ["fast", "safe"],
                "level": [1, 2, 3],
            }))
            .unwrap();
            let initial = test_case.initial.map(entries);

            let result = OptionsMap::with_entries(schema, initial.as_ref()).map(|map| map.to_map());
            assert_eq!(result, test_case.expected, "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_with_entries_tracks_schema_and_set_keys() {
        let schema = OptionsSchema::from_value(json!({ "mode": ["fast", "safe"], "level": [1] })).unwrap();
        let map = OptionsMap::with_entries(schema.clone(), Some(&entries(json!({ "level": 1 })))).unwrap();

        assert_eq!(map.schema(), &schema);
        assert!(map.is_set("level"));
        assert!(!map.is_set("mode"));
        assert!(!map.is_set("colour"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_seeded_runs_named_setters() {
        let options = ModeOptions::new()
            .unwrap()
            .seeded(&entries(json!({ "mode": "fast", "level": 3 })))
            .unwrap();

        assert_eq!(options.mode_setter_calls, 1);
        assert_eq!(options.to_map(), entries(json!({ "mode": "fast", "level": 3 })));

        let rejected = ModeOptions::new()
            .unwrap()
            .seeded_with_pairs(vec![("level".to_string(), json!(4))]);
        assert!(matches!(
            rejected,
            Err(OptionsError::DisallowedValue { ref key, .. }) if key == "level"
        ));
    }

    #[test]
    fn test_boxed_container_behaves_like_its_contents() {
        let boxed: Box<dyn OptionsContainer> = Box::new(ModeOptions::new().unwrap());
        let boxed = boxed.seeded(&entries(json!({ "mode": "safe" }))).unwrap();

        assert!(boxed.type_path().ends_with("::ModeOptions"));
        assert_eq!(boxed.get("mode"), Ok(&json!("safe")));

        let mode_options = boxed.as_any().downcast_ref::<ModeOptions>().unwrap();
        assert_eq!(mode_options.mode_setter_calls, 1);
    }

    #[test]
    fn test_type_path_names_the_concrete_type() {
        let options = ModeOptions::new().unwrap();
        assert!(options.type_path().ends_with("::ModeOptions"));
    }
}
