// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Inputs accepted by the conversion facade.
//!
//! * [`AdapterRef`] - an algorithm by name or by instance
//! * [`OptionsInput`] - adapter options as a mapping or a ready container
//! * [`Params`] - the single construction parameter, dispatched by [`apply_params`]

use serde_json::{Map, Value};

use crate::errors::ConversionError;
use crate::options::{value_kind, OptionsContainer};
use crate::traits::ConversionAlgorithm;

/// An algorithm to install: a registered type path, or an instance.
pub enum AdapterRef {
    Name(String),
    Instance(Box<dyn ConversionAlgorithm>),
}

impl AdapterRef {
    /// Interpret a settings value: strings are names, anything else is rejected.
    pub fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::String(name) => Ok(AdapterRef::Name(name.clone())),
            other => Err(ConversionError::InvalidAdapter {
                received: value_kind(other).to_string(),
            }),
        }
    }
}

impl From<&str> for AdapterRef {
    fn from(name: &str) -> Self {
        AdapterRef::Name(name.to_string())
    }
}

impl From<String> for AdapterRef {
    fn from(name: String) -> Self {
        AdapterRef::Name(name)
    }
}

impl From<Box<dyn ConversionAlgorithm>> for AdapterRef {
    fn from(adapter: Box<dyn ConversionAlgorithm>) -> Self {
        AdapterRef::Instance(adapter)
    }
}

impl<T: ConversionAlgorithm + 'static> From<T> for AdapterRef {
    fn from(adapter: T) -> Self {
        AdapterRef::Instance(Box::new(adapter))
    }
}

/// Adapter options: raw values to validate, or a container built by the caller.
pub enum OptionsInput {
    Map(Map<String, Value>),
    Container(Box<dyn OptionsContainer>),
}

impl OptionsInput {
    /// Interpret a settings value: objects are option maps, anything else is rejected.
    pub fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Object(entries) => Ok(OptionsInput::Map(entries.clone())),
            other => Err(ConversionError::InvalidOptions {
                received: value_kind(other).to_string(),
            }),
        }
    }
}

impl From<Map<String, Value>> for OptionsInput {
    fn from(entries: Map<String, Value>) -> Self {
        OptionsInput::Map(entries)
    }
}

// Also covers `Box<dyn OptionsContainer>`, which is itself a container.
impl<T: OptionsContainer + 'static> From<T> for OptionsInput {
    fn from(container: T) -> Self {
        OptionsInput::Container(Box::new(container))
    }
}

/// Single construction parameter of the facade.
///
/// `None` and an empty `Settings` are different: the first resolves nothing,
/// the second runs the bulk settings path with zero entries.
#[derive(Default)]
pub enum Params {
    #[default]
    None,
    Name(String),
    Adapter(Box<dyn ConversionAlgorithm>),
    Settings(Map<String, Value>),
    /// Ordered key/value pairs, collected into settings before use.
    Pairs(Vec<(String, Value)>),
}

impl Params {
    /// Map a JSON value onto a parameter shape.
    ///
    /// `null` is `None`, a string is `Name`, an object is `Settings` and an
    /// array of `[key, value]` pairs is `Pairs`.
    pub fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(Params::None),
            Value::String(name) => Ok(Params::Name(name)),
            Value::Object(settings) => Ok(Params::Settings(settings)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Array(pair) => match <[Value; 2]>::try_from(pair) {
                        Ok([Value::String(key), value]) => Ok((key, value)),
                        _ => Err(invalid_params("array")),
                    },
                    _ => Err(invalid_params("array")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Params::Pairs),
            other => Err(invalid_params(value_kind(&other))),
        }
    }
}

fn invalid_params(received: &str) -> ConversionError {
    ConversionError::InvalidParams {
        received: received.to_string(),
    }
}

impl From<&str> for Params {
    fn from(name: &str) -> Self {
        Params::Name(name.to_string())
    }
}

impl From<String> for Params {
    fn from(name: String) -> Self {
        Params::Name(name)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(settings: Map<String, Value>) -> Self {
        Params::Settings(settings)
    }
}

impl From<Vec<(String, Value)>> for Params {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Params::Pairs(pairs)
    }
}

impl From<Box<dyn ConversionAlgorithm>> for Params {
    fn from(adapter: Box<dyn ConversionAlgorithm>) -> Self {
        Params::Adapter(adapter)
    }
}

impl<T: ConversionAlgorithm + 'static> From<T> for Params {
    fn from(adapter: T) -> Self {
        Params::Adapter(Box::new(adapter))
    }
}

/// The two entry points construction dispatches to.
pub trait ConversionSetup {
    fn set_adapter(&mut self, adapter: AdapterRef) -> Result<(), ConversionError>;

    fn set_options(&mut self, settings: &Map<String, Value>) -> Result<(), ConversionError>;
}

/// Route one construction parameter to `target`.
///
/// Names and instances go to `set_adapter`; settings and pairs go to
/// `set_options`; `Params::None` calls nothing.
pub fn apply_params<S>(target: &mut S, params: Params) -> Result<(), ConversionError>
where
    S: ConversionSetup + ?Sized,
{
    match params {
        Params::None => Ok(()),
        Params::Name(name) => target.set_adapter(AdapterRef::Name(name)),
        Params::Adapter(adapter) => target.set_adapter(AdapterRef::Instance(adapter)),
        Params::Settings(settings) => target.set_options(&settings),
        Params::Pairs(pairs) => {
            let settings = pairs.into_iter().collect::<Map<String, Value>>();
            target.set_options(&settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ConvertNothing;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Call {
        SetAdapter(String),
        SetOptions(Map<String, Value>),
    }

    /// Records which entry point construction dispatched to.
    #[derive(Default)]
    struct RecordingSetup {
        calls: Vec<Call>,
    }

    impl ConversionSetup for RecordingSetup {
        fn set_adapter(&mut self, adapter: AdapterRef) -> Result<(), ConversionError> {
            let label = match adapter {
                AdapterRef::Name(name) => name,
                AdapterRef::Instance(instance) => format!("instance:{}", instance.name()),
            };
            self.calls.push(Call::SetAdapter(label));
            Ok(())
        }

        fn set_options(&mut self, settings: &Map<String, Value>) -> Result<(), ConversionError> {
            self.calls.push(Call::SetOptions(settings.clone()));
            Ok(())
        }
    }

    fn record(params: Params) -> Vec<Call> {
        let mut setup = RecordingSetup::default();
        apply_params(&mut setup, params).unwrap();
        setup.calls
    }

    #[test]
    fn test_no_params_calls_nothing() {
        assert!(record(Params::None).is_empty());
        assert!(record(Params::default()).is_empty());
    }

    #[test]
    fn test_empty_settings_still_call_set_options() {
        assert_eq!(record(Params::Settings(Map::new())), vec![Call::SetOptions(Map::new())]);
    }

    #[test]
    fn test_pairs_are_collected_into_settings() {
        let pairs = vec![
            ("adapter".to_string(), json!("app::Thing")),
            ("options".to_string(), json!({ "prop1": 1 })),
        ];
        let calls = record(Params::from(pairs));

        let expected = match json!({ "adapter": "app::Thing", "options": { "prop1": 1 } }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert_eq!(calls, vec![Call::SetOptions(expected)]);

        assert_eq!(record(Params::Pairs(vec![])), vec![Call::SetOptions(Map::new())]);
    }

    #[test]
    fn test_names_and_instances_call_set_adapter() {
        assert_eq!(
            record(Params::from("adapter")),
            vec![Call::SetAdapter("adapter".to_string())]
        );
        assert_eq!(
            record(Params::from(ConvertNothing)),
            vec![Call::SetAdapter("instance:ConvertNothing".to_string())]
        );
    }

    #[test]
    fn test_from_value_table_driven() {
        struct TestCase {
            name: &'static str,
            input: Value,
            expected: Result<&'static str, ConversionError>,
        }

        let test_cases = vec![
            TestCase { name: "null", input: Value::Null, expected: Ok("none") },
            TestCase { name: "string", input: json!("app::Thing"), expected: Ok("name") },
            TestCase { name: "object", input: json!({}), expected: Ok("settings") },
            TestCase { name: "pairs", input: json!([["adapter", "x"]]), expected: Ok("pairs") },
            TestCase { name: "empty array", input: json!([]), expected: Ok("pairs") },
            TestCase {
                name: "pair with numeric key",
                input: json!([[1, "x"]]),
                expected: Err(invalid_params("array")),
            },
            TestCase {
                name: "flat array",
                input: json!(["adapter", "x"]),
                expected: Err(invalid_params("array")),
            },
            TestCase { name: "number", input: json!(7), expected: Err(invalid_params("number")) },
            TestCase { name: "boolean", input: json!(true), expected: Err(invalid_params("boolean")) },
        ];

        for test_case in test_cases {
            let result = Params::from_value(test_case.input).map(|params| match params {
                Params::None => "none",
                Params::Name(_) => "name",
                Params::Adapter(_) => "adapter",
                Params::Settings(_) => "settings",
                Params::Pairs(_) => "pairs",
            });
            assert_eq!(result, test_case.expected, "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_adapter_and_options_from_value() {
        assert!(matches!(
            AdapterRef::from_value(&json!("app::Thing")),
            Ok(AdapterRef::Name(ref name)) if name == "app::Thing"
        ));
        assert_eq!(
            AdapterRef::from_value(&json!(42)).err(),
            Some(ConversionError::InvalidAdapter {
                received: "number".to_string()
            })
        );

        assert!(matches!(
            OptionsInput::from_value(&json!({ "prop1": 1 })),
            Ok(OptionsInput::Map(ref map)) if map.len() == 1
        ));
        assert_eq!(
            OptionsInput::from_value(&json!("prop1")).err(),
            Some(ConversionError::InvalidOptions {
                received: "string".to_string()
            })
        );
    }
}
