// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Naming conventions shared by the facade and options containers.
//!
//! The options-path convention is the integration contract for third-party
//! adapters: an adapter `N::A` whose `name()` is `"Foo"` binds the options type
//! registered at `N::options::FooOptions`.

use crate::config::consts::{OPTIONS_MODULE, OPTIONS_SUFFIX, PATH_SEPARATOR, SETTER_PREFIX};

/// Maps `(adapter namespace, adapter name)` to the path of its options type.
pub type OptionsNaming = fn(namespace: &str, adapter_name: &str) -> String;

/// Default [`OptionsNaming`]: `<namespace>::options::<Name>Options`.
///
/// # Example
/// ```
/// use conversio::registry::conventional_options_path;
///
/// assert_eq!(
///     conventional_options_path("my_crate::adapters", "Foo"),
///     "my_crate::adapters::options::FooOptions"
/// );
/// assert_eq!(conventional_options_path("", "Foo"), "options::FooOptions");
/// ```
pub fn conventional_options_path(namespace: &str, adapter_name: &str) -> String {
    let type_name = format!("{}{}", adapter_name, OPTIONS_SUFFIX);
    if namespace.is_empty() {
        format!("{}{}{}", OPTIONS_MODULE, PATH_SEPARATOR, type_name)
    } else {
        format!(
            "{}{}{}{}{}",
            namespace, PATH_SEPARATOR, OPTIONS_MODULE, PATH_SEPARATOR, type_name
        )
    }
}

/// Module part of a type path: everything before the last `::` segment.
/// Generic arguments are ignored, so `a::B<c::D>` gives `a`.
pub fn namespace_of(type_path: &str) -> &str {
    let base = type_path
        .find('<')
        .map_or(type_path, |generics| &type_path[..generics]);

    base.rsplit_once(PATH_SEPARATOR)
        .map_or("", |(namespace, _)| namespace)
}

/// Setter method name for a settings key: `set_` plus the key in snake case.
/// `adapterOptions`, `adapter-options` and `adapter_options` all map to
/// `set_adapter_options`.
pub fn setter_name(key: &str) -> String {
    let mut name = String::from(SETTER_PREFIX);
    let mut previous_was_separator = true;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !previous_was_separator {
                name.push('_');
            }
            previous_was_separator = true;
        } else if ch.is_uppercase() {
            if !previous_was_separator {
                name.push('_');
            }
            name.extend(ch.to_lowercase());
            previous_was_separator = false;
        } else {
            name.push(ch);
            previous_was_separator = false;
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_of() {
        let test_cases = vec![
            ("conversio::adapter::convert_nothing::ConvertNothing", "conversio::adapter::convert_nothing"),
            ("app::Wrapper<app::inner::Thing>", "app"),
            ("Bare", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(namespace_of(input), expected, "namespace of '{}'", input);
        }
    }

    #[test]
    fn test_setter_name() {
        let test_cases = vec![
            ("adapter", "set_adapter"),
            ("adapterOptions", "set_adapter_options"),
            ("adapter_options", "set_adapter_options"),
            ("adapter-options", "set_adapter_options"),
            ("case_type", "set_case_type"),
            ("Prop1", "set_prop1"),
        ];

        for (key, expected) in test_cases {
            assert_eq!(setter_name(key), expected, "setter for '{}'", key);
        }
    }
}
