// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use conversio::config::load_config;
use conversio::conversion::Conversion;
use conversio::registry::TypeRegistry;
use tracing_subscriber::EnvFilter;

use affix::options::AffixOptions;
use affix::Affix;

const DEFAULT_CONFIGS: [&str; 2] = ["configs/convert-nothing.yaml", "configs/affix-demo.yaml"];
const DEFAULT_INPUT: &str = "hello world";

/// Third-party algorithm that wraps text in a configured prefix and suffix.
mod affix {
    use std::sync::Arc;

    use conversio::options::OptionsContainer;
    use conversio::traits::{ConversionAlgorithm, OptionsEnabled, OptionsSlot};

    use self::options::AffixOptions;

    #[derive(Default)]
    pub struct Affix {
        options: OptionsSlot,
    }

    impl Affix {
        fn part(&self, key: &str) -> String {
            self.options
                .downcast::<AffixOptions>()
                .and_then(|options| options.get(key).ok())
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .to_string()
        }
    }

    impl ConversionAlgorithm for Affix {
        fn name(&self) -> &str {
            "Affix"
        }

        fn convert(&self, text: &str) -> String {
            let mut result = self.part("prefix");
            result.push_str(text);
            result.push_str(&self.part("suffix"));
            result
        }

        fn options_enabled(&mut self) -> Option<&mut dyn OptionsEnabled> {
            Some(self)
        }
    }

    impl OptionsEnabled for Affix {
        fn set_options(&mut self, options: Arc<dyn OptionsContainer>) {
            self.options.set(options);
        }
    }

    pub mod options {
        use std::any::Any;

        use conversio::errors::OptionsError;
        use conversio::options::{OptionsContainer, OptionsMap};
        use serde_json::json;

        #[derive(Debug)]
        pub struct AffixOptions {
            map: OptionsMap,
        }

        impl AffixOptions {
            pub fn new() -> Result<Self, OptionsError> {
                Ok(Self {
                    map: OptionsMap::from_schema(json!({
                        "prefix": ["", ">> ", "["],
                        "suffix": ["", " <<", "]"],
                    }))?,
                })
            }
        }

        impl OptionsContainer for AffixOptions {
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
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtin();
    registry
        .register_adapter::<Affix>()
        .register_options(AffixOptions::new);
    registry.register_alias("affix", std::any::type_name::<Affix>());
    registry
}

fn run_single_config(registry: &TypeRegistry, config_file: &str, input: &str) -> anyhow::Result<()> {
    let config = load_config(config_file)
        .with_context(|| format!("Failed to load config {}", config_file))?;

    let conversion = Conversion::from_config(registry.clone(), &config)
        .with_context(|| format!("Failed to configure conversion from {}", config_file))?;

    println!("Config:  {}", config_file);
    println!("Adapter: {}", conversion.adapter_name()?);
    if let Some(options) = conversion.get_options() {
        println!("Options: {}", serde_json::Value::Object(options));
    }
    println!("Output:  {}", conversion.convert(input)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config_files, input) = match args.split_last() {
        Some((input, configs)) if !configs.is_empty() => (
            configs.iter().map(String::as_str).collect::<Vec<_>>(),
            input.as_str(),
        ),
        _ => (DEFAULT_CONFIGS.to_vec(), DEFAULT_INPUT),
    };

    let registry = registry();
    println!("Input: \"{}\"", input);

    for (i, config_file) in config_files.iter().enumerate() {
        if i > 0 {
            println!("{}", "-".repeat(40));
        }
        if let Err(e) = run_single_config(&registry, config_file, input) {
            eprintln!("Failed to run {}: {:#}", config_file, e);
        }
    }

    Ok(())
}
