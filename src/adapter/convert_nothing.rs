// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::ConversionAlgorithm;

/// Identity algorithm: returns its input unchanged.
///
/// It declares no options type, so binding options to it fails with
/// `OptionsClassNotFound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertNothing;

impl ConversionAlgorithm for ConvertNothing {
    fn name(&self) -> &str {
        "ConvertNothing"
    }

    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}
