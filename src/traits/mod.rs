pub mod adapter;

pub use adapter::{ConversionAlgorithm, OptionsEnabled, OptionsSlot};
