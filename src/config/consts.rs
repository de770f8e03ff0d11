/// Settings key redirected to `set_adapter_options` by bulk settings
pub const OPTIONS_KEY: &str = "options";
/// Module segment holding an adapter's options type
pub const OPTIONS_MODULE: &str = "options";
/// Suffix appended to the adapter name to form its options type name
pub const OPTIONS_SUFFIX: &str = "Options";
/// Prefix of conventional setter names
pub const SETTER_PREFIX: &str = "set_";
/// Rust path separator used in type paths
pub const PATH_SEPARATOR: &str = "::";
