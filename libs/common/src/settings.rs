//! Environment-backed configuration loading
//!
//! Every service reads its settings from prefixed environment variables,
//! e.g. `DB_HOST` for the `DB` prefix. Values are parsed where possible so
//! numeric fields deserialize straight into integers.

use config::{Config, ConfigError, Environment, Map};
use serde::de::DeserializeOwned;

/// Load a settings struct from environment variables with the given prefix
pub fn load<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    build(environment(prefix))
}

/// Load a settings struct from an explicit variable map instead of the
/// process environment. Keys are full variable names, prefix included.
pub fn load_from<T: DeserializeOwned>(
    prefix: &str,
    vars: Map<String, String>,
) -> Result<T, ConfigError> {
    build(environment(prefix).source(Some(vars)))
}

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .try_parsing(true)
}

fn build<T: DeserializeOwned>(source: Environment) -> Result<T, ConfigError> {
    Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize()
}
