use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Prefix for environment overrides, e.g. `DSHPC_SUM__A=2.5` or `DSHPC_GREETING__NAME=World`.
pub const ENV_PREFIX: &str = "DSHPC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub sum: SumConfig,
    pub greeting: GreetingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumConfig {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sum: SumConfig { a: 5.0, b: 3.0 },
            greeting: GreetingConfig {
                name: "DSHPC".to_string(),
            },
        }
    }
}

impl Config {
    /// Load with an optional file layered between the defaults and the environment.
    ///
    /// Values are passed through untouched; NaN or infinite operands are left
    /// for the operations to reject.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("sum.a", defaults.sum.a)?
            .set_default("sum.b", defaults.sum.b)?
            .set_default("greeting.name", defaults.greeting.name)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.sum.a, 5.0);
        assert_eq!(config.sum.b, 3.0);
        assert_eq!(config.greeting.name, "DSHPC");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::load_from(Some(Path::new(
            "/path/that/definitely/does/not/exist/dshpc.toml",
        )));
        assert!(result.is_err());
    }
}
