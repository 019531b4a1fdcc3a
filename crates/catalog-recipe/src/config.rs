//! Runtime configuration loaded from the environment.

use thiserror::Error;

/// Default capacity of the product actor's request channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings for the catalog system.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Requests that may queue for the product actor before callers wait.
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `CATALOG_CHANNEL_CAPACITY` | no       | `32`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_capacity = match lookup("CATALOG_CHANNEL_CAPACITY") {
            Some(raw) => parse_positive("CATALOG_CHANNEL_CAPACITY", &raw)?,
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self { channel_capacity })
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_reads_channel_capacity() {
        let config = CatalogConfig::from_lookup(|name| {
            (name == "CATALOG_CHANNEL_CAPACITY").then(|| " 8 ".to_string())
        })
        .unwrap();
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        for raw in ["0", "-1", "many"] {
            let result = CatalogConfig::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(
                result,
                Err(ConfigError::InvalidValue {
                    name: "CATALOG_CHANNEL_CAPACITY",
                    value: raw.to_string(),
                })
            );
        }
    }
}
