//! Mapping configuration loaded from the environment

use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::backends::SqlDialect;

/// Default suffix of generic collection wrappers that hold the related side
/// of a one-to-many association (`EntitySet<Order>`).
pub const DEFAULT_ENTITY_SET_SUFFIX: &str = "Set";

/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    EnvVar(String),
    Default(String),
}

/// Configuration for the mapping subsystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    /// SQL dialect whose provider renders vendor-specific fragments
    pub dialect: SqlDialect,
    /// Name suffix identifying entity-set wrappers around association targets
    pub entity_set_suffix: String,
    /// Whether descriptors are cached per type for the process lifetime
    pub cache_descriptors: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::PostgreSQL,
            entity_set_suffix: DEFAULT_ENTITY_SET_SUFFIX.to_string(),
            cache_descriptors: true,
        }
    }
}

impl MappingConfig {
    /// Load configuration from `ORM_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let dialect = get_env_or_default("ORM_DIALECT", "postgresql");
        let dialect = SqlDialect::from_str(&dialect)?;

        let entity_set_suffix = get_env_or_default("ORM_ENTITY_SET_SUFFIX", DEFAULT_ENTITY_SET_SUFFIX);

        let cache_descriptors = get_env_or_default("ORM_CACHE_DESCRIPTORS", "true");
        let cache_descriptors = parse_bool("cache_descriptors", &cache_descriptors)?;

        let config = MappingConfig {
            dialect,
            entity_set_suffix,
            cache_descriptors,
        };
        config.validate()?;

        tracing::debug!(
            "Loaded mapping configuration: dialect={}, entity_set_suffix={}, cache_descriptors={}",
            config.dialect,
            config.entity_set_suffix,
            config.cache_descriptors
        );

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity_set_suffix.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "entity_set_suffix".to_string(),
                reason: "Entity set suffix cannot be empty".to_string(),
            });
        }

        if self.entity_set_suffix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed {
                field: "entity_set_suffix".to_string(),
                reason: "Entity set suffix cannot contain whitespace".to_string(),
            });
        }

        Ok(())
    }

    /// Report which environment variable (or default) feeds each field
    pub fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let mut sources = HashMap::new();
        for (field, var) in [
            ("dialect", "ORM_DIALECT"),
            ("entity_set_suffix", "ORM_ENTITY_SET_SUFFIX"),
            ("cache_descriptors", "ORM_CACHE_DESCRIPTORS"),
        ] {
            let source = if env::var(var).is_ok() {
                ConfigSource::EnvVar(var.to_string())
            } else {
                ConfigSource::Default(var.to_string())
            };
            sources.insert(field.to_string(), source);
        }
        sources
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue { field: String, value: String, expected: String },

    #[error("Validation failed for {field}: {reason}")]
    ValidationFailed { field: String, reason: String },
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: "true or false".to_string(),
        }),
    }
}
