//! Configuration of a typing context.

use rowschema_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

/// Default prefix of sequential schema ids.
pub const DEFAULT_ID_PREFIX: &str = "schema-";

/// How fresh schema ids are generated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaIdStrategy {
    /// Random UUID v4 strings.
    #[default]
    Uuid,
    /// `<prefix><n>` with `n` counting up from 1 per registry.
    Sequential { prefix: String },
}

/// Configuration for a [`TypingContext`](crate::context::TypingContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Strategy for generating schema ids.
    pub schema_ids: SchemaIdStrategy,
    /// Whether the built-in logical types are registered on creation.
    pub builtin_logical_types: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            schema_ids: SchemaIdStrategy::Uuid,
            builtin_logical_types: true,
        }
    }
}

impl TypingConfig {
    /// Uses sequential schema ids with the given prefix.
    pub fn with_sequential_ids(mut self, prefix: impl Into<String>) -> Self {
        self.schema_ids = SchemaIdStrategy::Sequential {
            prefix: prefix.into(),
        };
        self
    }

    /// Parses a configuration from JSON, filling in defaults for missing keys.
    pub fn from_json(json: &str) -> Result<TypingConfig> {
        let config: TypingConfig = serde_json::from_str(json)
            .map_err(|e| Error::invalid_arg("typing config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let SchemaIdStrategy::Sequential { prefix } = &self.schema_ids {
            if prefix.is_empty() {
                return Err(Error::invalid_arg(
                    "schema_ids.prefix",
                    "sequential id prefix must not be empty",
                ));
            }
            if prefix.chars().any(char::is_whitespace) {
                return Err(Error::invalid_arg(
                    "schema_ids.prefix",
                    format!("sequential id prefix '{prefix}' contains whitespace"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SchemaIdStrategy, TypingConfig};

    #[test]
    fn test_default_is_valid() {
        let config = TypingConfig::default();
        assert_eq!(config.schema_ids, SchemaIdStrategy::Uuid);
        assert!(config.builtin_logical_types);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_prefix() {
        assert!(TypingConfig::default().with_sequential_ids("").validate().is_err());
        assert!(TypingConfig::default().with_sequential_ids("a b").validate().is_err());
        TypingConfig::default()
            .with_sequential_ids("tbl-")
            .validate()
            .unwrap();
    }

    #[test]
    fn test_from_json() {
        let config = TypingConfig::from_json(
            r#"{"schema_ids": {"kind": "sequential", "prefix": "t"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.schema_ids,
            SchemaIdStrategy::Sequential {
                prefix: "t".to_string()
            }
        );
        assert!(config.builtin_logical_types);

        assert!(TypingConfig::from_json(r#"{"builtin_logical_types": false}"#).is_ok());
        assert!(
            TypingConfig::from_json(r#"{"schema_ids": {"kind": "sequential", "prefix": ""}}"#)
                .is_err()
        );
    }
}
