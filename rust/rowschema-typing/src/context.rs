use std::sync::OnceLock;

use rowschema_common::Result;

use crate::{config::TypingConfig, logical::LogicalTypeRegistry, schema_registry::SchemaRegistry};

/// The pair of registries a translation runs against.
///
/// Most callers use the process-wide [`TypingContext::global`] context;
/// explicit contexts give isolated registries (for example, per test).
pub struct TypingContext {
    config: TypingConfig,
    schemas: SchemaRegistry,
    logical_types: LogicalTypeRegistry,
}

static GLOBAL: OnceLock<TypingContext> = OnceLock::new();

impl TypingContext {
    /// Creates a context with fresh registries.
    pub fn new(config: TypingConfig) -> Result<TypingContext> {
        config.validate()?;
        let logical_types = if config.builtin_logical_types {
            LogicalTypeRegistry::with_builtins()?
        } else {
            LogicalTypeRegistry::new()
        };
        Ok(TypingContext {
            schemas: SchemaRegistry::new(&config.schema_ids),
            logical_types,
            config,
        })
    }

    /// The process-wide context, created with the default configuration on
    /// first use.
    pub fn global() -> &'static TypingContext {
        GLOBAL.get_or_init(|| {
            TypingContext::new(TypingConfig::default()).expect("default typing context")
        })
    }

    /// Resolves an optional explicit context to the one to use.
    pub fn resolve(context: Option<&TypingContext>) -> &TypingContext {
        context.unwrap_or_else(|| TypingContext::global())
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn logical_types(&self) -> &LogicalTypeRegistry {
        &self.logical_types
    }
}
