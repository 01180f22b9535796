//! Command implementations for rowschema-cmd

use anyhow::{Context, Result};
use rowschema_typing::{TypingContext, config::TypingConfig};
use std::path::Path;

pub mod compile;
pub mod inspect;

/// Builds the typing context the commands translate in.
pub fn create_context(id_prefix: Option<&str>) -> Result<TypingContext> {
    let config = match id_prefix {
        Some(prefix) => TypingConfig::default().with_sequential_ids(prefix),
        None => TypingConfig::default(),
    };
    TypingContext::new(config).context("Invalid typing configuration")
}

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}
