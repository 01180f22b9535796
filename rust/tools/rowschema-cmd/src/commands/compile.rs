//! Compile command implementation

use anyhow::{Context, Result};
use rowschema_format::schema_message::SchemaMessage;
use rowschema_typing::{SchemaTranslation, TypingContext};
use std::fmt::Write as _;

use crate::schema_parser::parse_schema_string;

pub fn run(
    context: &TypingContext,
    schema_str: &str,
    schema_id: Option<String>,
    output_path: Option<String>,
) -> Result<()> {
    let message = compile_schema(context, schema_str, schema_id)?;
    let schema = message.schema().context("Failed to decode compiled schema")?;
    log::info!(
        "compiled schema {} with {} fields into {} bytes",
        schema.id,
        schema.len(),
        message.as_bytes().len()
    );

    match output_path {
        Some(output_file) => {
            message
                .save(&output_file)
                .context("Failed to write schema message")?;
            println!("Schema {} written to: {}", schema.id, output_file);
        }
        None => {
            println!("{}", to_hex(message.as_bytes()));
        }
    }
    Ok(())
}

/// Parses `schema_str` and seals the translated schema.
pub fn compile_schema(
    context: &TypingContext,
    schema_str: &str,
    schema_id: Option<String>,
) -> Result<SchemaMessage> {
    let fields = parse_schema_string(schema_str)?;
    let schema = SchemaTranslation::new(context)
        .named_fields_to_schema(fields, schema_id, &[], &[])
        .context("Failed to translate schema")?;
    Ok(SchemaMessage::from_schema(&schema))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
            let _ = write!(s, "{b:02x}");
            s
        })
}
