//! Inspect command implementation

use anyhow::{Context, Result};
use rowschema_format::{defs::schema::Schema, schema_message::SchemaMessage};
use rowschema_typing::{SchemaTranslation, TypingContext};
use serde::Serialize;

use crate::commands::validate_file_exists;

#[derive(Serialize)]
struct InspectSummary {
    schema_id: String,
    fields: Vec<FieldSummary>,
    schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct FieldSummary {
    name: String,
    wire_type: String,
    native_type: String,
}

pub fn run(context: &TypingContext, verbose: u8, path: &str) -> Result<()> {
    validate_file_exists(path)?;
    println!("Inspecting schema message: {}", path);

    let schema = read_schema(path)?;
    let fields = describe_fields(context, &schema)?;

    if verbose == 0 {
        println!("Schema id: {}", schema.id);
        for field in &fields {
            println!("  {}: {} => {}", field.name, field.wire_type, field.native_type);
        }
        return Ok(());
    }

    let summary = InspectSummary {
        schema_id: schema.id.clone(),
        fields,
        schema: schema.to_json().context("Failed to render schema as JSON")?,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Reads and validates a sealed schema message.
fn read_schema(path: &str) -> Result<Schema> {
    let message =
        SchemaMessage::load(path).with_context(|| format!("Invalid schema message: {}", path))?;
    message
        .validated_schema()
        .with_context(|| format!("Invalid schema in: {}", path))
}

fn describe_fields(context: &TypingContext, schema: &Schema) -> Result<Vec<FieldSummary>> {
    let translation = SchemaTranslation::new(context);
    schema
        .fields
        .iter()
        .map(|field| -> Result<FieldSummary> {
            let field_type = field.field_type()?;
            let native = translation
                .typing_from_runner_api(field_type)
                .with_context(|| format!("Failed to decode field '{}'", field.name))?;
            Ok(FieldSummary {
                name: field.name.clone(),
                wire_type: field_type.to_string(),
                native_type: native.to_string(),
            })
        })
        .collect()
}
