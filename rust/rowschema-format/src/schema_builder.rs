use std::{borrow::Borrow, hash::Hash};

use ahash::AHashMap;
use rowschema_common::{Result, error::Error, verify_arg};

use crate::{
    defs::schema::{Field, FieldType, Schema, SchemaOption},
    schema_message::SchemaMessage,
};

/// A builder for a wire `Schema`: an id, ordered uniquely named fields and
/// schema-level options.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    id: String,
    fields: Vec<FieldBuilder>,
    /// A map from field names to their indices in the `fields` vector.
    field_map: AHashMap<String, usize>,
    options: Vec<SchemaOption>,
    encoding_positions: bool,
}

impl SchemaBuilder {
    /// Creates an empty builder for the schema with the given id.
    pub fn new(id: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            id: id.into(),
            fields: Vec::new(),
            field_map: AHashMap::new(),
            options: Vec::new(),
            encoding_positions: false,
        }
    }

    /// Creates a builder pre-populated with `fields`.
    pub fn with_fields(
        id: impl Into<String>,
        fields: impl IntoIterator<Item = FieldBuilder>,
    ) -> Result<SchemaBuilder> {
        let mut builder = SchemaBuilder::new(id);
        for field in fields {
            builder.add_field(field)?;
        }
        Ok(builder)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Adds a field to the schema.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` when the field name is empty or already
    /// present in the schema.
    pub fn add_field(&mut self, field: FieldBuilder) -> Result<()> {
        verify_arg!(field_name, !field.name().is_empty());
        if self.field_map.contains_key(field.name()) {
            return Err(Error::invalid_arg(
                "field_name",
                format!("duplicate field '{}' in schema '{}'", field.name(), self.id),
            ));
        }
        self.field_map
            .insert(field.name().to_string(), self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    pub fn add_option(&mut self, option: SchemaOption) {
        self.options.push(option);
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = SchemaOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Numbers the fields by their position and marks the schema as carrying
    /// explicit encoding positions.
    pub fn with_encoding_positions(mut self) -> Self {
        self.encoding_positions = true;
        self
    }

    pub fn fields(&self) -> &[FieldBuilder] {
        &self.fields
    }

    pub fn options(&self) -> &[SchemaOption] {
        &self.options
    }

    /// Finds a field by name and returns a reference to it.
    pub fn find_field<Q>(&self, name: &Q) -> Option<&FieldBuilder>
    where
        Q: Hash + Eq + ?Sized,
        String: Borrow<Q>,
    {
        self.field_map.get(name).map(|&i| &self.fields[i])
    }

    pub fn find_field_mut<Q>(&mut self, name: &Q) -> Option<&mut FieldBuilder>
    where
        Q: Hash + Eq + ?Sized,
        String: Borrow<Q>,
    {
        self.field_map.get(name).map(|&i| &mut self.fields[i])
    }

    /// Finishes building the schema and returns it.
    pub fn finish(self) -> Schema {
        let encoding_positions = self.encoding_positions;
        let fields = self
            .fields
            .into_iter()
            .enumerate()
            .map(|(i, field)| {
                let mut field = field.finish();
                if encoding_positions {
                    field.encoding_position = i as i32;
                }
                field
            })
            .collect();
        Schema {
            fields,
            id: self.id,
            options: self.options,
            encoding_positions_set: encoding_positions,
        }
    }

    /// Finishes building the schema and returns it as a sealed message.
    pub fn finish_and_seal(self) -> SchemaMessage {
        SchemaMessage::from_schema(&self.finish())
    }
}

/// A builder for one field of a schema.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    field_type: FieldType,
    description: String,
    options: Vec<SchemaOption>,
}

impl FieldBuilder {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            field_type,
            description: String::new(),
            options: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> FieldBuilder {
        self.description = description.into();
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = SchemaOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.field_type.nullable = nullable;
    }

    pub fn add_option(&mut self, option: SchemaOption) {
        self.options.push(option);
    }

    pub fn options(&self) -> &[SchemaOption] {
        &self.options
    }

    pub fn finish(self) -> Field {
        Field {
            name: self.name,
            description: self.description,
            r#type: Some(self.field_type),
            id: 0,
            encoding_position: 0,
            options: self.options,
        }
    }
}

impl From<Field> for FieldBuilder {
    fn from(field: Field) -> FieldBuilder {
        FieldBuilder {
            name: field.name,
            field_type: field.r#type.unwrap_or_default(),
            description: field.description,
            options: field.options,
        }
    }
}
