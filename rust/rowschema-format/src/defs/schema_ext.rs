use ahash::AHashSet;
use rowschema_common::{Result, error::Error, result::required, verify_data};

use super::schema::{Field, FieldType, Schema, field_type::TypeInfo};

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Field {
        Field {
            name: name.into(),
            r#type: Some(field_type),
            ..Default::default()
        }
    }

    /// Returns the field type, failing when the message omits it.
    pub fn field_type(&self) -> Result<&FieldType> {
        required(self.r#type.as_ref(), "field.type")
    }
}

impl Schema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finds a top-level field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Checks the structural invariants of a schema received from the wire:
    /// field names are non-empty and unique and every field carries a type.
    /// Nested row schemas are checked recursively.
    pub fn validate(&self) -> Result<()> {
        let mut names = AHashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            verify_data!(field.name, !field.name.is_empty());
            if !names.insert(field.name.as_str()) {
                return Err(Error::invalid_format(format!(
                    "schema '{}': duplicate field '{}'",
                    self.id, field.name
                )));
            }
            validate_nested(field.field_type()?)?;
        }
        Ok(())
    }

    /// Returns the schema as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::invalid_arg("schema", e.to_string()))
    }

    /// Returns the schema as a JSON string, pretty-printed when `indent > 0`.
    pub fn to_json_string(&self, indent: usize) -> Result<String> {
        let res = if indent == 0 {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        res.map_err(|e| Error::invalid_arg("schema", e.to_string()))
    }
}

fn validate_nested(field_type: &FieldType) -> Result<()> {
    match &field_type.type_info {
        Some(TypeInfo::ArrayType(array)) => {
            if let Some(element) = &array.element_type {
                validate_nested(element)?;
            }
        }
        Some(TypeInfo::MapType(map)) => {
            if let Some(key) = &map.key_type {
                validate_nested(key)?;
            }
            if let Some(value) = &map.value_type {
                validate_nested(value)?;
            }
        }
        Some(TypeInfo::RowType(row)) => {
            required(row.schema.as_ref(), "row_type.schema")?.validate()?;
        }
        _ => (),
    }
    Ok(())
}
