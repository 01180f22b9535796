use super::schema::{FieldType, FieldValue, SchemaOption, atomic_type_value::Value};

impl SchemaOption {
    /// Creates a presence-only option: no type, no value.
    pub fn flag(name: impl Into<String>) -> SchemaOption {
        SchemaOption {
            name: name.into(),
            r#type: None,
            value: None,
        }
    }

    /// Creates an option carrying an atomic value, typed after the value's kind.
    pub fn atomic(name: impl Into<String>, value: Value) -> SchemaOption {
        SchemaOption {
            name: name.into(),
            r#type: Some(FieldType::atomic(value.atomic_type())),
            value: Some(FieldValue::atomic(value)),
        }
    }

    pub fn is_flag(&self) -> bool {
        self.r#type.is_none() && self.value.is_none()
    }

    pub fn atomic_value(&self) -> Option<&Value> {
        self.value.as_ref()?.as_atomic()
    }
}
