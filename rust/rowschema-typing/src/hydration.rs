//! Record hydration: synthesizing a constructible record type from a wire
//! schema, and rebuilding record values from sealed schema bytes alone.

use std::sync::Arc;

use rowschema_common::{Result, error::Error};
use rowschema_format::{defs::schema::Schema, schema_message::SchemaMessage};
use serde::{Deserialize, Serialize};

use crate::{
    context::TypingContext,
    row_type::{RecordType, RowValue},
    translation::SchemaTranslation,
    value::Value,
};

/// Name prefix of record types synthesized from schemas.
pub const HYDRATED_TYPE_PREFIX: &str = "RowSchema_";

impl SchemaTranslation<'_> {
    /// Returns the record type for `schema`.
    ///
    /// The type registered under the schema id wins. Otherwise a record type
    /// named `RowSchema_<id>` is synthesized from the decoded fields and
    /// registered under the schema id, so decoding the same id again yields
    /// the same type.
    ///
    /// Every field, including those of nested rows, is checked before
    /// anything is registered. A failed call leaves the registry unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for empty or duplicate field names, and
    /// `SchemaDecode` naming the first field that fails to decode.
    pub fn record_type_from_schema(&self, schema: &Schema) -> Result<Arc<RecordType>> {
        schema.validate()?;
        let registry = self.context().schemas();
        if let Some(record) = registry.get_typing_by_id(&schema.id) {
            return Ok(record);
        }
        self.check_fields_decodable(schema)?;

        let fields = schema
            .fields
            .iter()
            .map(|field| {
                self.record_field_from_runner_api(field)
                    .map_err(|e| Error::schema_decode(format!("{field:?}"), e))
            })
            .collect::<Result<Vec<_>>>()?;
        let record = Arc::new(RecordType::new(
            format!("{HYDRATED_TYPE_PREFIX}{}", schema.id),
            fields,
        ));
        log::debug!(
            "hydrated record type {} with {} fields",
            record.name(),
            record.fields().len()
        );
        registry.add(record.clone(), Arc::new(schema.clone()))?;
        Ok(record)
    }
}

/// A record value that can be rebuilt in another process: the sealed schema
/// message plus the positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableRow {
    pub schema: Vec<u8>,
    pub values: Vec<Value>,
}

impl PortableRow {
    /// Rebuilds the record value, hydrating its type in `context`.
    pub fn hydrate(&self, context: Option<&TypingContext>) -> Result<RowValue> {
        hydrate_row(&self.schema, self.values.clone(), context)
    }
}

impl RowValue {
    /// Captures the value together with the sealed schema of its type.
    pub fn to_portable(&self, context: Option<&TypingContext>) -> Result<PortableRow> {
        let schema = SchemaTranslation::resolve(context).record_type_to_schema(self.record_type())?;
        Ok(PortableRow {
            schema: SchemaMessage::from_schema(&schema).into_bytes(),
            values: self.values().to_vec(),
        })
    }
}

/// Rebuilds a record value from a sealed schema message and positional
/// values.
pub fn hydrate_row(
    schema_bytes: &[u8],
    values: Vec<Value>,
    context: Option<&TypingContext>,
) -> Result<RowValue> {
    let schema = SchemaMessage::new(schema_bytes.to_vec())?.schema()?;
    let record = SchemaTranslation::resolve(context).record_type_from_schema(&schema)?;
    record.construct(values)
}

#[cfg(test)]
mod tests {
    use rowschema_common::error::ErrorKind;
    use rowschema_format::{
        defs::schema::{AtomicType, Field, FieldType, Schema},
        schema_message::SchemaMessage,
    };

    use super::hydrate_row;
    use crate::{
        config::TypingConfig,
        context::TypingContext,
        native::{NativeType, Primitive},
        translation::SchemaTranslation,
        value::Value,
    };

    fn context() -> TypingContext {
        TypingContext::new(TypingConfig::default()).unwrap()
    }

    fn id_name_schema(id: &str) -> Schema {
        Schema {
            fields: vec![
                Field::new("id", FieldType::atomic(AtomicType::Int64)),
                Field::new("name", FieldType::atomic(AtomicType::String).into_nullable()),
            ],
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hydrated_type_is_cached() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        let record = t.record_type_from_schema(&id_name_schema("s1")).unwrap();
        assert_eq!(record.name(), "RowSchema_s1");
        assert_eq!(
            record.fields()[1].1,
            NativeType::optional(Primitive::String.into())
        );
        let again = t.record_type_from_schema(&id_name_schema("s1")).unwrap();
        assert!(std::sync::Arc::ptr_eq(&record, &again));
        assert_eq!(ctx.schemas().get_typing_by_id("s1").unwrap(), record);
    }

    #[test]
    fn test_bad_field_is_wrapped() {
        let ctx = context();
        let mut schema = id_name_schema("bad");
        schema.fields.push(Field::new("broken", FieldType::default()));
        let err = SchemaTranslation::new(&ctx)
            .record_type_from_schema(&schema)
            .unwrap_err();
        match err.kind() {
            ErrorKind::SchemaDecode { field, source } => {
                assert!(field.contains("broken"));
                assert!(matches!(source.kind(), ErrorKind::UnknownWireShape { .. }));
            }
            other => panic!("unexpected error kind {other:?}"),
        }
        assert!(ctx.schemas().get_schema_by_id("bad").is_none());
    }

    #[test]
    fn test_duplicate_field_names_are_rejected() {
        let ctx = context();
        let schema = Schema {
            fields: vec![
                Field::new("x", FieldType::atomic(AtomicType::Int64)),
                Field::new("x", FieldType::atomic(AtomicType::String)),
            ],
            id: "dup".to_string(),
            ..Default::default()
        };
        let t = SchemaTranslation::new(&ctx);
        let err = t.record_type_from_schema(&schema).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
        assert!(t.typing_from_runner_api(&FieldType::row(schema)).is_err());
        assert!(ctx.schemas().is_empty());
    }

    #[test]
    fn test_failed_decode_registers_nothing() {
        let ctx = context();
        let inner = id_name_schema("inner");
        let schema = Schema {
            fields: vec![
                Field::new("nested", FieldType::row(inner)),
                Field::new("broken", FieldType::atomic(AtomicType::Unspecified)),
            ],
            id: "outer".to_string(),
            ..Default::default()
        };
        let err = SchemaTranslation::new(&ctx)
            .record_type_from_schema(&schema)
            .unwrap_err();
        match err.kind() {
            ErrorKind::SchemaDecode { field, .. } => assert!(field.contains("broken")),
            other => panic!("unexpected error kind {other:?}"),
        }
        assert!(ctx.schemas().is_empty());
        assert!(ctx.schemas().get_schema_by_id("inner").is_none());

        let mut deep = id_name_schema("deep");
        deep.fields.push(Field::new("bad", FieldType::default()));
        let schema = Schema {
            fields: vec![
                Field::new("ok", FieldType::row(id_name_schema("sibling"))),
                Field::new("rows", FieldType::array(FieldType::row(deep))),
            ],
            id: "outer2".to_string(),
            ..Default::default()
        };
        assert!(
            SchemaTranslation::new(&ctx)
                .record_type_from_schema(&schema)
                .is_err()
        );
        assert!(ctx.schemas().is_empty());
    }

    #[test]
    fn test_hydrate_row_from_bytes() {
        let ctx = context();
        let bytes = SchemaMessage::from_schema(&id_name_schema("s2")).into_bytes();
        let row = hydrate_row(&bytes, vec![Value::Int64(42), Value::Null], Some(&ctx)).unwrap();
        assert_eq!(row.get("id"), Some(&Value::Int64(42)));

        let mut corrupted = bytes.clone();
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0xff;
        assert!(hydrate_row(&corrupted, vec![], Some(&ctx)).is_err());
    }
}
