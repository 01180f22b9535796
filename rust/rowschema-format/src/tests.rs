use rowschema_common::error::ErrorKind;

use crate::{
    defs::schema::{AtomicType, FieldType, SchemaOption, atomic_type_value::Value},
    schema_builder::{FieldBuilder, SchemaBuilder},
    schema_message::SchemaMessage,
};

fn populate_test_schema() -> SchemaBuilder {
    let address = SchemaBuilder::with_fields(
        "address",
        [
            FieldBuilder::new("street", FieldType::atomic(AtomicType::String)),
            FieldBuilder::new("zip", FieldType::atomic(AtomicType::Int32).into_nullable()),
        ],
    )
    .unwrap()
    .finish();

    let mut builder = SchemaBuilder::new("customer");
    builder
        .add_field(
            FieldBuilder::new("id", FieldType::atomic(AtomicType::Int64))
                .with_options([SchemaOption::atomic("max_value", Value::Int64(8))]),
        )
        .unwrap();
    builder
        .add_field(
            FieldBuilder::new("name", FieldType::atomic(AtomicType::String).into_nullable())
                .with_description("display name"),
        )
        .unwrap();
    builder
        .add_field(FieldBuilder::new(
            "scores",
            FieldType::map(
                FieldType::atomic(AtomicType::String),
                FieldType::atomic(AtomicType::Double),
            ),
        ))
        .unwrap();
    builder
        .add_field(FieldBuilder::new(
            "addresses",
            FieldType::array(FieldType::row(address)),
        ))
        .unwrap();
    builder.add_option(SchemaOption::flag("sorted"));
    builder
}

#[test]
fn test_build_schema() {
    let builder = populate_test_schema();
    assert_eq!(builder.fields().len(), 4);
    assert!(builder.find_field("scores").is_some());
    assert!(builder.find_field("missing").is_none());

    let schema = builder.finish();
    assert_eq!(schema.id, "customer");
    assert_eq!(schema.fields[1].description, "display name");
    assert!(schema.fields[1].field_type().unwrap().nullable);
    assert!(!schema.encoding_positions_set);
    assert!(schema.options[0].is_flag());
    assert_eq!(
        schema.fields[0].options[0].atomic_value(),
        Some(&Value::Int64(8))
    );
    schema.validate().unwrap();
}

#[test]
fn test_duplicate_field_rejected() {
    let mut builder = SchemaBuilder::new("dup");
    builder
        .add_field(FieldBuilder::new("a", FieldType::atomic(AtomicType::Int64)))
        .unwrap();
    let err = builder
        .add_field(FieldBuilder::new("a", FieldType::atomic(AtomicType::String)))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));

    let err = builder
        .add_field(FieldBuilder::new("", FieldType::atomic(AtomicType::String)))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    assert_eq!(builder.fields().len(), 1);
}

#[test]
fn test_encoding_positions() {
    let schema = SchemaBuilder::with_fields(
        "positions",
        [
            FieldBuilder::new("a", FieldType::atomic(AtomicType::Int64)),
            FieldBuilder::new("b", FieldType::atomic(AtomicType::Int64)),
        ],
    )
    .unwrap()
    .with_encoding_positions()
    .finish();
    assert!(schema.encoding_positions_set);
    assert_eq!(schema.fields[1].encoding_position, 1);
}

#[test]
fn test_sealed_schema_roundtrip() {
    let message: SchemaMessage = populate_test_schema().into();
    let decoded = SchemaMessage::new(message.clone().into_bytes())
        .unwrap()
        .validated_schema()
        .unwrap();
    assert_eq!(decoded, populate_test_schema().finish());
    assert_eq!(
        decoded.find_field("addresses").unwrap().field_type().unwrap().to_string(),
        "ARRAY<ROW<street: STRING, zip: INT32?>>"
    );
}
