use std::{collections::HashMap, sync::Arc};

use rowschema_common::error::ErrorKind;
use rowschema_format::defs::schema::{AtomicType, Field, FieldType, Schema};
use rowschema_typing::{
    NamedOption, NativeType, Primitive, RecordType, RowTypeConstraint, SchemaTranslation,
    Timestamp, TypingContext, Value,
    config::TypingConfig,
    logical::{LogicalType, MICROS_INSTANT_URN, MicrosInstant},
    native_record,
};

fn context() -> TypingContext {
    TypingContext::new(TypingConfig::default()).unwrap()
}

#[allow(dead_code)]
struct Order {
    id: i64,
    customer: Option<String>,
    lines: Vec<String>,
    attributes: HashMap<String, f64>,
}

native_record!(Order {
    id: i64,
    customer: Option<String>,
    lines: Vec<String>,
    attributes: HashMap<String, f64>,
});

#[test]
fn test_named_fields_scenario() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);
    let schema = t
        .named_fields_to_schema(
            [
                ("a", Primitive::Int.into()),
                ("b", NativeType::sequence(Primitive::String.into())),
            ],
            None,
            &[],
            &[],
        )
        .unwrap();

    assert!(!schema.id.is_empty());
    assert_eq!(schema.fields.len(), 2);
    let a = schema.fields[0].field_type().unwrap();
    assert_eq!(a, &FieldType::atomic(AtomicType::Int64));
    assert!(!a.nullable);
    let b = schema.fields[1].field_type().unwrap();
    assert_eq!(b, &FieldType::array(FieldType::atomic(AtomicType::String)));
    assert!(!b.nullable);

    let fields = t.named_fields_from_schema(&schema).unwrap();
    assert_eq!(
        fields,
        vec![
            ("a".to_string(), Primitive::I64.into()),
            (
                "b".to_string(),
                NativeType::sequence(Primitive::String.into())
            ),
        ]
    );

    let other = t
        .named_fields_to_schema([("a", NativeType::Any)], None, &[], &[])
        .unwrap();
    assert_ne!(other.id, schema.id);
    assert!(ctx.schemas().is_empty());
}

#[test]
fn test_record_translation_is_deduplicated() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);
    let order = NativeType::of::<Order>();

    let first = t.typing_to_runner_api(&order).unwrap();
    let second = t.typing_to_runner_api(&NativeType::of::<Order>()).unwrap();
    let schema = first.row_schema().unwrap();
    assert_eq!(schema.id, second.row_schema().unwrap().id);
    assert_eq!(ctx.schemas().len(), 1);
    assert_eq!(
        schema.field_names().collect::<Vec<_>>(),
        vec!["id", "customer", "lines", "attributes"]
    );
    assert_eq!(
        schema.find_field("attributes").unwrap().field_type().unwrap(),
        &FieldType::map(
            FieldType::atomic(AtomicType::String),
            FieldType::atomic(AtomicType::Double)
        )
    );

    let record = order.as_record_type().unwrap();
    assert_eq!(
        ctx.schemas().get_id_by_typing(record).as_deref(),
        Some(schema.id.as_str())
    );

    let decoded = t.typing_from_runner_api(&first).unwrap();
    match decoded {
        NativeType::Row(constraint) => {
            assert_eq!(constraint.user_type(), record);
            assert_eq!(constraint.schema_id(), Some(schema.id.as_str()));
        }
        other => panic!("expected a row, got {other}"),
    }
}

#[test]
fn test_concurrent_translation_agrees_on_schema_id() {
    let ctx = Arc::new(context());
    let handles = (0..8)
        .map(|_| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                SchemaTranslation::new(&ctx)
                    .typing_to_runner_api(&NativeType::of::<Order>())
                    .unwrap()
                    .row_schema()
                    .unwrap()
                    .id
                    .clone()
            })
        })
        .collect::<Vec<_>>();
    let ids = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(ctx.schemas().len(), 1);
}

#[test]
fn test_row_constraint_with_options() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);
    let constraint = RowTypeConstraint::from_fields(vec![
        ("id".to_string(), Primitive::I64.into()),
        (
            "score".to_string(),
            NativeType::optional(Primitive::F64.into()),
        ),
    ])
    .with_schema_id("scores-v1")
    .with_schema_options(vec![NamedOption::flag("sorted")])
    .with_field_options(vec![(
        "id".to_string(),
        vec![NamedOption::new("max_value", 8i64)],
    )]);

    let wire = t.typing_to_runner_api(&NativeType::row(constraint)).unwrap();
    let schema = wire.row_schema().unwrap();
    assert_eq!(schema.id, "scores-v1");
    assert!(schema.options[0].is_flag());
    assert_eq!(schema.fields[0].options[0].name, "max_value");
    assert!(schema.fields[1].options.is_empty());

    match t.typing_from_runner_api(&wire).unwrap() {
        NativeType::Row(decoded) => {
            assert_eq!(decoded.schema_options(), &[NamedOption::flag("sorted")]);
            assert_eq!(
                decoded.field_options("id"),
                &[NamedOption::new("max_value", 8i64)]
            );
            assert!(decoded.field_options("score").is_empty());
        }
        other => panic!("expected a row, got {other}"),
    }
}

#[test]
fn test_wire_schema_passes_through() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);
    let schema = Schema {
        fields: vec![Field::new("x", FieldType::atomic(AtomicType::Int32))],
        id: "given".to_string(),
        ..Default::default()
    };
    let wire = t
        .typing_to_runner_api(&NativeType::schema(schema.clone()))
        .unwrap();
    assert_eq!(wire, FieldType::row(schema.clone()));
    assert_eq!(
        t.schema_from_element_type(&NativeType::schema(schema.clone()))
            .unwrap(),
        schema
    );
}

#[test]
fn test_element_type_schemas() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);

    let order = NativeType::of::<Order>();
    let schema = t.schema_from_element_type(&order).unwrap();
    assert_eq!(t.schema_from_element_type(&order).unwrap().id, schema.id);
    let fields = t.named_fields_from_element_type(&order).unwrap();
    assert_eq!(fields[0], ("id".to_string(), Primitive::I64.into()));

    let row = NativeType::row(RowTypeConstraint::from_fields(vec![(
        "n".to_string(),
        Primitive::Int.into(),
    )]));
    let first = t.schema_from_element_type(&row).unwrap();
    let second = t.schema_from_element_type(&row).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(
        t.named_fields_from_element_type(&row).unwrap(),
        vec![("n".to_string(), Primitive::I64.into())]
    );

    let err = t
        .schema_from_element_type(&NativeType::sequence(Primitive::I64.into()))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
}

#[test]
fn test_timestamp_logical_type() {
    let ctx = context();
    let t = SchemaTranslation::new(&ctx);

    let wire = t
        .typing_to_runner_api(&NativeType::of::<Timestamp>())
        .unwrap();
    let logical = wire.logical_type().unwrap();
    assert_eq!(logical.urn, MICROS_INSTANT_URN);
    assert!(logical.argument_type.is_none());
    let representation = logical.representation.as_deref().unwrap();
    assert_eq!(
        representation.row_schema().unwrap().field_names().collect::<Vec<_>>(),
        vec!["seconds", "micros"]
    );
    assert_eq!(
        t.typing_from_runner_api(&wire).unwrap(),
        NativeType::of::<Timestamp>()
    );

    let nullable = t
        .typing_to_runner_api(&NativeType::of::<Option<Timestamp>>())
        .unwrap();
    assert!(nullable.nullable);
    assert_eq!(
        t.typing_from_runner_api(&nullable).unwrap(),
        NativeType::of::<Option<Timestamp>>()
    );
}

#[test]
fn test_logical_type_registration_errors() {
    let ctx = context();
    let err = ctx
        .logical_types()
        .register::<MicrosInstant>()
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::DuplicateUrn { urn } if urn == MICROS_INSTANT_URN));

    let bare = TypingContext::new(TypingConfig {
        builtin_logical_types: false,
        ..Default::default()
    })
    .unwrap();
    let wire = SchemaTranslation::new(&ctx)
        .typing_to_runner_api(&NativeType::of::<Timestamp>())
        .unwrap();
    let err = SchemaTranslation::new(&bare)
        .typing_from_runner_api(&wire)
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnknownUrn { .. }));

    // Without the logical type, timestamps degrade to the any-sentinel.
    let degraded = SchemaTranslation::new(&bare)
        .typing_to_runner_api(&NativeType::of::<Timestamp>())
        .unwrap();
    assert!(degraded.nullable);
    assert_eq!(
        SchemaTranslation::new(&bare)
            .typing_from_runner_api(&degraded)
            .unwrap(),
        NativeType::Any
    );
}

struct Percent;

impl LogicalType for Percent {
    fn urn() -> &'static str {
        "test:logical_type:percent:v1"
    }

    fn language_type() -> NativeType {
        NativeType::named("Percent")
    }

    fn representation_type() -> NativeType {
        Primitive::F64.into()
    }

    fn argument_type() -> Option<NativeType> {
        Some(Primitive::I32.into())
    }

    fn to_representation(value: &Value) -> rowschema_common::Result<Value> {
        Ok(value.clone())
    }

    fn to_language(value: &Value) -> rowschema_common::Result<Value> {
        Ok(value.clone())
    }
}

#[test]
fn test_logical_type_with_argument() {
    let ctx = context();
    ctx.logical_types().register::<Percent>().unwrap();
    let t = SchemaTranslation::new(&ctx);

    let record = NativeType::record(RecordType::new(
        "Measurement",
        vec![("ratio".to_string(), NativeType::named("Percent"))],
    ));
    let wire = t.typing_to_runner_api(&record).unwrap();
    let ratio = wire.row_schema().unwrap().fields[0].field_type().unwrap();
    let logical = ratio.logical_type().unwrap();
    assert_eq!(logical.urn, Percent::urn());
    assert_eq!(
        logical.argument_type.as_deref(),
        Some(&FieldType::atomic(AtomicType::Int32))
    );
    assert_eq!(
        t.typing_from_runner_api(ratio).unwrap(),
        NativeType::named("Percent")
    );
}

#[test]
fn test_global_context_registration() {
    struct GlobalOnly;

    impl LogicalType for GlobalOnly {
        fn urn() -> &'static str {
            "test:logical_type:global_only:v1"
        }

        fn language_type() -> NativeType {
            NativeType::named("GlobalOnly")
        }

        fn representation_type() -> NativeType {
            Primitive::Bytes.into()
        }

        fn to_representation(value: &Value) -> rowschema_common::Result<Value> {
            Ok(value.clone())
        }

        fn to_language(value: &Value) -> rowschema_common::Result<Value> {
            Ok(value.clone())
        }
    }

    rowschema_typing::register_logical_type::<GlobalOnly>().unwrap();
    let wire =
        rowschema_typing::typing_to_runner_api(&NativeType::named("GlobalOnly"), None).unwrap();
    assert_eq!(wire.logical_type().unwrap().urn, GlobalOnly::urn());
    assert_eq!(
        rowschema_typing::typing_from_runner_api(&wire, None).unwrap(),
        NativeType::named("GlobalOnly")
    );

    // Isolated contexts don't see registrations on the global one.
    let isolated = rowschema_typing::typing_to_runner_api(
        &NativeType::named("GlobalOnly"),
        Some(&context()),
    )
    .unwrap();
    assert!(isolated.nullable);
}
