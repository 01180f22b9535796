//! Bidirectional translation between native type descriptors and wire
//! field types and schemas.
//!
//! Native types are classified structurally, in a fixed priority order:
//! already-translated schemas, rows, records, primitives, mappings,
//! optionals and sequences. Anything else is handed to the logical type
//! registry; types no logical type claims are emitted as the nullable
//! any-sentinel rather than failing.
//!
//! Row-shaped types consult the schema registry so a record type is
//! translated into a schema once and reused afterwards.

use std::sync::Arc;

use rowschema_common::{Result, error::Error, result::required};
use rowschema_format::{
    defs::schema::{
        AtomicType, Field, FieldType, FieldValue, Schema, SchemaOption, field_type::TypeInfo,
    },
    schema_builder::{FieldBuilder, SchemaBuilder},
};

use crate::{
    context::TypingContext,
    logical::{ANY_URN, LogicalType},
    native::NativeType,
    primitives,
    row_type::{RecordType, RowTypeConstraint},
    value::NamedOption,
};

/// Named options per field, in field order.
pub type FieldOptions = Vec<(String, Vec<NamedOption>)>;

/// Translation entry points bound to one [`TypingContext`].
#[derive(Clone, Copy)]
pub struct SchemaTranslation<'a> {
    context: &'a TypingContext,
}

impl<'a> SchemaTranslation<'a> {
    pub fn new(context: &'a TypingContext) -> SchemaTranslation<'a> {
        SchemaTranslation { context }
    }

    /// Binds to `context`, or to the process-wide context when `None`.
    pub fn resolve(context: Option<&'a TypingContext>) -> SchemaTranslation<'a> {
        SchemaTranslation::new(TypingContext::resolve(context))
    }

    pub fn context(&self) -> &'a TypingContext {
        self.context
    }

    /// Translates a native type into a wire field type.
    ///
    /// Never fails on types it cannot classify: those become the nullable
    /// any-sentinel. Errors come from options that can't be encoded and
    /// from schema registry conflicts.
    pub fn typing_to_runner_api(&self, ty: &NativeType) -> Result<FieldType> {
        match ty {
            NativeType::Schema(schema) => Ok(FieldType::row(schema.schema().clone())),
            NativeType::Row(constraint) => self.row_to_runner_api(constraint),
            NativeType::Record(record) => {
                self.row_to_runner_api(&RowTypeConstraint::from_record_type(record.clone()))
            }
            NativeType::Primitive(p) => Ok(FieldType::atomic(primitives::primitive_to_atomic(*p))),
            NativeType::Mapping(key, value) => Ok(FieldType::map(
                self.typing_to_runner_api(key)?,
                self.typing_to_runner_api(value)?,
            )),
            NativeType::Optional(inner) => Ok(self.typing_to_runner_api(inner)?.into_nullable()),
            NativeType::Sequence(element) => {
                Ok(FieldType::array(self.typing_to_runner_api(element)?))
            }
            NativeType::Named(_) | NativeType::Any => self.logical_to_runner_api(ty),
        }
    }

    fn row_to_runner_api(&self, constraint: &RowTypeConstraint) -> Result<FieldType> {
        let registry = self.context.schemas();
        let schema_id = constraint
            .schema_id()
            .map(str::to_string)
            .or_else(|| registry.get_id_by_typing(constraint.user_type()));

        if let Some(schema) = schema_id
            .as_deref()
            .and_then(|id| registry.get_schema_by_id(id))
        {
            return Ok(FieldType::row((*schema).clone()));
        }

        let schema_id = schema_id.unwrap_or_else(|| registry.generate_new_id());
        log::debug!(
            "generating schema {schema_id} for record type {}",
            constraint.user_type().name()
        );
        let schema = self.named_fields_to_schema(
            constraint.fields().iter().cloned(),
            Some(schema_id),
            constraint.schema_options(),
            constraint.all_field_options(),
        )?;
        let schema =
            registry.register_or_existing(constraint.user_type().clone(), Arc::new(schema))?;
        Ok(FieldType::row((*schema).clone()))
    }

    fn logical_to_runner_api(&self, ty: &NativeType) -> Result<FieldType> {
        match self.context.logical_types().from_typing(ty) {
            Ok(entry) => {
                let representation = self.typing_to_runner_api(&entry.representation_type)?;
                let argument_type = entry
                    .argument_type
                    .as_ref()
                    .map(|t| self.typing_to_runner_api(t))
                    .transpose()?;
                Ok(FieldType::logical(
                    entry.urn.clone(),
                    Some(representation),
                    argument_type,
                ))
            }
            Err(e) if e.is_unsupported_type() => {
                log::debug!("no logical type for {ty}, falling back to {ANY_URN}");
                Ok(FieldType::logical(ANY_URN, None, None).into_nullable())
            }
            Err(e) => Err(e),
        }
    }

    /// Translates a wire field type into a native type.
    ///
    /// # Errors
    ///
    /// `UnknownWireShape` for iterable types and unset type info,
    /// `UnknownAtomicType` for atomic values outside the known set,
    /// `UnknownUrn` for unregistered logical types, and `SchemaDecode` for
    /// nested row schemas with undecodable fields.
    pub fn typing_from_runner_api(&self, field_type: &FieldType) -> Result<NativeType> {
        if field_type.nullable {
            let base = self.typing_from_runner_api(&field_type.clone().with_nullable(false))?;
            return Ok(match base {
                NativeType::Any => NativeType::Any,
                base => NativeType::optional(base),
            });
        }

        match &field_type.type_info {
            Some(TypeInfo::AtomicType(v)) => Ok(primitives::decode_atomic(*v)?.into()),
            Some(TypeInfo::ArrayType(array)) => Ok(NativeType::sequence(
                self.typing_from_runner_api(required(
                    array.element_type.as_deref(),
                    "array_type.element_type",
                )?)?,
            )),
            Some(TypeInfo::MapType(map)) => Ok(NativeType::mapping(
                self.typing_from_runner_api(required(
                    map.key_type.as_deref(),
                    "map_type.key_type",
                )?)?,
                self.typing_from_runner_api(required(
                    map.value_type.as_deref(),
                    "map_type.value_type",
                )?)?,
            )),
            Some(TypeInfo::RowType(row)) => {
                let schema = required(row.schema.as_ref(), "row_type.schema")?;
                self.row_from_runner_api(schema)
            }
            Some(TypeInfo::LogicalType(logical)) => {
                if logical.urn == ANY_URN {
                    return Ok(NativeType::Any);
                }
                let entry = self.context.logical_types().from_runner_api(logical)?;
                Ok(entry.language_type.clone())
            }
            Some(TypeInfo::IterableType(_)) | None => {
                Err(Error::unknown_wire_shape(field_type.type_info_name()))
            }
        }
    }

    fn row_from_runner_api(&self, schema: &Schema) -> Result<NativeType> {
        let schema_options = self.options_from_runner_api(&schema.options)?;
        let mut field_options = FieldOptions::new();
        for field in &schema.fields {
            if !field.options.is_empty() {
                field_options.push((
                    field.name.clone(),
                    self.options_from_runner_api(&field.options)?,
                ));
            }
        }

        let user_type = match self.context.schemas().get_typing_by_id(&schema.id) {
            Some(user_type) => user_type,
            None => self.record_type_from_schema(schema)?,
        };
        Ok(NativeType::row(
            RowTypeConstraint::from_record_type(user_type)
                .with_schema_id(schema.id.clone())
                .with_schema_options(schema_options)
                .with_field_options(field_options),
        ))
    }

    /// Builds a schema from named field types.
    ///
    /// A fresh id is generated when `schema_id` is `None`. The schema is not
    /// registered.
    pub fn named_fields_to_schema<N: Into<String>>(
        &self,
        fields: impl IntoIterator<Item = (N, NativeType)>,
        schema_id: Option<String>,
        schema_options: &[NamedOption],
        field_options: &[(String, Vec<NamedOption>)],
    ) -> Result<Schema> {
        let schema_id = schema_id.unwrap_or_else(|| self.context.schemas().generate_new_id());
        let mut builder = SchemaBuilder::new(schema_id);
        for (name, ty) in fields {
            let name = name.into();
            let options = field_options
                .iter()
                .filter(|(field, _)| *field == name)
                .flat_map(|(_, options)| options)
                .map(|option| self.option_to_runner_api(option))
                .collect::<Result<Vec<_>>>()?;
            let field_type = self.typing_to_runner_api(&ty)?;
            builder.add_field(FieldBuilder::new(name, field_type).with_options(options))?;
        }
        for option in schema_options {
            builder.add_option(self.option_to_runner_api(option)?);
        }
        Ok(builder.finish())
    }

    /// Decodes the fields of a schema into named native types.
    pub fn named_fields_from_schema(&self, schema: &Schema) -> Result<Vec<(String, NativeType)>> {
        schema
            .fields
            .iter()
            .map(|field| {
                Ok((
                    field.name.clone(),
                    self.typing_from_runner_api(field.field_type()?)?,
                ))
            })
            .collect()
    }

    /// Encodes a native option.
    ///
    /// A flag becomes an option without type and value. Otherwise the
    /// value's type must translate to an atomic field type; the value is
    /// narrowed into that kind.
    ///
    /// # Errors
    ///
    /// `UnsupportedOptionValue` for composite values, `ValueOutOfRange` for
    /// integers wider than the wire kind.
    pub fn option_to_runner_api(&self, option: &NamedOption) -> Result<SchemaOption> {
        let Some(value) = &option.value else {
            return Ok(SchemaOption::flag(option.name.clone()));
        };
        let field_type = self.typing_to_runner_api(&value.native_type())?;
        let atomic = match field_type.atomic_type() {
            Some(atomic) if atomic != AtomicType::Unspecified => atomic,
            _ => {
                return Err(Error::unsupported_option_value(
                    option.name.clone(),
                    field_type.to_string(),
                ));
            }
        };
        let value = primitives::value_to_atomic(value, atomic)?;
        Ok(SchemaOption {
            name: option.name.clone(),
            r#type: Some(field_type),
            value: Some(FieldValue::atomic(value)),
        })
    }

    /// Decodes a wire option.
    ///
    /// Only the atomic kind of the option type is consulted, so decoding an
    /// option never touches the registries. Nullability of the type is
    /// ignored.
    ///
    /// # Errors
    ///
    /// `UnsupportedOptionValue` when the type is not atomic,
    /// `UnknownAtomicType` for atomic kinds outside the known set and
    /// `ValueTypeMismatch` when the value disagrees with the type.
    pub fn option_from_runner_api(&self, option: &SchemaOption) -> Result<NamedOption> {
        let Some(field_type) = &option.r#type else {
            return Ok(NamedOption::flag(option.name.clone()));
        };
        let Some(TypeInfo::AtomicType(kind)) = &field_type.type_info else {
            return Err(Error::unsupported_option_value(
                option.name.clone(),
                field_type.to_string(),
            ));
        };
        let expected = primitives::primitive_to_atomic(primitives::decode_atomic(*kind)?);
        let value = required(option.atomic_value(), "option.value")?;
        if value.atomic_type() != expected {
            return Err(Error::value_type_mismatch(
                expected.as_str_name(),
                value.atomic_type().as_str_name(),
            ));
        }
        Ok(NamedOption {
            name: option.name.clone(),
            value: Some(primitives::atomic_to_value(value)?),
        })
    }

    fn options_from_runner_api(&self, options: &[SchemaOption]) -> Result<Vec<NamedOption>> {
        options
            .iter()
            .map(|option| self.option_from_runner_api(option))
            .collect()
    }

    /// Returns the schema of a record type, generating and registering it
    /// on first use.
    pub fn record_type_to_schema(&self, record: &Arc<RecordType>) -> Result<Schema> {
        let field_type = self.typing_to_runner_api(&NativeType::Record(record.clone()))?;
        required(field_type.row_schema(), "row_type.schema").cloned()
    }

    /// Returns the schema describing an element type.
    ///
    /// Rows get a freshly built schema; records reuse the registered schema.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for types that are not row-shaped.
    pub fn schema_from_element_type(&self, element_type: &NativeType) -> Result<Schema> {
        match element_type {
            NativeType::Row(constraint) => self.named_fields_to_schema(
                constraint.fields().iter().cloned(),
                None,
                &[],
                &[],
            ),
            NativeType::Record(record) => {
                if let Some(schema) = self
                    .context
                    .schemas()
                    .get_id_by_typing(record)
                    .and_then(|id| self.context.schemas().get_schema_by_id(&id))
                {
                    return Ok((*schema).clone());
                }
                self.record_type_to_schema(record)
            }
            NativeType::Schema(schema) => Ok(schema.schema().clone()),
            other => Err(Error::invalid_arg(
                "element_type",
                format!("could not determine schema for type {other}"),
            )),
        }
    }

    /// Returns the named fields of a row-shaped element type, as seen
    /// through its schema.
    pub fn named_fields_from_element_type(
        &self,
        element_type: &NativeType,
    ) -> Result<Vec<(String, NativeType)>> {
        self.named_fields_from_schema(&self.schema_from_element_type(element_type)?)
    }

    /// Checks that `field_type` would decode, without registering anything.
    ///
    /// Fails with the same error [`typing_from_runner_api`] would report.
    /// Nested row schemas already bound to a record type are not descended
    /// into.
    ///
    /// [`typing_from_runner_api`]: SchemaTranslation::typing_from_runner_api
    pub(crate) fn check_decodable(&self, field_type: &FieldType) -> Result<()> {
        match &field_type.type_info {
            Some(TypeInfo::AtomicType(v)) => primitives::decode_atomic(*v).map(|_| ()),
            Some(TypeInfo::ArrayType(array)) => self.check_decodable(required(
                array.element_type.as_deref(),
                "array_type.element_type",
            )?),
            Some(TypeInfo::MapType(map)) => {
                self.check_decodable(required(map.key_type.as_deref(), "map_type.key_type")?)?;
                self.check_decodable(required(map.value_type.as_deref(), "map_type.value_type")?)
            }
            Some(TypeInfo::RowType(row)) => {
                let schema = required(row.schema.as_ref(), "row_type.schema")?;
                self.options_from_runner_api(&schema.options)?;
                for field in &schema.fields {
                    self.options_from_runner_api(&field.options)?;
                }
                if self.context.schemas().get_typing_by_id(&schema.id).is_some() {
                    return Ok(());
                }
                self.check_fields_decodable(schema)
            }
            Some(TypeInfo::LogicalType(logical)) => {
                if logical.urn != ANY_URN {
                    self.context.logical_types().from_runner_api(logical)?;
                }
                Ok(())
            }
            Some(TypeInfo::IterableType(_)) | None => {
                Err(Error::unknown_wire_shape(field_type.type_info_name()))
            }
        }
    }

    /// Runs [`check_decodable`](SchemaTranslation::check_decodable) over every
    /// field of `schema`, wrapping the first failure as `SchemaDecode`.
    pub(crate) fn check_fields_decodable(&self, schema: &Schema) -> Result<()> {
        for field in &schema.fields {
            self.check_decodable(field.field_type()?)
                .map_err(|e| Error::schema_decode(format!("{field:?}"), e))?;
        }
        Ok(())
    }

    /// Decodes a single schema field for use in a hydrated record type.
    ///
    /// Row constraints collapse to their record type.
    pub(crate) fn record_field_from_runner_api(
        &self,
        field: &Field,
    ) -> Result<(String, NativeType)> {
        let ty = self.typing_from_runner_api(field.field_type()?)?;
        Ok((field.name.clone(), collapse_rows(ty)))
    }
}

fn collapse_rows(ty: NativeType) -> NativeType {
    match ty {
        NativeType::Row(constraint) => NativeType::Record(constraint.user_type().clone()),
        NativeType::Optional(inner) => NativeType::optional(collapse_rows(*inner)),
        NativeType::Sequence(element) => NativeType::sequence(collapse_rows(*element)),
        NativeType::Mapping(key, value) => {
            NativeType::mapping(collapse_rows(*key), collapse_rows(*value))
        }
        other => other,
    }
}

/// Translates a native type into a wire field type.
pub fn typing_to_runner_api(
    ty: &NativeType,
    context: Option<&TypingContext>,
) -> Result<FieldType> {
    SchemaTranslation::resolve(context).typing_to_runner_api(ty)
}

/// Translates a wire field type into a native type.
pub fn typing_from_runner_api(
    field_type: &FieldType,
    context: Option<&TypingContext>,
) -> Result<NativeType> {
    SchemaTranslation::resolve(context).typing_from_runner_api(field_type)
}

pub fn named_fields_to_schema<N: Into<String>>(
    fields: impl IntoIterator<Item = (N, NativeType)>,
    schema_id: Option<String>,
    schema_options: &[NamedOption],
    field_options: &[(String, Vec<NamedOption>)],
    context: Option<&TypingContext>,
) -> Result<Schema> {
    SchemaTranslation::resolve(context).named_fields_to_schema(
        fields,
        schema_id,
        schema_options,
        field_options,
    )
}

pub fn named_fields_from_schema(
    schema: &Schema,
    context: Option<&TypingContext>,
) -> Result<Vec<(String, NativeType)>> {
    SchemaTranslation::resolve(context).named_fields_from_schema(schema)
}

pub fn option_to_runner_api(
    option: &NamedOption,
    context: Option<&TypingContext>,
) -> Result<SchemaOption> {
    SchemaTranslation::resolve(context).option_to_runner_api(option)
}

pub fn option_from_runner_api(
    option: &SchemaOption,
    context: Option<&TypingContext>,
) -> Result<NamedOption> {
    SchemaTranslation::resolve(context).option_from_runner_api(option)
}

pub fn record_type_to_schema(
    record: &Arc<RecordType>,
    context: Option<&TypingContext>,
) -> Result<Schema> {
    SchemaTranslation::resolve(context).record_type_to_schema(record)
}

pub fn record_type_from_schema(
    schema: &Schema,
    context: Option<&TypingContext>,
) -> Result<Arc<RecordType>> {
    SchemaTranslation::resolve(context).record_type_from_schema(schema)
}

pub fn schema_from_element_type(
    element_type: &NativeType,
    context: Option<&TypingContext>,
) -> Result<Schema> {
    SchemaTranslation::resolve(context).schema_from_element_type(element_type)
}

pub fn named_fields_from_element_type(
    element_type: &NativeType,
    context: Option<&TypingContext>,
) -> Result<Vec<(String, NativeType)>> {
    SchemaTranslation::resolve(context).named_fields_from_element_type(element_type)
}

/// Registers the logical type `L` with the process-wide context.
pub fn register_logical_type<L: LogicalType>() -> Result<()> {
    TypingContext::global().logical_types().register::<L>()
}

#[cfg(test)]
mod tests {
    use rowschema_common::error::ErrorKind;
    use rowschema_format::defs::schema::{
        AtomicType, Field, FieldType, IterableType, Schema, SchemaOption, field_type::TypeInfo,
    };

    use super::SchemaTranslation;
    use crate::{
        config::TypingConfig,
        context::TypingContext,
        logical::ANY_URN,
        native::{NativeType, Primitive},
        primitives::{ONE_WAY_PRIMITIVES, TWO_WAY_PRIMITIVES},
        value::{NamedOption, Value},
    };

    fn context() -> TypingContext {
        TypingContext::new(TypingConfig::default().with_sequential_ids("t")).unwrap()
    }

    #[test]
    fn test_primitive_roundtrip() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        for (p, atomic) in TWO_WAY_PRIMITIVES {
            let wire = t.typing_to_runner_api(&p.into()).unwrap();
            assert_eq!(wire, FieldType::atomic(atomic));
            assert_eq!(t.typing_from_runner_api(&wire).unwrap(), p.into());
        }
        for (p, atomic) in ONE_WAY_PRIMITIVES {
            let wire = t.typing_to_runner_api(&p.into()).unwrap();
            assert_eq!(wire, FieldType::atomic(atomic));
            assert_ne!(t.typing_from_runner_api(&wire).unwrap(), p.into());
        }
    }

    #[test]
    fn test_nullable_does_not_nest() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        let once = NativeType::optional(Primitive::String.into());
        let twice = NativeType::optional(once.clone());
        assert_eq!(
            t.typing_to_runner_api(&twice).unwrap(),
            t.typing_to_runner_api(&once).unwrap()
        );
        assert_eq!(
            t.typing_from_runner_api(&t.typing_to_runner_api(&twice).unwrap())
                .unwrap(),
            once
        );
    }

    #[test]
    fn test_unknown_types_become_any() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        for ty in [NativeType::named("Opaque"), NativeType::Any] {
            let wire = t.typing_to_runner_api(&ty).unwrap();
            assert!(wire.nullable);
            assert_eq!(wire.logical_type().unwrap().urn, ANY_URN);
            assert_eq!(t.typing_from_runner_api(&wire).unwrap(), NativeType::Any);
        }
        let wire = t
            .typing_to_runner_api(&NativeType::optional(NativeType::named("Opaque")))
            .unwrap();
        assert_eq!(t.typing_from_runner_api(&wire).unwrap(), NativeType::Any);
    }

    #[test]
    fn test_wire_shape_errors() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        let iterable = FieldType {
            nullable: false,
            type_info: Some(TypeInfo::IterableType(Box::new(IterableType {
                element_type: Some(Box::new(FieldType::atomic(AtomicType::Int64))),
            }))),
        };
        assert!(matches!(
            t.typing_from_runner_api(&iterable).unwrap_err().kind(),
            ErrorKind::UnknownWireShape { type_info } if type_info == "iterable_type"
        ));
        assert!(matches!(
            t.typing_from_runner_api(&FieldType::default())
                .unwrap_err()
                .kind(),
            ErrorKind::UnknownWireShape { .. }
        ));
        let unknown = FieldType {
            nullable: true,
            type_info: Some(TypeInfo::AtomicType(77)),
        };
        assert!(matches!(
            t.typing_from_runner_api(&unknown).unwrap_err().kind(),
            ErrorKind::UnknownAtomicType { value: 77 }
        ));
        assert!(matches!(
            t.typing_from_runner_api(&FieldType::atomic(AtomicType::Unspecified))
                .unwrap_err()
                .kind(),
            ErrorKind::UnknownAtomicType { value: 0 }
        ));
    }

    #[test]
    fn test_option_roundtrip() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);

        let option = NamedOption::new("max_value", 8i64);
        let wire = t.option_to_runner_api(&option).unwrap();
        assert_eq!(
            wire.r#type.as_ref().unwrap().atomic_type(),
            Some(AtomicType::Int64)
        );
        assert_eq!(t.option_from_runner_api(&wire).unwrap(), option);

        let flag = NamedOption::flag("sorted");
        let wire = t.option_to_runner_api(&flag).unwrap();
        assert!(wire.is_flag());
        assert_eq!(t.option_from_runner_api(&wire).unwrap(), flag);

        let int = t
            .option_to_runner_api(&NamedOption::new("n", Value::Int(5)))
            .unwrap();
        assert_eq!(
            t.option_from_runner_api(&int).unwrap(),
            NamedOption::new("n", 5i64)
        );
    }

    #[test]
    fn test_option_rejections() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);

        let composite = NamedOption::new("list", Value::Array(vec![Value::Int64(1)]));
        assert!(matches!(
            t.option_to_runner_api(&composite).unwrap_err().kind(),
            ErrorKind::UnsupportedOptionValue { option, .. } if option == "list"
        ));

        let wide = NamedOption::new("wide", Value::Int(i128::from(i64::MAX) + 1));
        assert!(matches!(
            t.option_to_runner_api(&wide).unwrap_err().kind(),
            ErrorKind::ValueOutOfRange { .. }
        ));

        let mut mismatched = t
            .option_to_runner_api(&NamedOption::new("x", "text"))
            .unwrap();
        mismatched.r#type = Some(FieldType::atomic(AtomicType::Int64));
        assert!(matches!(
            t.option_from_runner_api(&mismatched).unwrap_err().kind(),
            ErrorKind::ValueTypeMismatch { .. }
        ));
    }

    #[test]
    fn test_option_types_must_be_atomic() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        let valued = |field_type: FieldType| {
            let mut option = t
                .option_to_runner_api(&NamedOption::new("opt", 3i64))
                .unwrap();
            option.r#type = Some(field_type);
            option
        };

        let row = FieldType::row(Schema {
            fields: vec![Field::new("x", FieldType::atomic(AtomicType::Int64))],
            id: "opt-row".to_string(),
            ..Default::default()
        });
        let iterable = FieldType {
            nullable: false,
            type_info: Some(TypeInfo::IterableType(Box::new(IterableType {
                element_type: Some(Box::new(FieldType::atomic(AtomicType::Int64))),
            }))),
        };
        let logical = FieldType::logical("peer:logical:uuid:v1", None, None);
        for field_type in [row, iterable, logical] {
            assert!(matches!(
                t.option_from_runner_api(&valued(field_type)).unwrap_err().kind(),
                ErrorKind::UnsupportedOptionValue { option, .. } if option == "opt"
            ));
        }
        assert!(ctx.schemas().is_empty());

        let nullable = valued(FieldType::atomic(AtomicType::Int64).into_nullable());
        assert_eq!(
            t.option_from_runner_api(&nullable).unwrap(),
            NamedOption::new("opt", 3i64)
        );

        let unknown = SchemaOption {
            r#type: Some(FieldType::atomic(AtomicType::Unspecified)),
            ..valued(FieldType::atomic(AtomicType::Int64))
        };
        assert!(matches!(
            t.option_from_runner_api(&unknown).unwrap_err().kind(),
            ErrorKind::UnknownAtomicType { value: 0 }
        ));
    }

    #[test]
    fn test_schema_from_element_type_rejects_scalars() {
        let ctx = context();
        let t = SchemaTranslation::new(&ctx);
        let err = t
            .schema_from_element_type(&Primitive::I64.into())
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
}
