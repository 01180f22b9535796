//! Record declarations, row-shape constraints and record values.

use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use rowschema_common::{
    Result,
    error::{Error, ErrorKind},
};

use crate::{
    native::{NativeType, Primitive},
    value::{NamedOption, Timestamp, Value},
};

/// A record declaration: a name plus ordered `(field name, type)` pairs.
///
/// Identity is structural. Two declarations with the same name and fields
/// are the same record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordType {
    name: String,
    fields: Vec<(String, NativeType)>,
}

impl RecordType {
    pub fn new(name: impl Into<String>, fields: Vec<(String, NativeType)>) -> RecordType {
        RecordType {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[(String, NativeType)] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    /// Constructs a record value from positional `values`.
    ///
    /// Each slot is checked against its field type. Integers are narrowed
    /// (or widened) to the declared width, failing with `ValueOutOfRange`
    /// when they don't fit; nulls are accepted only for optional and `Any`
    /// fields.
    pub fn construct(self: &Arc<Self>, values: Vec<Value>) -> Result<RowValue> {
        let values = self.coerce_slots(values)?;
        Ok(RowValue {
            record_type: Arc::clone(self),
            values,
        })
    }

    fn coerce_slots(&self, values: Vec<Value>) -> Result<Vec<Value>> {
        if values.len() != self.fields.len() {
            return Err(ErrorKind::ArityMismatch {
                record: self.name.clone(),
                expected: self.fields.len(),
                actual: values.len(),
            }
            .into());
        }
        self.fields
            .iter()
            .zip(values)
            .map(|((_, field_type), value)| coerce(value, field_type))
            .collect()
    }
}

/// Checks `value` against `ty`, converting numeric widths where needed.
pub(crate) fn coerce(value: Value, ty: &NativeType) -> Result<Value> {
    match (ty, value) {
        (NativeType::Any, value) => Ok(value),
        (NativeType::Optional(_), Value::Null) => Ok(Value::Null),
        (NativeType::Optional(inner), value) => coerce(value, inner),
        (_, Value::Null) => Err(Error::value_type_mismatch(ty.to_string(), "null")),
        (NativeType::Primitive(p), value) => coerce_primitive(value, *p),
        (NativeType::Sequence(element), Value::Array(items)) => items
            .into_iter()
            .map(|item| coerce(item, element))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        (NativeType::Mapping(key_type, value_type), Value::Map(entries)) => entries
            .into_iter()
            .map(|(k, v)| Ok((coerce(k, key_type)?, coerce(v, value_type)?)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Map),
        (NativeType::Record(record), Value::Row(slots)) => {
            record.coerce_slots(slots).map(Value::Row)
        }
        (NativeType::Row(constraint), Value::Row(slots)) => constraint
            .user_type()
            .coerce_slots(slots)
            .map(Value::Row),
        (NativeType::Schema(schema), Value::Row(slots)) => {
            if slots.len() == schema.schema().fields.len() {
                Ok(Value::Row(slots))
            } else {
                Err(ErrorKind::ArityMismatch {
                    record: schema.id().to_string(),
                    expected: schema.schema().fields.len(),
                    actual: slots.len(),
                }
                .into())
            }
        }
        (NativeType::Named(name), Value::Timestamp(ts)) if &**name == Timestamp::TYPE_NAME => {
            Ok(Value::Timestamp(ts))
        }
        (NativeType::Named(name), value) if &**name != Timestamp::TYPE_NAME => Ok(value),
        (ty, value) => Err(Error::value_type_mismatch(ty.to_string(), value.kind_name())),
    }
}

fn coerce_primitive(value: Value, p: Primitive) -> Result<Value> {
    if p.is_integer() {
        let Some(v) = value.as_integer() else {
            return Err(Error::value_type_mismatch(p.name(), value.kind_name()));
        };
        let out_of_range = || Error::value_out_of_range(p.name(), v);
        return match p {
            Primitive::I8 => i8::try_from(v).map(Value::Byte).map_err(|_| out_of_range()),
            Primitive::I16 => i16::try_from(v).map(Value::Int16).map_err(|_| out_of_range()),
            Primitive::I32 => i32::try_from(v).map(Value::Int32).map_err(|_| out_of_range()),
            Primitive::I64 => i64::try_from(v).map(Value::Int64).map_err(|_| out_of_range()),
            _ => Ok(Value::Int(v)),
        };
    }
    match (p, value) {
        (Primitive::F32, v @ Value::Float(_)) => Ok(v),
        (Primitive::F64, Value::Float(f)) => Ok(Value::Double(f as f64)),
        (Primitive::F64, v @ Value::Double(_)) => Ok(v),
        (Primitive::String, v @ Value::String(_)) => Ok(v),
        (Primitive::Bool, v @ Value::Boolean(_)) => Ok(v),
        (Primitive::Bytes | Primitive::ByteString, v @ Value::Bytes(_)) => Ok(v),
        (p, value) => Err(Error::value_type_mismatch(p.name(), value.kind_name())),
    }
}

/// A row-shape descriptor: a record type plus the schema id it is bound to
/// and the options that travel with its schema.
///
/// Equality and hashing consider the record type and schema id only.
#[derive(Debug, Clone)]
pub struct RowTypeConstraint {
    user_type: Arc<RecordType>,
    schema_id: Option<String>,
    schema_options: Vec<NamedOption>,
    field_options: Vec<(String, Vec<NamedOption>)>,
}

impl RowTypeConstraint {
    pub fn from_record_type(user_type: Arc<RecordType>) -> RowTypeConstraint {
        RowTypeConstraint {
            user_type,
            schema_id: None,
            schema_options: Vec::new(),
            field_options: Vec::new(),
        }
    }

    /// Builds a constraint over an anonymous record with the given fields.
    pub fn from_fields(fields: Vec<(String, NativeType)>) -> RowTypeConstraint {
        RowTypeConstraint::from_record_type(Arc::new(RecordType::new("Row", fields)))
    }

    pub fn with_schema_id(mut self, schema_id: impl Into<String>) -> Self {
        self.schema_id = Some(schema_id.into());
        self
    }

    pub fn with_schema_options(mut self, options: Vec<NamedOption>) -> Self {
        self.schema_options = options;
        self
    }

    pub fn with_field_options(mut self, options: Vec<(String, Vec<NamedOption>)>) -> Self {
        self.field_options = options;
        self
    }

    pub fn user_type(&self) -> &Arc<RecordType> {
        &self.user_type
    }

    pub fn fields(&self) -> &[(String, NativeType)] {
        self.user_type.fields()
    }

    pub fn schema_id(&self) -> Option<&str> {
        self.schema_id.as_deref()
    }

    pub fn schema_options(&self) -> &[NamedOption] {
        &self.schema_options
    }

    pub fn all_field_options(&self) -> &[(String, Vec<NamedOption>)] {
        &self.field_options
    }

    /// Options attached to the named field, empty when there are none.
    pub fn field_options(&self, field: &str) -> &[NamedOption] {
        self.field_options
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, options)| options.as_slice())
            .unwrap_or_default()
    }
}

impl PartialEq for RowTypeConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.user_type == other.user_type && self.schema_id == other.schema_id
    }
}

impl Eq for RowTypeConstraint {}

impl Hash for RowTypeConstraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_type.hash(state);
        self.schema_id.hash(state);
    }
}

/// An instance of a record type: one value per field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowValue {
    record_type: Arc<RecordType>,
    values: Vec<Value>,
}

impl RowValue {
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.record_type
            .field_index(name)
            .and_then(|i| self.values.get(i))
    }

    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
