use super::schema::{
    AtomicType, AtomicTypeValue, FieldValue, atomic_type_value::Value, field_value,
};

impl Value {
    /// The atomic kind this value is tagged with.
    pub fn atomic_type(&self) -> AtomicType {
        match self {
            Value::Byte(_) => AtomicType::Byte,
            Value::Int16(_) => AtomicType::Int16,
            Value::Int32(_) => AtomicType::Int32,
            Value::Int64(_) => AtomicType::Int64,
            Value::Float(_) => AtomicType::Float,
            Value::Double(_) => AtomicType::Double,
            Value::String(_) => AtomicType::String,
            Value::Boolean(_) => AtomicType::Boolean,
            Value::Bytes(_) => AtomicType::Bytes,
        }
    }
}

impl AtomicTypeValue {
    pub fn new(value: Value) -> AtomicTypeValue {
        AtomicTypeValue { value: Some(value) }
    }

    /// The atomic kind of the carried value, `Unspecified` when empty.
    pub fn atomic_type(&self) -> AtomicType {
        self.value
            .as_ref()
            .map(Value::atomic_type)
            .unwrap_or(AtomicType::Unspecified)
    }
}

impl FieldValue {
    pub fn atomic(value: Value) -> FieldValue {
        FieldValue {
            field_value: Some(field_value::FieldValue::AtomicValue(AtomicTypeValue::new(
                value,
            ))),
        }
    }

    /// Returns the atomic payload, if this is a populated atomic value.
    pub fn as_atomic(&self) -> Option<&Value> {
        match self.field_value.as_ref()? {
            field_value::FieldValue::AtomicValue(atomic) => atomic.value.as_ref(),
            _ => None,
        }
    }
}
