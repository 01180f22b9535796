//! Mapping between native primitives and wire atomic types, and between
//! native values and wire atomic values.

use rowschema_common::{
    Result,
    error::{Error, ErrorKind},
};
use rowschema_format::defs::schema::{AtomicType, atomic_type_value};

use crate::{native::Primitive, value::Value};

/// Primitives that survive a round trip through the wire unchanged.
pub const TWO_WAY_PRIMITIVES: [(Primitive, AtomicType); 9] = [
    (Primitive::I8, AtomicType::Byte),
    (Primitive::I16, AtomicType::Int16),
    (Primitive::I32, AtomicType::Int32),
    (Primitive::I64, AtomicType::Int64),
    (Primitive::F32, AtomicType::Float),
    (Primitive::F64, AtomicType::Double),
    (Primitive::String, AtomicType::String),
    (Primitive::Bool, AtomicType::Boolean),
    (Primitive::Bytes, AtomicType::Bytes),
];

/// Primitives accepted on the way out only; each decodes as the primitive
/// its atomic type maps back to.
pub const ONE_WAY_PRIMITIVES: [(Primitive, AtomicType); 2] = [
    (Primitive::Int, AtomicType::Int64),
    (Primitive::ByteString, AtomicType::Bytes),
];

pub fn primitive_to_atomic(p: Primitive) -> AtomicType {
    match p {
        Primitive::I8 => AtomicType::Byte,
        Primitive::I16 => AtomicType::Int16,
        Primitive::I32 => AtomicType::Int32,
        Primitive::I64 | Primitive::Int => AtomicType::Int64,
        Primitive::F32 => AtomicType::Float,
        Primitive::F64 => AtomicType::Double,
        Primitive::String => AtomicType::String,
        Primitive::Bool => AtomicType::Boolean,
        Primitive::Bytes | Primitive::ByteString => AtomicType::Bytes,
    }
}

/// Reverse of [`primitive_to_atomic`] restricted to the two-way table.
///
/// # Errors
///
/// `UnknownAtomicType` for `UNSPECIFIED`.
pub fn atomic_to_primitive(atomic: AtomicType) -> Result<Primitive> {
    Ok(match atomic {
        AtomicType::Byte => Primitive::I8,
        AtomicType::Int16 => Primitive::I16,
        AtomicType::Int32 => Primitive::I32,
        AtomicType::Int64 => Primitive::I64,
        AtomicType::Float => Primitive::F32,
        AtomicType::Double => Primitive::F64,
        AtomicType::String => Primitive::String,
        AtomicType::Boolean => Primitive::Bool,
        AtomicType::Bytes => Primitive::Bytes,
        AtomicType::Unspecified => {
            return Err(ErrorKind::UnknownAtomicType {
                value: atomic as i32,
            }
            .into());
        }
    })
}

/// Resolves a raw atomic type enum value, failing for values outside the
/// enum and for `UNSPECIFIED`.
pub fn decode_atomic(value: i32) -> Result<Primitive> {
    let atomic = AtomicType::try_from(value).map_err(|_| ErrorKind::UnknownAtomicType { value })?;
    atomic_to_primitive(atomic)
}

/// Converts a native value into the wire atomic value of kind `atomic`.
///
/// Integers are range-checked against the target width; the wire carries
/// bytes and 16-bit integers in 32-bit slots.
pub fn value_to_atomic(value: &Value, atomic: AtomicType) -> Result<atomic_type_value::Value> {
    use atomic_type_value::Value as Wire;

    if let Some(v) = value.as_integer() {
        let out_of_range = || Error::value_out_of_range(atomic.as_str_name(), v);
        return match atomic {
            AtomicType::Byte => i8::try_from(v)
                .map(|v| Wire::Byte(v as i32))
                .map_err(|_| out_of_range()),
            AtomicType::Int16 => i16::try_from(v)
                .map(|v| Wire::Int16(v as i32))
                .map_err(|_| out_of_range()),
            AtomicType::Int32 => i32::try_from(v)
                .map(Wire::Int32)
                .map_err(|_| out_of_range()),
            AtomicType::Int64 => i64::try_from(v)
                .map(Wire::Int64)
                .map_err(|_| out_of_range()),
            _ => Err(Error::value_type_mismatch(
                atomic.as_str_name(),
                value.kind_name(),
            )),
        };
    }
    match (atomic, value) {
        (AtomicType::Float, Value::Float(v)) => Ok(Wire::Float(*v)),
        (AtomicType::Double, Value::Double(v)) => Ok(Wire::Double(*v)),
        (AtomicType::Double, Value::Float(v)) => Ok(Wire::Double(*v as f64)),
        (AtomicType::String, Value::String(v)) => Ok(Wire::String(v.clone())),
        (AtomicType::Boolean, Value::Boolean(v)) => Ok(Wire::Boolean(*v)),
        (AtomicType::Bytes, Value::Bytes(v)) => Ok(Wire::Bytes(v.clone())),
        _ => Err(Error::value_type_mismatch(
            atomic.as_str_name(),
            value.kind_name(),
        )),
    }
}

/// Converts a wire atomic value back into a native value.
///
/// # Errors
///
/// `ValueOutOfRange` when a `byte` or `int16` slot holds a value outside
/// the width of its kind.
pub fn atomic_to_value(value: &atomic_type_value::Value) -> Result<Value> {
    use atomic_type_value::Value as Wire;

    Ok(match value {
        Wire::Byte(v) => i8::try_from(*v)
            .map(Value::Byte)
            .map_err(|_| Error::value_out_of_range("BYTE", v))?,
        Wire::Int16(v) => i16::try_from(*v)
            .map(Value::Int16)
            .map_err(|_| Error::value_out_of_range("INT16", v))?,
        Wire::Int32(v) => Value::Int32(*v),
        Wire::Int64(v) => Value::Int64(*v),
        Wire::Float(v) => Value::Float(*v),
        Wire::Double(v) => Value::Double(*v),
        Wire::String(v) => Value::String(v.clone()),
        Wire::Boolean(v) => Value::Boolean(*v),
        Wire::Bytes(v) => Value::Bytes(v.clone()),
    })
}

#[cfg(test)]
mod tests {
    use rowschema_common::error::ErrorKind;
    use rowschema_format::defs::schema::{AtomicType, atomic_type_value::Value as Wire};

    use super::*;

    #[test]
    fn test_primitive_tables() {
        for (p, atomic) in TWO_WAY_PRIMITIVES {
            assert_eq!(primitive_to_atomic(p), atomic);
            assert_eq!(atomic_to_primitive(atomic).unwrap(), p);
        }
        for (p, atomic) in ONE_WAY_PRIMITIVES {
            assert_eq!(primitive_to_atomic(p), atomic);
            assert_ne!(atomic_to_primitive(atomic).unwrap(), p);
        }
    }

    #[test]
    fn test_unknown_atomic() {
        assert!(matches!(
            decode_atomic(0).unwrap_err().kind(),
            ErrorKind::UnknownAtomicType { value: 0 }
        ));
        assert!(matches!(
            decode_atomic(99).unwrap_err().kind(),
            ErrorKind::UnknownAtomicType { value: 99 }
        ));
        assert_eq!(decode_atomic(4).unwrap(), Primitive::I64);
    }

    #[test]
    fn test_value_narrowing() {
        assert_eq!(
            value_to_atomic(&Value::Int(8), AtomicType::Int64).unwrap(),
            Wire::Int64(8)
        );
        assert_eq!(
            value_to_atomic(&Value::Byte(-2), AtomicType::Byte).unwrap(),
            Wire::Byte(-2)
        );
        let err = value_to_atomic(&Value::Int(i128::from(i64::MIN) - 1), AtomicType::Int64)
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ValueOutOfRange { .. }));
        let err = value_to_atomic(&Value::String("x".into()), AtomicType::Int64).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ValueTypeMismatch { .. }));
    }

    #[test]
    fn test_wire_byte_out_of_range() {
        assert_eq!(atomic_to_value(&Wire::Byte(-128)).unwrap(), Value::Byte(-128));
        let err = atomic_to_value(&Wire::Byte(300)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ValueOutOfRange { .. }));
        assert!(atomic_to_value(&Wire::Int16(70_000)).is_err());
    }
}
