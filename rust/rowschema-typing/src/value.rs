//! Plain-data values: option values, record slots and logical type payloads.

use std::fmt;

use rowschema_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

use crate::native::{NativeType, Primitive};

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Byte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int(i128),
    Float(f32),
    Double(f64),
    String(String),
    Boolean(bool),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Positional record slots.
    Row(Vec<Value>),
    Timestamp(Timestamp),
}

impl Value {
    /// Short name of the value's variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Byte(_) => "byte",
            Value::Int16(_) => "int16",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Row(_) => "row",
            Value::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The native type this value is an instance of.
    ///
    /// Collections take their element types from the first element and
    /// fall back to `Any` when empty. Rows carry no field names and are `Any`.
    pub fn native_type(&self) -> NativeType {
        match self {
            Value::Null | Value::Row(_) => NativeType::Any,
            Value::Byte(_) => Primitive::I8.into(),
            Value::Int16(_) => Primitive::I16.into(),
            Value::Int32(_) => Primitive::I32.into(),
            Value::Int64(_) => Primitive::I64.into(),
            Value::Int(_) => Primitive::Int.into(),
            Value::Float(_) => Primitive::F32.into(),
            Value::Double(_) => Primitive::F64.into(),
            Value::String(_) => Primitive::String.into(),
            Value::Boolean(_) => Primitive::Bool.into(),
            Value::Bytes(_) => Primitive::Bytes.into(),
            Value::Array(items) => NativeType::sequence(
                items.first().map(Value::native_type).unwrap_or(NativeType::Any),
            ),
            Value::Map(entries) => match entries.first() {
                Some((k, v)) => NativeType::mapping(k.native_type(), v.native_type()),
                None => NativeType::mapping(NativeType::Any, NativeType::Any),
            },
            Value::Timestamp(_) => NativeType::named(Timestamp::TYPE_NAME),
        }
    }

    /// Returns the value of any integer variant, widened to `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::Byte(v) => Some(v as i128),
            Value::Int16(v) => Some(v as i128),
            Value::Int32(v) => Some(v as i128),
            Value::Int64(v) => Some(v as i128),
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|v| i64::try_from(v).ok())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// An instant with microsecond precision, relative to the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    /// Name of the nominal native type describing timestamps.
    pub const TYPE_NAME: &'static str = "Timestamp";

    pub fn from_micros(micros: i64) -> Timestamp {
        Timestamp { micros }
    }

    /// Builds a timestamp from whole seconds plus a microsecond adjustment.
    pub fn from_parts(seconds: i64, micros: i64) -> Result<Timestamp> {
        seconds
            .checked_mul(1_000_000)
            .and_then(|s| s.checked_add(micros))
            .map(Timestamp::from_micros)
            .ok_or_else(|| Error::value_out_of_range("timestamp", format!("{seconds}s {micros}us")))
    }

    pub fn micros(&self) -> i64 {
        self.micros
    }

    /// Whole seconds, rounded towards negative infinity.
    pub fn seconds(&self) -> i64 {
        self.micros.div_euclid(1_000_000)
    }

    /// Microseconds past [`Timestamp::seconds`], always in `0..1_000_000`.
    pub fn subsec_micros(&self) -> i64 {
        self.micros.rem_euclid(1_000_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds(), self.subsec_micros())
    }
}

/// A named schema or field option.
///
/// An option without a value is a presence-only flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedOption {
    pub name: String,
    pub value: Option<Value>,
}

impl NamedOption {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> NamedOption {
        NamedOption {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<String>) -> NamedOption {
        NamedOption {
            name: name.into(),
            value: None,
        }
    }

    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}
