//! Runtime descriptors of native types.
//!
//! A [`NativeType`] is the in-memory description of a value's type on this
//! side of the wire. It is built from a fixed set of combinators (optional,
//! sequence, mapping, records and rows) over a closed set of primitives, so
//! every translation to and from the wire `FieldType` is a structural
//! recursion over it.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use rowschema_format::defs::schema::Schema;

use crate::{
    row_type::{RecordType, RowTypeConstraint},
    value::Timestamp,
};

/// Built-in scalar types.
///
/// All variants except [`Primitive::Int`] and [`Primitive::ByteString`] map
/// one-to-one onto a wire atomic type. Those two are accepted on the way out
/// and come back as [`Primitive::I64`] and [`Primitive::Bytes`] respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Bool,
    Bytes,
    /// Arbitrary-precision integer, carried as `i128`.
    Int,
    /// Borrowed byte string.
    ByteString,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
            Primitive::String => "String",
            Primitive::Bool => "bool",
            Primitive::Bytes => "Bytes",
            Primitive::Int => "Int",
            Primitive::ByteString => "ByteString",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::I16 | Primitive::I32 | Primitive::I64 | Primitive::Int
        )
    }
}

/// A native type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    Primitive(Primitive),
    /// A value that may be absent.
    Optional(Box<NativeType>),
    /// An ordered, homogeneous collection.
    Sequence(Box<NativeType>),
    /// A key/value collection.
    Mapping(Box<NativeType>, Box<NativeType>),
    /// A record declaration: a name plus ordered, named fields.
    Record(Arc<RecordType>),
    /// A row-shape descriptor wrapping a record type with an optional
    /// schema id and options.
    Row(Arc<RowTypeConstraint>),
    /// A wire schema that has already been translated.
    Schema(WireSchema),
    /// A nominal type without structure. Only translatable through a
    /// registered logical type.
    Named(Arc<str>),
    /// The universal type.
    Any,
}

impl NativeType {
    /// Returns the descriptor of `T`.
    pub fn of<T: NativeTyping + ?Sized>() -> NativeType {
        T::native_type()
    }

    pub fn optional(inner: NativeType) -> NativeType {
        NativeType::Optional(Box::new(inner))
    }

    pub fn sequence(element: NativeType) -> NativeType {
        NativeType::Sequence(Box::new(element))
    }

    pub fn mapping(key: NativeType, value: NativeType) -> NativeType {
        NativeType::Mapping(Box::new(key), Box::new(value))
    }

    pub fn record(record: RecordType) -> NativeType {
        NativeType::Record(Arc::new(record))
    }

    pub fn row(constraint: RowTypeConstraint) -> NativeType {
        NativeType::Row(Arc::new(constraint))
    }

    pub fn named(name: &str) -> NativeType {
        NativeType::Named(Arc::from(name))
    }

    pub fn schema(schema: Schema) -> NativeType {
        NativeType::Schema(WireSchema::new(schema))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, NativeType::Optional(_))
    }

    /// Returns `true` if a null value is an instance of this type.
    pub fn admits_null(&self) -> bool {
        matches!(self, NativeType::Optional(_) | NativeType::Any)
    }

    /// Returns the record type behind a record or row descriptor.
    pub fn as_record_type(&self) -> Option<&Arc<RecordType>> {
        match self {
            NativeType::Record(record) => Some(record),
            NativeType::Row(constraint) => Some(constraint.user_type()),
            _ => None,
        }
    }
}

impl From<Primitive> for NativeType {
    fn from(p: Primitive) -> Self {
        NativeType::Primitive(p)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Primitive(p) => f.write_str(p.name()),
            NativeType::Optional(inner) => write!(f, "Option<{inner}>"),
            NativeType::Sequence(element) => write!(f, "Sequence<{element}>"),
            NativeType::Mapping(key, value) => write!(f, "Mapping<{key}, {value}>"),
            NativeType::Record(record) => f.write_str(record.name()),
            NativeType::Row(constraint) => write!(f, "Row<{}>", constraint.user_type().name()),
            NativeType::Schema(schema) => write!(f, "Schema({})", schema.id()),
            NativeType::Named(name) => f.write_str(name),
            NativeType::Any => f.write_str("Any"),
        }
    }
}

/// Shared handle to a wire schema used as a native type.
///
/// Hashing is by schema id; equality compares the full message.
#[derive(Debug, Clone)]
pub struct WireSchema(Arc<Schema>);

impl WireSchema {
    pub fn new(schema: Schema) -> WireSchema {
        WireSchema(Arc::new(schema))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn schema(&self) -> &Schema {
        &self.0
    }

    pub fn as_arc(&self) -> &Arc<Schema> {
        &self.0
    }
}

impl From<Arc<Schema>> for WireSchema {
    fn from(schema: Arc<Schema>) -> Self {
        WireSchema(schema)
    }
}

impl PartialEq for WireSchema {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl Eq for WireSchema {}

impl Hash for WireSchema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

/// Types with a statically known native type descriptor.
pub trait NativeTyping {
    fn native_type() -> NativeType;
}

macro_rules! impl_primitive_typing {
    ($($ty:ty => $p:ident),* $(,)?) => {
        $(
            impl NativeTyping for $ty {
                fn native_type() -> NativeType {
                    NativeType::Primitive(Primitive::$p)
                }
            }
        )*
    };
}

impl_primitive_typing!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => Int,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => String,
    Box<[u8]> => Bytes,
);

impl NativeTyping for &[u8] {
    fn native_type() -> NativeType {
        NativeType::Primitive(Primitive::ByteString)
    }
}

impl<T: NativeTyping> NativeTyping for Option<T> {
    fn native_type() -> NativeType {
        NativeType::optional(T::native_type())
    }
}

impl<T: NativeTyping> NativeTyping for Vec<T> {
    fn native_type() -> NativeType {
        NativeType::sequence(T::native_type())
    }
}

impl<K: NativeTyping, V: NativeTyping, S> NativeTyping for HashMap<K, V, S> {
    fn native_type() -> NativeType {
        NativeType::mapping(K::native_type(), V::native_type())
    }
}

impl<K: NativeTyping, V: NativeTyping> NativeTyping for BTreeMap<K, V> {
    fn native_type() -> NativeType {
        NativeType::mapping(K::native_type(), V::native_type())
    }
}

impl NativeTyping for Timestamp {
    fn native_type() -> NativeType {
        NativeType::named(Timestamp::TYPE_NAME)
    }
}

/// Implements [`NativeTyping`] for a struct by listing its fields, which
/// makes the struct translatable as a record.
///
/// ```
/// use rowschema_typing::{native::NativeType, native_record};
///
/// #[allow(dead_code)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// native_record!(Point { x: i64, y: i64 });
///
/// let record = NativeType::of::<Point>();
/// assert_eq!(record.as_record_type().unwrap().fields().len(), 2);
/// ```
#[macro_export]
macro_rules! native_record {
    ($ty:ty { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::native::NativeTyping for $ty {
            fn native_type() -> $crate::native::NativeType {
                $crate::native::NativeType::record($crate::row_type::RecordType::new(
                    ::std::any::type_name::<$ty>(),
                    ::std::vec![$((
                        ::std::string::String::from(::std::stringify!($field)),
                        <$fty as $crate::native::NativeTyping>::native_type(),
                    )),*],
                ))
            }
        }
    };
}
