//! Constructors and inspectors for the wire `FieldType`.

use std::fmt;

use super::schema::{
    ArrayType, AtomicType, FieldType, LogicalType, MapType, RowType, Schema, field_type::TypeInfo,
};

impl FieldType {
    /// Creates a non-nullable atomic field type.
    pub fn atomic(kind: AtomicType) -> FieldType {
        FieldType {
            nullable: false,
            type_info: Some(TypeInfo::AtomicType(kind as i32)),
        }
    }

    /// Creates a non-nullable array of `element`.
    pub fn array(element: FieldType) -> FieldType {
        FieldType {
            nullable: false,
            type_info: Some(TypeInfo::ArrayType(Box::new(ArrayType {
                element_type: Some(Box::new(element)),
            }))),
        }
    }

    /// Creates a non-nullable map from `key` to `value`.
    pub fn map(key: FieldType, value: FieldType) -> FieldType {
        FieldType {
            nullable: false,
            type_info: Some(TypeInfo::MapType(Box::new(MapType {
                key_type: Some(Box::new(key)),
                value_type: Some(Box::new(value)),
            }))),
        }
    }

    /// Creates a non-nullable row type embedding `schema`.
    pub fn row(schema: Schema) -> FieldType {
        FieldType {
            nullable: false,
            type_info: Some(TypeInfo::RowType(Box::new(RowType {
                schema: Some(schema),
            }))),
        }
    }

    /// Creates a non-nullable logical type.
    ///
    /// `representation` is the wire type the logical values are carried as;
    /// `argument_type` is set only for logical types that take an argument.
    pub fn logical(
        urn: impl Into<String>,
        representation: Option<FieldType>,
        argument_type: Option<FieldType>,
    ) -> FieldType {
        FieldType {
            nullable: false,
            type_info: Some(TypeInfo::LogicalType(Box::new(LogicalType {
                urn: urn.into(),
                payload: Vec::new(),
                representation: representation.map(Box::new),
                argument_type: argument_type.map(Box::new),
                argument: None,
            }))),
        }
    }

    /// Returns this type with the nullability flag replaced.
    pub fn with_nullable(mut self, nullable: bool) -> FieldType {
        self.nullable = nullable;
        self
    }

    /// Returns the nullable version of this type.
    ///
    /// Nullability is a flag, so calling this on an already nullable type
    /// returns it unchanged.
    pub fn into_nullable(self) -> FieldType {
        self.with_nullable(true)
    }

    /// Returns the atomic kind when this is an atomic type with a known enum value.
    pub fn atomic_type(&self) -> Option<AtomicType> {
        match self.type_info.as_ref()? {
            TypeInfo::AtomicType(v) => AtomicType::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.type_info, Some(TypeInfo::AtomicType(_)))
    }

    pub fn row_schema(&self) -> Option<&Schema> {
        match self.type_info.as_ref()? {
            TypeInfo::RowType(row) => row.schema.as_ref(),
            _ => None,
        }
    }

    pub fn logical_type(&self) -> Option<&LogicalType> {
        match self.type_info.as_ref()? {
            TypeInfo::LogicalType(logical) => Some(logical),
            _ => None,
        }
    }

    /// Name of the `type_info` variant as it appears in the message definition.
    pub fn type_info_name(&self) -> &'static str {
        match &self.type_info {
            Some(TypeInfo::AtomicType(_)) => "atomic_type",
            Some(TypeInfo::ArrayType(_)) => "array_type",
            Some(TypeInfo::IterableType(_)) => "iterable_type",
            Some(TypeInfo::MapType(_)) => "map_type",
            Some(TypeInfo::RowType(_)) => "row_type",
            Some(TypeInfo::LogicalType(_)) => "logical_type",
            None => "<unset>",
        }
    }
}

/// Compact, human-readable rendering, e.g. `ARRAY<STRING?>` or
/// `ROW<id: INT64, name: STRING?>`.
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_info {
            Some(TypeInfo::AtomicType(v)) => match AtomicType::try_from(*v) {
                Ok(kind) => f.write_str(kind.as_str_name())?,
                Err(_) => write!(f, "ATOMIC({v})")?,
            },
            Some(TypeInfo::ArrayType(array)) => {
                write!(f, "ARRAY<")?;
                fmt_opt(f, array.element_type.as_deref())?;
                write!(f, ">")?;
            }
            Some(TypeInfo::IterableType(iterable)) => {
                write!(f, "ITERABLE<")?;
                fmt_opt(f, iterable.element_type.as_deref())?;
                write!(f, ">")?;
            }
            Some(TypeInfo::MapType(map)) => {
                write!(f, "MAP<")?;
                fmt_opt(f, map.key_type.as_deref())?;
                write!(f, ", ")?;
                fmt_opt(f, map.value_type.as_deref())?;
                write!(f, ">")?;
            }
            Some(TypeInfo::RowType(row)) => {
                write!(f, "ROW<")?;
                if let Some(schema) = &row.schema {
                    for (i, field) in schema.fields.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}: ", field.name)?;
                        fmt_opt(f, field.r#type.as_ref())?;
                    }
                }
                write!(f, ">")?;
            }
            Some(TypeInfo::LogicalType(logical)) => write!(f, "LOGICAL({})", logical.urn)?,
            None => f.write_str("<unset>")?,
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

fn fmt_opt(f: &mut fmt::Formatter<'_>, field_type: Option<&FieldType>) -> fmt::Result {
    match field_type {
        Some(field_type) => write!(f, "{field_type}"),
        None => f.write_str("<missing>"),
    }
}
