use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(name: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: name.into(),
                message: Default::default(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_type(type_name: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedType {
                type_name: type_name.into(),
            }
            .into(),
        )
    }

    pub fn unknown_wire_shape(type_info: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnknownWireShape {
                type_info: type_info.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_option_value(
        option: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Error {
        Error(
            ErrorKind::UnsupportedOptionValue {
                option: option.into(),
                field_type: field_type.into(),
            }
            .into(),
        )
    }

    pub fn value_out_of_range(kind: impl Into<String>, value: impl ToString) -> Error {
        Error(
            ErrorKind::ValueOutOfRange {
                kind: kind.into(),
                value: value.to_string(),
            }
            .into(),
        )
    }

    pub fn value_type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error(
            ErrorKind::ValueTypeMismatch {
                expected: expected.into(),
                actual: actual.into(),
            }
            .into(),
        )
    }

    pub fn schema_decode(field: impl Into<String>, source: Error) -> Error {
        Error(
            ErrorKind::SchemaDecode {
                field: field.into(),
                source,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns `true` if this error signals a type that no logical type claims.
    ///
    /// Translation treats this condition as recoverable.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedType { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("no logical type registered for type '{type_name}'")]
    UnsupportedType { type_name: String },

    #[error("unrecognized type_info '{type_info}' (incompatible wire version?)")]
    UnknownWireShape { type_info: String },

    #[error("unsupported atomic type: {value}")]
    UnknownAtomicType { value: i32 },

    #[error(
        "only atomic option values are supported, option '{option}' maps to field type {field_type}"
    )]
    UnsupportedOptionValue { option: String, field_type: String },

    #[error("logical type urn '{urn}' is already registered")]
    DuplicateUrn { urn: String },

    #[error("no logical type registered for urn '{urn}'")]
    UnknownUrn { urn: String },

    #[error("failed to decode schema due to an issue with field: {field}")]
    SchemaDecode {
        field: String,
        #[source]
        source: Error,
    },

    #[error(
        "type '{type_name}' is already registered with schema '{existing_id}', \
         refusing to register it with schema '{schema_id}'"
    )]
    ConflictingRegistration {
        type_name: String,
        existing_id: String,
        schema_id: String,
    },

    #[error("value {value} is out of range for {kind}")]
    ValueOutOfRange { kind: String, value: String },

    #[error("type mismatch: expected {expected}, got {actual}")]
    ValueTypeMismatch { expected: String, actual: String },

    #[error("record '{record}' expects {expected} values, got {actual}")]
    ArityMismatch {
        record: String,
        expected: usize,
        actual: usize,
    },

    #[error("checksum mismatch for '{element}'")]
    ChecksumMismatch { element: String },

    #[error("invalid storage format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("invalid protobuf message for '{element}'")]
    Protobuf {
        element: String,
        source: prost::DecodeError,
    },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        ErrorKind::Protobuf {
            element: String::new(),
            source: e,
        }
        .into()
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_schema_decode_keeps_source() {
        let inner = Error::unknown_wire_shape("iterable_type");
        let err = Error::schema_decode("name: \"tags\"", inner);
        match err.kind() {
            ErrorKind::SchemaDecode { field, source } => {
                assert_eq!(field, "name: \"tags\"");
                assert!(matches!(
                    source.kind(),
                    ErrorKind::UnknownWireShape { type_info } if type_info == "iterable_type"
                ));
            }
            other => panic!("unexpected error kind {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_type_is_recoverable() {
        assert!(Error::unsupported_type("Any").is_unsupported_type());
        assert!(!Error::invalid_format("schema").is_unsupported_type());
    }
}
