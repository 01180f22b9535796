pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails with `InvalidArgument` when the condition does not hold.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify(result, stringify!($name), stringify!($expr), false)?;
    }};
}

/// Fails with `InvalidFormat` when the condition over decoded wire data does not hold.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify(result, stringify!($name), stringify!($expr), true)?;
    }};
}

#[inline]
pub fn verify(predicate: bool, name: &str, condition: &str, wire_data: bool) -> Result<()> {
    if predicate {
        Ok(())
    } else if wire_data {
        Err(invalid_format(name, condition))
    } else {
        Err(invalid_arg(name, condition))
    }
}

/// Unwraps a message field that protobuf models as optional but the schema
/// format requires (for example `Field.type` or `RowType.schema`).
#[inline]
pub fn required<T>(value: Option<T>, element: &str) -> Result<T> {
    value.ok_or_else(|| invalid_format(element, "required field is missing"))
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> crate::error::Error {
    crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into()
}

#[cold]
pub fn invalid_format(name: &str, condition: &str) -> crate::error::Error {
    crate::error::ErrorKind::InvalidFormat {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into()
}
