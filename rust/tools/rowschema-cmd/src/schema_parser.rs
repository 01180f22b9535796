//! Schema string parser for command-line row schema definitions

use anyhow::{Context, Result, anyhow};
use rowschema_typing::{NativeType, Primitive, Timestamp};

const SUPPORTED_TYPES: &str = "i8/byte, i16, i32/int, i64/long, f32/float, f64/double, \
    string, bool, bytes, timestamp, array<T>, map<K, V>";

/// Parse a schema string into named native field types
///
/// Format: "(field_name1: string, field_name2: long?, field_name3: array<double>)"
///
/// Supported types:
/// - i8, byte -> i8
/// - i16 -> i16
/// - i32, int -> i32
/// - i64, long -> i64
/// - f32, float -> f32
/// - f64, double -> f64
/// - string, bool, bytes
/// - timestamp -> the microsecond timestamp logical type
/// - array<T> -> sequence of T
/// - map<K, V> -> mapping from K to V
///
/// A trailing `?` makes a type nullable. Fields are non-nullable otherwise.
pub fn parse_schema_string(schema_str: &str) -> Result<Vec<(String, NativeType)>> {
    let schema_str = schema_str.trim();

    if !schema_str.starts_with('(') || !schema_str.ends_with(')') {
        return Err(anyhow!(
            "Schema string must be enclosed in parentheses: (field1: type1, field2: type2, ...)"
        ));
    }

    let inner = schema_str[1..schema_str.len() - 1].trim();
    if inner.is_empty() {
        return Err(anyhow!("Schema string cannot be empty"));
    }

    let mut fields: Vec<(String, NativeType)> = Vec::new();
    for field_def in split_top_level(inner)? {
        let field_def = field_def.trim();
        if field_def.is_empty() {
            continue;
        }

        let field = parse_field_definition(field_def)
            .with_context(|| format!("Failed to parse field definition: '{field_def}'"))?;
        if fields.iter().any(|(name, _)| *name == field.0) {
            return Err(anyhow!("Duplicate field name '{}'", field.0));
        }
        fields.push(field);
    }

    if fields.is_empty() {
        return Err(anyhow!("Schema must contain at least one field"));
    }

    Ok(fields)
}

fn parse_field_definition(field_def: &str) -> Result<(String, NativeType)> {
    let colon_pos = field_def
        .find(':')
        .ok_or_else(|| anyhow!("Field definition must contain ':' separator"))?;

    let field_name = field_def[..colon_pos].trim();
    let type_name = field_def[colon_pos + 1..].trim();

    if field_name.is_empty() {
        return Err(anyhow!("Field name cannot be empty"));
    }

    if type_name.is_empty() {
        return Err(anyhow!("Field type cannot be empty"));
    }

    if !is_valid_field_name(field_name) {
        return Err(anyhow!(
            "Invalid field name '{}'. Field names must be valid identifiers (letters, numbers, underscores, no spaces)",
            field_name
        ));
    }

    Ok((field_name.to_string(), parse_type(type_name)?))
}

fn parse_type(type_name: &str) -> Result<NativeType> {
    let type_name = type_name.trim();

    // Nullability does not nest: `T??` is the same type as `T?`.
    if let Some(inner) = type_name.strip_suffix('?') {
        let inner = parse_type(inner)?;
        if inner.is_optional() {
            return Ok(inner);
        }
        return Ok(NativeType::optional(inner));
    }

    if let Some(args) = generic_args(type_name, "array")? {
        return Ok(NativeType::sequence(parse_type(args)?));
    }

    if let Some(args) = generic_args(type_name, "map")? {
        let parts = split_top_level(args)?;
        let [key, value] = parts.as_slice() else {
            return Err(anyhow!(
                "map<K, V> takes exactly two type arguments, got '{}'",
                args
            ));
        };
        return Ok(NativeType::mapping(parse_type(key)?, parse_type(value)?));
    }

    let ty = match type_name {
        "i8" | "byte" => Primitive::I8.into(),
        "i16" => Primitive::I16.into(),
        "i32" | "int" => Primitive::I32.into(),
        "i64" | "long" => Primitive::I64.into(),
        "f32" | "float" => Primitive::F32.into(),
        "f64" | "double" => Primitive::F64.into(),
        "string" => Primitive::String.into(),
        "bool" => Primitive::Bool.into(),
        "bytes" => Primitive::Bytes.into(),
        "timestamp" => NativeType::of::<Timestamp>(),
        _ => {
            return Err(anyhow!(
                "Unsupported type '{}'. Supported types: {}",
                type_name,
                SUPPORTED_TYPES
            ));
        }
    };
    Ok(ty)
}

/// Returns the text between `<` and `>` when `type_name` is `keyword<...>`.
fn generic_args<'a>(type_name: &'a str, keyword: &str) -> Result<Option<&'a str>> {
    let Some(rest) = type_name.strip_prefix(keyword) else {
        return Ok(None);
    };
    let rest = rest.trim_start();
    if !rest.starts_with('<') {
        return Ok(None);
    }
    let args = rest[1..]
        .strip_suffix('>')
        .ok_or_else(|| anyhow!("Unterminated type arguments in '{}'", type_name))?;
    if args.trim().is_empty() {
        return Err(anyhow!("Missing type arguments in '{}'", type_name));
    }
    Ok(Some(args))
}

/// Splits on commas that are not nested inside `<...>`.
fn split_top_level(s: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("Unbalanced '>' in '{}'", s))?;
            }
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(anyhow!("Unbalanced '<' in '{}'", s));
    }
    parts.push(&s[start..]);
    Ok(parts)
}

fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
