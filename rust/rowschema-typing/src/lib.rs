//! Translation between native type descriptors and portable row schemas.
//!
//! The entry points live in [`translation`]; each takes an optional
//! [`TypingContext`](context::TypingContext) and falls back to the
//! process-wide one.

pub mod config;
pub mod context;
pub mod hydration;
pub mod logical;
pub mod native;
pub mod primitives;
pub mod row_type;
pub mod schema_registry;
pub mod translation;
pub mod value;

pub use context::TypingContext;
pub use hydration::{PortableRow, hydrate_row};
pub use native::{NativeType, NativeTyping, Primitive};
pub use row_type::{RecordType, RowTypeConstraint, RowValue};
pub use translation::{
    SchemaTranslation, named_fields_from_element_type, named_fields_from_schema,
    named_fields_to_schema, option_from_runner_api, option_to_runner_api,
    record_type_from_schema, record_type_to_schema, register_logical_type,
    schema_from_element_type, typing_from_runner_api, typing_to_runner_api,
};
pub use value::{NamedOption, Timestamp, Value};
