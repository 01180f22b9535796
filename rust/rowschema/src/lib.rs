//! # RowSchema: Portable Row Schemas for Native Types
//!
//! RowSchema translates between native type descriptors and a portable,
//! language-neutral row schema that is exchanged as a protobuf message. A
//! pipeline stage written against native records describes its element type
//! once; the schema travels with the data, and a consumer that never saw the
//! producer's types can rebuild a constructible record type from the schema
//! bytes alone.
//!
//! ## Key Features
//!
//! * **Bidirectional Translation**: Native types (primitives, optionals,
//!   sequences, mappings, records, row constraints) map to wire field types
//!   and back, with a fixed set of primitive conversions
//! * **Schema Deduplication**: A record type translated any number of times,
//!   from any number of threads, resolves to a single schema id
//! * **Logical Types**: URN-keyed extension types map a language type onto a
//!   simpler representation type, with a built-in microsecond timestamp
//! * **Record Hydration**: Wire schemas with no registered native type are
//!   turned into synthesized record types that validate and narrow values
//! * **Checksummed Framing**: Sealed schema messages carry a length prefix
//!   and an xxh3-derived checksum
//!
//! ## Architecture
//!
//! This main crate serves as a convenient entry point that re-exports the
//! component crates, allowing users to reach the whole toolkit through a
//! single dependency.
//!
//! ## Module Organization
//!
//! * [`common`]: Shared error type, result alias and validation macros
//! * [`format`]: Wire message definitions, schema builders and the sealed
//!   message framing
//! * [`typing`]: The native type model, the logical type and schema
//!   registries, the translator and record hydration
//!
//! ## Getting Started
//!
//! ```
//! use rowschema::typing::{NativeType, Primitive, SchemaTranslation, TypingContext};
//!
//! let context = TypingContext::new(Default::default()).unwrap();
//! let translation = SchemaTranslation::new(&context);
//! let schema = translation
//!     .named_fields_to_schema(
//!         [
//!             ("a", Primitive::Int.into()),
//!             ("b", NativeType::sequence(Primitive::String.into())),
//!         ],
//!         None,
//!         &[],
//!         &[],
//!     )
//!     .unwrap();
//! assert_eq!(schema.fields.len(), 2);
//! ```

pub use rowschema_common as common;
pub use rowschema_format as format;
pub use rowschema_typing as typing;
