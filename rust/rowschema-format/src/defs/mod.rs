#[path = "./rowschema.schema.rs"]
pub mod schema;

pub mod field_type_ext;
pub mod option_ext;
pub mod schema_ext;
pub mod value_ext;

/// Size of the serialized protobuf message length prefix.
pub const MESSAGE_LEN_SIZE: usize = 4;

/// Size of the message checksum suffix.
pub const CHECKSUM_SIZE: usize = 4;

/// Minimum size of a sealed message: length prefix followed by the checksum
/// of an empty payload.
pub const MESSAGE_MIN_SIZE: usize = MESSAGE_LEN_SIZE + CHECKSUM_SIZE;
