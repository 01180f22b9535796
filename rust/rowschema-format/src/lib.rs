//! Wire format for portable row schemas: the protobuf message definitions
//! and thin wrappers on top of those.

pub mod checksum;
pub mod defs;
pub mod schema_builder;
pub mod schema_message;
#[cfg(test)]
mod tests;
