//! Core definitions (error types and validation helpers), relied upon by all rowschema-* crates.

pub mod error;
pub mod result;

pub use result::Result;
