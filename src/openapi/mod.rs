//! In-memory representation of a parsed OpenAPI surface

pub mod types;

pub use types::*;
