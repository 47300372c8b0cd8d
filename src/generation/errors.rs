//! Error types for the generation domain
//!
//! Generation itself degrades silently on incomplete specifications; these
//! errors cover configuration validation and the serde boundary used by
//! upstream loaders and downstream renderers.

use thiserror::Error;

/// Errors that can occur around code generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
