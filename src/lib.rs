//! Core generation pipeline for a Saloon-style SDK generator.
//!
//! Consumes a parsed OpenAPI specification ([`openapi::ApiSpecification`])
//! and produces structured class definitions: one data-transfer object per
//! component schema and one request class per endpoint. Rendering those
//! definitions to source text, loading raw documents and writing files are
//! out-of-scope collaborators.
//!
//! ```
//! use saloon_sdkgen::{GeneratorConfig, SdkGenerator};
//! use saloon_sdkgen::openapi::ApiSpecification;
//!
//! let generator = SdkGenerator::new(GeneratorConfig::new("Acme\\Sdk")).unwrap();
//! let spec = ApiSpecification {
//!     name: "Acme API".to_string(),
//!     description: None,
//!     components: Default::default(),
//!     endpoints: Vec::new(),
//! };
//! let output = generator.generate(&spec);
//! assert!(output.dtos.is_empty());
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod generation;
pub mod openapi;

pub use config::GeneratorConfig;
pub use generation::{
    DtoGenerator, DtoRegistry, GenerationError, GenerationOutput, RequestGenerator, SdkGenerator,
};
