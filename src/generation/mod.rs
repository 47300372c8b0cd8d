//! Generation domain: turns a parsed API specification into structured
//! class definitions
//!
//! Two generators share the naming and type-mapping contract: the DTO
//! generator covers component schemas, the request generator covers
//! endpoints. Neither shares mutable state with the other; the request
//! generator only *predicts* DTO names through the shared helpers.

pub mod dto;
pub mod errors;
pub mod naming;
pub mod request;
pub mod sanitizers;
pub mod type_map;
pub mod types;
pub mod utils;

pub use dto::{DtoGenerator, DtoRegistry};
pub use errors::GenerationError;
pub use request::RequestGenerator;
pub use types::*;

use crate::config::GeneratorConfig;
use crate::openapi::ApiSpecification;

/// Result of one generation run: DTO definitions keyed by class name and
/// request definitions in endpoint order.
#[derive(Debug)]
pub struct GenerationOutput {
    pub dtos: DtoRegistry,
    pub requests: Vec<ClassFile>,
}

/// Convenience facade running both generators over one specification.
pub struct SdkGenerator {
    config: GeneratorConfig,
}

impl SdkGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Pure in-memory transformation; completes in time proportional to the
    /// number of schemas and endpoints.
    pub fn generate(&self, spec: &ApiSpecification) -> GenerationOutput {
        let mut dtos = DtoRegistry::new();
        DtoGenerator::new(&self.config).generate(spec, &mut dtos);
        let requests = RequestGenerator::new(&self.config).generate(spec);
        GenerationOutput { dtos, requests }
    }
}
