//! Mapping from spec-level type descriptors to PHP type names
//!
//! Pure and stateless; shared by both generators without either owning the
//! other's state.

use crate::openapi::{Schema, SchemaType};

/// Maps a schema or reference to a PHP type name.
///
/// Priority order:
/// 1. references resolve to the referenced schema's own name (last pointer
///    segment) — callers qualify it with the DTO namespace;
/// 2. union types map each member independently and join with `|` in
///    declaration order;
/// 3. single types go through the primitive table in [`map_type`];
/// 4. no type information at all degrades to `mixed`.
pub fn php_type(schema: &Schema) -> String {
    if let Some(name) = schema.reference_name() {
        return name.to_string();
    }

    match &schema.schema_type {
        Some(SchemaType::Union(members)) => members
            .iter()
            .map(|member| map_type(member, None))
            .collect::<Vec<_>>()
            .join("|"),
        Some(SchemaType::Single(name)) => map_type(name, schema.format.as_deref()),
        None => "mixed".to_string(),
    }
}

/// Primitive type mapping table. Unrecognized types degrade to `mixed`
/// rather than failing generation.
pub fn map_type(spec_type: &str, format: Option<&str>) -> String {
    match spec_type {
        "integer" => "int",
        "string" => "string",
        "boolean" => "bool",
        // Callers recurse into properties for nested object shapes
        "object" => "object",
        "number" => match format {
            Some("float") => "float",
            Some("int32") | Some("int64") => "int",
            _ => "int|float",
        },
        "array" => "array",
        "null" => "null",
        _ => "mixed",
    }
    .to_string()
}
