//! Parsed API specification model consumed by the generators
//!
//! An upstream loader is responsible for turning a raw OpenAPI document into
//! this shape; the generators never re-read or re-validate document syntax.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Root aggregate for one API surface. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSpecification {
    /// API title.
    pub name: String,
    pub description: Option<String>,
    /// Named component schemas, keyed by their spec-level name. A `BTreeMap`
    /// keeps generation order deterministic across runs.
    #[serde(default)]
    pub components: BTreeMap<String, Schema>,
    /// Operations in declaration order.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Recursive schema descriptor.
///
/// A reference is carried as a pointer string and is resolved to a target
/// type *name* by the type mapper; its target is never inlined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Reference pointer, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Single type name, or a union of primitive type names.
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    pub format: Option<String>,
    /// Element schema for `array`-typed schemas.
    pub items: Option<Box<Schema>>,
    /// Property name → nested descriptor for `object`-typed schemas.
    pub properties: Option<BTreeMap<String, Schema>>,
    /// Names of required properties.
    pub required: Option<Vec<String>>,
    /// Literal values for enumeration schemas.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<JsonValue>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub nullable: Option<bool>,
    pub default: Option<JsonValue>,
    pub example: Option<JsonValue>,
}

/// The `type` field of a schema: a single name or a union of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
}

impl Schema {
    /// Returns the last path segment of the reference pointer, if this
    /// schema is a reference.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|pointer| pointer.rsplit('/').next().unwrap_or(pointer))
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// True when the schema carries a single type equal to `name`.
    pub fn is_type(&self, name: &str) -> bool {
        matches!(&self.schema_type, Some(SchemaType::Single(t)) if t == name)
    }

    /// Whether `property` appears in this schema's required set.
    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == property))
    }
}

/// One HTTP operation in the API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Logical operation name, e.g. `GetUser`.
    pub name: String,
    /// Resource/collection grouping name used to namespace request classes.
    pub collection: Option<String>,
    pub method: HttpMethod,
    /// Ordered path segments; a leading `:` marks a placeholder, e.g.
    /// `["users", ":id", "posts"]`.
    pub path_segments: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub path_parameters: Vec<Parameter>,
    #[serde(default)]
    pub body_parameters: Vec<Parameter>,
    #[serde(default)]
    pub query_parameters: Vec<Parameter>,
    /// HTTP status code → response descriptor.
    #[serde(default)]
    pub responses: BTreeMap<u16, Response>,
}

/// Operation parameter, used identically for path, body and query binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(default)]
    pub schema: Schema,
    pub description: Option<String>,
}

/// Where a parameter originates in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    Header,
}

/// One response entry of an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Media-type entries in declaration order.
    #[serde(default)]
    pub content: Vec<MediaType>,
    pub description: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// One media-type entry of a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Media-type string, e.g. `application/json`.
    pub media_type: String,
    pub schema: Option<Schema>,
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    pub fn is_post(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }

    pub fn is_patch(&self) -> bool {
        matches!(self, HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_name_takes_last_segment() {
        let schema = Schema {
            reference: Some("#/components/schemas/Pet".to_string()),
            ..Default::default()
        };
        assert_eq!(schema.reference_name(), Some("Pet"));

        let bare = Schema {
            reference: Some("Pet".to_string()),
            ..Default::default()
        };
        assert_eq!(bare.reference_name(), Some("Pet"));

        assert_eq!(Schema::default().reference_name(), None);
    }

    #[test]
    fn test_schema_type_union_deserializes_untagged() {
        let single: Schema = serde_json::from_value(serde_json::json!({"type": "string"})).unwrap();
        assert_eq!(
            single.schema_type,
            Some(SchemaType::Single("string".to_string()))
        );

        let union: Schema =
            serde_json::from_value(serde_json::json!({"type": ["string", "null"]})).unwrap();
        assert_eq!(
            union.schema_type,
            Some(SchemaType::Union(vec![
                "string".to_string(),
                "null".to_string()
            ]))
        );
    }

    #[test]
    fn test_is_required() {
        let schema = Schema {
            required: Some(vec!["id".to_string()]),
            ..Default::default()
        };
        assert!(schema.is_required("id"));
        assert!(!schema.is_required("name"));
        assert!(!Schema::default().is_required("id"));
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert!(HttpMethod::Post.is_post());
        assert!(!HttpMethod::Post.is_patch());
    }
}
