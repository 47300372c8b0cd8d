//! Output model for the generation domain
//!
//! Generators produce structured class definitions; rendering them to source
//! text is the job of a downstream backend. Everything here derives serde so
//! a template renderer can consume definitions as plain data.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::openapi::HttpMethod;

/// One generated class (data class, enumeration or request class).
/// Produced once per schema or endpoint and never mutated after
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassFile {
    pub name: String,
    pub namespace: String,
    pub kind: ClassKind,
    /// Fully qualified parent class, if any.
    pub extends: Option<String>,
    /// Fully qualified interfaces the class declares.
    #[serde(default)]
    pub implements: Vec<String>,
    /// Fully qualified traits the class mixes in.
    #[serde(default)]
    pub traits: Vec<String>,
    /// One-line summary comment.
    pub summary: String,
    /// Line-wrapped doc comment body.
    pub doc: String,
    /// Imports the rendered file needs, fully qualified.
    #[serde(default)]
    pub uses: BTreeSet<String>,
    /// Promoted constructor parameters, in emission order.
    #[serde(default)]
    pub constructor: Vec<ConstructorParam>,
    /// Derived accessor methods.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Enumeration cases; only populated for [`ClassKind::Enum`].
    #[serde(default)]
    pub cases: Vec<EnumCase>,
    /// Backing type of the enumeration, e.g. `string`.
    pub enum_backing: Option<String>,
    /// HTTP method literal; only populated for [`ClassKind::Request`].
    pub http_method: Option<HttpMethod>,
}

impl ClassFile {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            extends: None,
            implements: Vec::new(),
            traits: Vec::new(),
            summary: String::new(),
            doc: String::new(),
            uses: BTreeSet::new(),
            constructor: Vec::new(),
            methods: Vec::new(),
            cases: Vec::new(),
            enum_backing: None,
            http_method: None,
        }
    }

    /// Fully qualified class name.
    pub fn fqcn(&self) -> String {
        format!("{}\\{}", self.namespace, self.name)
    }

    pub fn add_use(&mut self, import: impl Into<String>) {
        self.uses.insert(import.into());
    }

    /// Whether the class carries a JSON request body.
    pub fn has_json_body(&self) -> bool {
        self.traits.iter().any(|t| t.ends_with("HasJsonBody"))
    }

    /// The generated response-decoding method, if one was emitted.
    pub fn decode_method(&self) -> Option<&str> {
        self.methods.iter().find_map(|m| match m {
            Method::CreateDtoFromResponse { dto_type } => Some(dto_type.as_str()),
            _ => None,
        })
    }
}

/// What flavor of class a [`ClassFile`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Data,
    Enum,
    Request,
}

/// One promoted constructor parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorParam {
    /// In-code identifier, already passed through `safe_variable_name`.
    pub name: String,
    /// Declared type: a PHP primitive keyword or a fully qualified class.
    pub php_type: String,
    pub nullable: bool,
    /// Whether the parameter defaults to `null`.
    pub default_null: bool,
    /// Element type metadata for typed-collection parameters.
    pub collection_of: Option<String>,
    /// Original spec-level name, present only when the in-code identifier
    /// differs from it (serialization key preservation).
    pub rename_from: Option<String>,
}

impl ConstructorParam {
    pub fn required(name: impl Into<String>, php_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            php_type: php_type.into(),
            nullable: false,
            default_null: false,
            collection_of: None,
            rename_from: None,
        }
    }
}

/// One case of a generated enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumCase {
    pub name: String,
    pub value: JsonValue,
}

/// A derived accessor method on a generated class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    /// `resolveEndpoint(): string` — builds the endpoint path.
    ResolveEndpoint { template: PathTemplate },
    /// `createDtoFromResponse(Response $response)` — decodes the 200
    /// response into `dto_type`.
    CreateDtoFromResponse { dto_type: String },
    /// `defaultBody(): array` — non-empty body parameters as a map.
    DefaultBody { params: Vec<ParamBinding> },
    /// `defaultQuery(): array` — non-empty query parameters as a map.
    DefaultQuery { params: Vec<ParamBinding> },
}

/// Wire-name → promoted-property binding used by the default-body and
/// default-query methods. The key keeps the original spec name so the
/// serialized payload stays wire compatible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamBinding {
    pub key: String,
    pub property: String,
}

/// Endpoint path template: ordered literal and parameter parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathTemplate {
    pub parts: Vec<PathPart>,
}

/// One part of a path template. `Param` holds the promoted property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPart {
    Literal(String),
    Param(String),
}

impl PathTemplate {
    /// Evaluates the template with concrete parameter values, yielding the
    /// request path. Parameters without a supplied value keep their name.
    pub fn resolve(&self, values: &BTreeMap<&str, &str>) -> String {
        let segments: Vec<&str> = self
            .parts
            .iter()
            .map(|part| match part {
                PathPart::Literal(s) => s.as_str(),
                PathPart::Param(name) => values.get(name.as_str()).copied().unwrap_or(name),
            })
            .collect();
        format!("/{}", segments.join("/"))
    }

    /// Renders the template as a PHP string interpolation, the body of the
    /// generated `resolveEndpoint` method.
    pub fn interpolation(&self) -> String {
        let segments: Vec<String> = self
            .parts
            .iter()
            .map(|part| match part {
                PathPart::Literal(s) => s.clone(),
                PathPart::Param(name) => format!("{{$this->{name}}}"),
            })
            .collect();
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_posts_template() -> PathTemplate {
        PathTemplate {
            parts: vec![
                PathPart::Literal("users".to_string()),
                PathPart::Param("id".to_string()),
                PathPart::Literal("posts".to_string()),
            ],
        }
    }

    #[test]
    fn test_path_template_resolve() {
        let template = users_posts_template();
        let values = BTreeMap::from([("id", "42")]);
        assert_eq!(template.resolve(&values), "/users/42/posts");
    }

    #[test]
    fn test_path_template_resolve_without_params() {
        let template = PathTemplate {
            parts: vec![
                PathPart::Literal("health".to_string()),
                PathPart::Literal("live".to_string()),
            ],
        };
        assert_eq!(template.resolve(&BTreeMap::new()), "/health/live");
    }

    #[test]
    fn test_path_template_interpolation() {
        let template = users_posts_template();
        assert_eq!(template.interpolation(), "/users/{$this->id}/posts");
    }

    #[test]
    fn test_fqcn() {
        let class = ClassFile::new("Pet", "App\\Sdk\\Dto", ClassKind::Data);
        assert_eq!(class.fqcn(), "App\\Sdk\\Dto\\Pet");
    }

    #[test]
    fn test_has_json_body_from_traits() {
        let mut class = ClassFile::new("CreatePet", "App\\Sdk\\Requests\\Pets", ClassKind::Request);
        assert!(!class.has_json_body());
        class
            .traits
            .push("Saloon\\Traits\\Body\\HasJsonBody".to_string());
        assert!(class.has_json_body());
    }
}
