//! Request generation: endpoints → request-class definitions
//!
//! One request class per endpoint, grouped into a resource sub-namespace,
//! with path templating, JSON-body marking, default body/query builders and
//! an optional typed response decoder.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::generation::naming;
use crate::generation::sanitizers::wrap_long_lines;
use crate::generation::type_map::php_type;
use crate::generation::types::{
    ClassFile, ClassKind, ConstructorParam, Method, ParamBinding, PathPart, PathTemplate,
};
use crate::openapi::{ApiSpecification, Endpoint, Parameter};

const SALOON_REQUEST: &str = "Saloon\\Http\\Request";
const SALOON_RESPONSE: &str = "Saloon\\Http\\Response";
const SALOON_METHOD: &str = "Saloon\\Enums\\Method";
const HAS_BODY: &str = "Saloon\\Contracts\\Body\\HasBody";
const HAS_JSON_BODY: &str = "Saloon\\Traits\\Body\\HasJsonBody";
const DATE_TIME: &str = "DateTime";

const DOC_WRAP_WIDTH: usize = 80;

/// Generates one request-class definition per endpoint.
pub struct RequestGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RequestGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, spec: &ApiSpecification) -> Vec<ClassFile> {
        let classes: Vec<ClassFile> = spec
            .endpoints
            .iter()
            .map(|endpoint| self.generate_request_class(endpoint))
            .collect();
        debug!(count = classes.len(), "generated request definitions");
        classes
    }

    fn generate_request_class(&self, endpoint: &Endpoint) -> ClassFile {
        let resource = naming::resource_class_name(
            endpoint
                .collection
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(&self.config.fallback_resource_name),
        );
        let class_name = naming::request_class_name(&endpoint.name);

        let mut class = ClassFile::new(
            class_name,
            self.config.request_namespace(&resource),
            ClassKind::Request,
        );
        class.extends = Some(SALOON_REQUEST.to_string());
        class.add_use(SALOON_REQUEST);
        class.summary = endpoint.name.clone();
        class.doc = wrap_long_lines(
            endpoint.description.as_deref().unwrap_or(""),
            DOC_WRAP_WIDTH,
        );

        // JSON body is assumed for POST/PATCH.
        if endpoint.method.is_post() || endpoint.method.is_patch() {
            class.implements.push(HAS_BODY.to_string());
            class.traits.push(HAS_JSON_BODY.to_string());
            class.add_use(HAS_BODY);
            class.add_use(HAS_JSON_BODY);
        }

        class.http_method = Some(endpoint.method);
        class.add_use(SALOON_METHOD);
        class.add_use(DATE_TIME);

        class.methods.push(Method::ResolveEndpoint {
            template: path_template(endpoint),
        });

        if let Some(dto_type) = self.response_dto_type(endpoint) {
            class
                .add_use(format!("{}\\{}", self.config.dto_namespace(), dto_type));
            class.add_use(SALOON_RESPONSE);
            class
                .methods
                .push(Method::CreateDtoFromResponse { dto_type });
        }

        // Constructor priority: path, then body, then query, independent of
        // the endpoint's declaration order.
        for path_param in &endpoint.path_parameters {
            class
                .constructor
                .push(promoted_param(path_param, true));
        }

        let body_params: Vec<&Parameter> = endpoint
            .body_parameters
            .iter()
            .filter(|p| !self.config.ignored_body_params.contains(&p.name))
            .collect();
        if !body_params.is_empty() {
            for param in &body_params {
                class.constructor.push(promoted_param(param, param.required));
            }
            class.methods.push(Method::DefaultBody {
                params: bindings(&body_params),
            });
        }

        let query_params: Vec<&Parameter> = endpoint
            .query_parameters
            .iter()
            .filter(|p| !self.config.ignored_query_params.contains(&p.name))
            .collect();
        if !query_params.is_empty() {
            for param in &query_params {
                class.constructor.push(promoted_param(param, param.required));
            }
            class.methods.push(Method::DefaultQuery {
                params: bindings(&query_params),
            });
        }

        debug!(name = %class.name, namespace = %class.namespace, "generated request class");
        class
    }

    /// Resolves the DTO type for the typed response decoder: the 200
    /// response's first media type, if its schema maps to anything other
    /// than the untyped `array` shape. Untyped and array responses stay
    /// undecoded.
    fn response_dto_type(&self, endpoint: &Endpoint) -> Option<String> {
        let response = endpoint.responses.get(&200)?;
        let media_type = response.content.first()?;
        let schema = media_type.schema.as_ref()?;

        let mapped = php_type(schema);
        if mapped == "array" {
            return None;
        }
        Some(mapped)
    }
}

fn path_template(endpoint: &Endpoint) -> PathTemplate {
    let parts = endpoint
        .path_segments
        .iter()
        .map(|segment| {
            if segment.starts_with(':') {
                PathPart::Param(naming::safe_variable_name(segment))
            } else {
                PathPart::Literal(segment.clone())
            }
        })
        .collect();
    PathTemplate { parts }
}

/// Adds one endpoint parameter as a promoted constructor property.
/// `string` parameters carrying a date format promote to `DateTime`.
fn promoted_param(param: &Parameter, required: bool) -> ConstructorParam {
    let php = if param.schema.is_type("string")
        && matches!(param.schema.format.as_deref(), Some("date") | Some("date-time"))
    {
        DATE_TIME.to_string()
    } else {
        php_type(&param.schema)
    };

    let mut promoted = ConstructorParam::required(naming::safe_variable_name(&param.name), php);
    if !required {
        promoted.nullable = true;
        promoted.default_null = true;
    }
    promoted
}

fn bindings(params: &[&Parameter]) -> Vec<ParamBinding> {
    params
        .iter()
        .map(|p| ParamBinding {
            key: p.name.clone(),
            property: naming::safe_variable_name(&p.name),
        })
        .collect()
}
