//! DTO generation: component schemas → data-class and enum definitions
//!
//! One definition per named schema, registered by DTO class name. Nested
//! object and array schemas are expanded depth-first; references resolve to
//! the referenced schema's name and are never inlined.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::generation::naming;
use crate::generation::sanitizers::wrap_long_lines;
use crate::generation::type_map::{map_type, php_type};
use crate::generation::types::{ClassFile, ClassKind, ConstructorParam, EnumCase};
use crate::generation::utils::to_screaming_snake_case;
use crate::openapi::{ApiSpecification, Schema, SchemaType};

const SPATIE_DATA: &str = "Spatie\\LaravelData\\Data";
const DATA_COLLECTION: &str = "Spatie\\LaravelData\\DataCollection";
const DATA_COLLECTION_OF: &str = "Spatie\\LaravelData\\Attributes\\DataCollectionOf";
const MAP_NAME: &str = "Spatie\\LaravelData\\Attributes\\MapName";

/// Width used when wrapping schema descriptions into docblocks.
const DOC_WRAP_WIDTH: usize = 80;

/// Registry of generated DTO definitions, keyed by class name and scoped to
/// one generation run. Registration is insert-if-absent: the first
/// definition for a name wins and later registrations are no-ops.
#[derive(Debug, Default)]
pub struct DtoRegistry {
    classes: BTreeMap<String, ClassFile>,
}

impl DtoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ClassFile> {
        self.classes.get(name)
    }

    /// Registers `class` unless a definition already exists under its name.
    /// Returns whether the class was inserted.
    pub fn insert_if_absent(&mut self, class: ClassFile) -> bool {
        match self.classes.entry(class.name.clone()) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(class);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClassFile)> {
        self.classes.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, ClassFile> {
        self.classes
    }
}

/// Generates one DTO (or enumeration) definition per component schema.
pub struct DtoGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DtoGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Walks every named component schema and registers its definition in
    /// `registry`. Safe to call repeatedly with the same registry: already
    /// registered names are skipped.
    pub fn generate(&self, spec: &ApiSpecification, registry: &mut DtoRegistry) {
        let mut in_progress = BTreeSet::new();
        for (name, schema) in &spec.components {
            self.generate_dto_class(name, schema, registry, &mut in_progress);
        }
        debug!(count = registry.len(), "generated DTO definitions");
    }

    /// Generates and registers the DTO for one schema, returning its class
    /// name. A name already registered, or currently being expanded further
    /// up the call stack, is returned as-is without regenerating.
    fn generate_dto_class(
        &self,
        raw_name: &str,
        schema: &Schema,
        registry: &mut DtoRegistry,
        in_progress: &mut BTreeSet<String>,
    ) -> String {
        let source_name = if raw_name.is_empty() {
            self.config.fallback_resource_name.as_str()
        } else {
            raw_name
        };
        let dto_name = naming::dto_class_name(source_name);

        if registry.contains(&dto_name) || in_progress.contains(&dto_name) {
            return dto_name;
        }
        in_progress.insert(dto_name.clone());

        let class = if schema.enum_values.as_ref().is_some_and(|v| !v.is_empty()) {
            self.build_enum(&dto_name, schema)
        } else {
            self.build_data_class(&dto_name, schema, registry, in_progress)
        };

        debug!(name = %dto_name, kind = ?class.kind, "registering DTO");
        registry.insert_if_absent(class);
        in_progress.remove(&dto_name);

        dto_name
    }

    fn build_enum(&self, dto_name: &str, schema: &Schema) -> ClassFile {
        let mut class = ClassFile::new(dto_name, self.config.dto_namespace(), ClassKind::Enum);
        class.summary = schema.title.clone().unwrap_or_default();
        class.enum_backing = match &schema.schema_type {
            Some(SchemaType::Single(t)) => Some(map_type(t, schema.format.as_deref())),
            _ => None,
        };

        for value in schema.enum_values.iter().flatten() {
            class.cases.push(EnumCase {
                name: enum_case_name(value),
                value: value.clone(),
            });
        }

        class
    }

    fn build_data_class(
        &self,
        dto_name: &str,
        schema: &Schema,
        registry: &mut DtoRegistry,
        in_progress: &mut BTreeSet<String>,
    ) -> ClassFile {
        let mut class = ClassFile::new(dto_name, self.config.dto_namespace(), ClassKind::Data);
        class.extends = Some(SPATIE_DATA.to_string());
        class.add_use(SPATIE_DATA);
        class.summary = schema.title.clone().unwrap_or_default();
        class.doc = wrap_long_lines(schema.description.as_deref().unwrap_or(""), DOC_WRAP_WIDTH);

        let mut properties: Vec<(&String, &Schema)> = schema
            .properties
            .iter()
            .flat_map(|props| props.iter())
            .collect();
        properties.sort_by(|(a, _), (b, _)| {
            property_order(a, schema.is_required(a), b, schema.is_required(b))
        });

        let mut generated_mappings = false;

        for (property_name, property_schema) in properties {
            let mapped = php_type(property_schema);

            // Depth-first expansion of nested inline shapes. References are
            // resolved by name, never expanded; primitive-item arrays have
            // no shape of their own to expand.
            if mapped == "object" || mapped == "array" {
                let target = if mapped == "array" {
                    property_schema.items.as_deref()
                } else {
                    Some(property_schema)
                };
                if let Some(target) = target.filter(|t| is_expandable(t)) {
                    let sub_name = naming::dto_class_name(property_name);
                    if !registry.contains(&sub_name) {
                        self.generate_dto_class(property_name, target, registry, in_progress);
                    }
                }
            }

            let name = naming::safe_variable_name(property_name);
            let declared = if property_schema.is_reference() {
                format!("{}\\{}", self.config.dto_namespace(), naming::dto_class_name(&mapped))
            } else {
                mapped.clone()
            };

            let mut param = ConstructorParam::required(name.clone(), declared);

            if mapped == "array" {
                param.php_type = DATA_COLLECTION.to_string();
                param.collection_of = Some(
                    property_schema
                        .items
                        .as_deref()
                        .map(php_type)
                        .unwrap_or_else(|| "mixed".to_string()),
                );
                class.add_use(DATA_COLLECTION);
                class.add_use(DATA_COLLECTION_OF);
            }

            if !schema.is_required(property_name) {
                param.nullable = true;
                param.default_null = true;
            }

            if name != *property_name {
                param.rename_from = Some(property_name.clone());
                generated_mappings = true;
            }

            class.constructor.push(param);
        }

        if generated_mappings {
            class.add_use(MAP_NAME);
        }

        class
    }
}

/// Whether a nested schema carries enough shape to warrant its own DTO:
/// declared properties or enum literals, and not a reference (references
/// resolve to the canonical schema's name instead).
fn is_expandable(schema: &Schema) -> bool {
    if schema.is_reference() {
        return false;
    }
    schema.properties.as_ref().is_some_and(|p| !p.is_empty())
        || schema.enum_values.as_ref().is_some_and(|v| !v.is_empty())
}

/// Constructor-parameter ordering policy:
/// `@`-prefixed properties always precede non-`@` ones; within a group,
/// required properties precede optional ones; two required properties
/// compare in reverse lexicographic order. Optional-vs-optional keeps the
/// incoming (lexicographic) order via stable sort.
fn property_order(a: &str, a_required: bool, b: &str, b_required: bool) -> Ordering {
    let a_at = a.starts_with('@');
    let b_at = b.starts_with('@');
    if a_at != b_at {
        return if a_at { Ordering::Less } else { Ordering::Greater };
    }

    match (a_required, b_required) {
        (true, true) => b.cmp(a),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Case identifier for one enum literal: SCREAMING_SNAKE of the literal's
/// string form, digit-safe.
fn enum_case_name(value: &JsonValue) -> String {
    let raw = match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    };
    let mut name = to_screaming_snake_case(&raw);
    if name.is_empty() {
        name = "EMPTY".to_string();
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
