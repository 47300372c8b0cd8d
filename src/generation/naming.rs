//! Identifier mapping from raw spec names to PHP-safe names
//!
//! Pure, deterministic, total functions. Both generators rely on these to
//! agree on class names: the request generator must predict the DTO class
//! name the DTO generator will register for a given schema.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::generation::utils::{to_camel_case, to_studly_case};

/// PHP reserved words and soft-reserved type names that cannot be used as
/// class names. Checked case-insensitively, as PHP resolves them.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract",
        "and",
        "array",
        "as",
        "bool",
        "break",
        "callable",
        "case",
        "catch",
        "class",
        "clone",
        "const",
        "continue",
        "declare",
        "default",
        "do",
        "echo",
        "else",
        "elseif",
        "empty",
        "enddeclare",
        "endfor",
        "endforeach",
        "endif",
        "endswitch",
        "endwhile",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "fn",
        "for",
        "foreach",
        "function",
        "global",
        "goto",
        "if",
        "implements",
        "include",
        "include_once",
        "instanceof",
        "insteadof",
        "int",
        "interface",
        "isset",
        "iterable",
        "list",
        "match",
        "mixed",
        "namespace",
        "never",
        "new",
        "null",
        "object",
        "or",
        "parent",
        "print",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "require_once",
        "return",
        "self",
        "static",
        "string",
        "switch",
        "throw",
        "trait",
        "true",
        "try",
        "unset",
        "use",
        "var",
        "void",
        "while",
        "xor",
        "yield",
    ]
    .into()
});

/// Produces a class-identifier-safe version of `raw`: StudlyCase, non-empty,
/// never a reserved word, never starting with a digit.
pub fn safe_class_name(raw: &str) -> String {
    let mut name = to_studly_case(raw);

    if name.is_empty() {
        name = "Unnamed".to_string();
    }

    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    if RESERVED_WORDS.contains(name.to_lowercase().as_str()) {
        name.push_str("Class");
    }

    name
}

/// DTO class name for a schema: the normalized class name. DTOs are
/// distinguished by namespace, not by suffix, so the name stays predictable
/// from the referenced schema name alone.
pub fn dto_class_name(raw: &str) -> String {
    safe_class_name(raw)
}

/// Class name for an endpoint's resource/collection grouping.
pub fn resource_class_name(raw: &str) -> String {
    safe_class_name(raw)
}

/// Request class name for an endpoint.
pub fn request_class_name(raw: &str) -> String {
    safe_class_name(raw)
}

/// Produces a variable/parameter-safe version of `raw`: strips a leading
/// path-parameter or extension marker (`:`, `@`, `$`), camelCase, never
/// starting with a digit.
///
/// PHP variables may shadow keywords, so no reserved-word check applies.
/// When the result differs from `raw`, the caller must record a rename
/// mapping back to the original spec name to keep the wire format intact.
pub fn safe_variable_name(raw: &str) -> String {
    let trimmed = raw.trim_start_matches([':', '@', '$']);
    let mut name = to_camel_case(trimmed);

    if name.is_empty() {
        name = "value".to_string();
    }

    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    name
}
