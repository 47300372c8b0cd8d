//! String transformation utilities for code generation
//!
//! Casing transforms over raw spec identifiers. Any non-alphanumeric
//! character acts as a word separator, so `@odata.count` and
//! `find-pets-by-status` both normalize cleanly.

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use saloon_sdkgen::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("findPetsByStatus"), "find_pets_by_status");
/// assert_eq!(to_snake_case("odata.count"), "odata_count");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch.is_alphanumeric() {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            // Separator: collapse runs, never lead with one
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }

    out.trim_end_matches('_').to_string()
}

/// Converts a string to UpperCamelCase (StudlyCase) for class names.
///
/// # Examples
/// ```
/// use saloon_sdkgen::generation::utils::to_studly_case;
///
/// assert_eq!(to_studly_case("find_pets_by_status"), "FindPetsByStatus");
/// assert_eq!(to_studly_case("user-profile"), "UserProfile");
/// ```
pub fn to_studly_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to camelCase for variable and parameter names.
///
/// # Examples
/// ```
/// use saloon_sdkgen::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("odata.count"), "odataCount");
/// assert_eq!(to_camel_case("UserId"), "userId");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let studly = to_studly_case(s);
    let mut chars = studly.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a string to SCREAMING_SNAKE_CASE for enum case names.
///
/// # Examples
/// ```
/// use saloon_sdkgen::generation::utils::to_screaming_snake_case;
///
/// assert_eq!(to_screaming_snake_case("in progress"), "IN_PROGRESS");
/// assert_eq!(to_screaming_snake_case("notStarted"), "NOT_STARTED");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("findPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("FindPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("find-pets-by-status"), "find_pets_by_status");
        assert_eq!(to_snake_case("find_pets_by_status"), "find_pets_by_status");
        assert_eq!(to_snake_case("odata.count"), "odata_count");
        assert_eq!(to_snake_case("get HTTP Response"), "get_http_response");
        assert_eq!(to_snake_case("int32"), "int32");
        assert_eq!(to_snake_case("__weird__"), "weird");
    }

    #[test]
    fn test_to_studly_case() {
        assert_eq!(to_studly_case("find_pets_by_status"), "FindPetsByStatus");
        assert_eq!(to_studly_case("findPetsByStatus"), "FindPetsByStatus");
        assert_eq!(to_studly_case("user-profile"), "UserProfile");
        assert_eq!(to_studly_case("odata.count"), "OdataCount");
        assert_eq!(to_studly_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("find_pets_by_status"), "findPetsByStatus");
        assert_eq!(to_camel_case("FindPetsByStatus"), "findPetsByStatus");
        assert_eq!(to_camel_case("odata.count"), "odataCount");
        assert_eq!(to_camel_case("id"), "id");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("in progress"), "IN_PROGRESS");
        assert_eq!(to_screaming_snake_case("notStarted"), "NOT_STARTED");
        assert_eq!(to_screaming_snake_case("done"), "DONE");
    }
}
