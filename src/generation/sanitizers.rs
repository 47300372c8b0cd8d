//! Sanitizer functions for generated documentation comments
//!
//! Spec descriptions are free text of uneven quality; these utilities make
//! them safe and readable inside PHP docblocks.

use once_cell::sync::Lazy;
use regex::Regex;

static SMART_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{2018}\u{2019}\u{201C}\u{201D}\u{2014}]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sanitizes free text for use in a docblock: replaces smart quotes and
/// em-dashes with ASCII, collapses whitespace, drops empty lines and escapes
/// the docblock terminator.
pub fn sanitize_doc_text(input: &str) -> String {
    input
        .lines()
        .map(|line| {
            let line = SMART_PUNCTUATION.replace_all(line, |caps: &regex::Captures| {
                match &caps[0] {
                    "\u{2018}" | "\u{2019}" => "'",
                    "\u{201C}" | "\u{201D}" => "\"",
                    "\u{2014}" => "-",
                    _ => "",
                }
            });
            let collapsed = WHITESPACE_RUN.replace_all(line.trim(), " ").to_string();
            // `*/` would terminate the docblock early
            collapsed.replace("*/", "*\\/")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word-wraps sanitized text to `width` columns for docblock bodies.
pub fn wrap_long_lines(input: &str, width: usize) -> String {
    let text = sanitize_doc_text(input);
    if text.is_empty() {
        return text;
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
