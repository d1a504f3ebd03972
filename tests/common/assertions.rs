//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for a `status` output line `<indicator>\t<path>`
pub fn has_status_line(indicator: &str, path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{indicator}\t{path}\n"))
}

/// Checks for a `tree` output line whose label is `glyph` and name is `name`
pub fn has_tree_line(glyph: &str, indent: usize, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{glyph} {}{name}\n", "  ".repeat(indent)))
}

/// Checks for the CLI error banner
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}
