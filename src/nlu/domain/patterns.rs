//! Compilation of the built-in regular expressions.

use regex::Regex;

/// Compiles one of the crate's literal patterns.
#[expect(
    clippy::expect_used,
    reason = "only called with literal patterns that the unit tests compile"
)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Compiles a table of literal patterns, preserving order.
pub(crate) fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|pattern| compile(pattern)).collect()
}
