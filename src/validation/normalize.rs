//! Text normalization
//!
//! Turns a raw extracted fragment (possibly quoted, entity-laden, or
//! wrapped across indented JSX lines) into plain text for the checkers.

use regex::Regex;
use std::sync::LazyLock;

static OUTER_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^['"`]|['"`]$"#).expect("valid regex"));
static NAMED_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z]+;").expect("valid regex"));
static WRAPPED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("valid regex"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Normalize a raw fragment for checking.
///
/// Applied in order: strip one layer of surrounding quotes, blank out
/// HTML named entities, join wrapped lines, collapse whitespace runs,
/// trim.
pub fn normalize(raw: &str) -> String {
    let text = OUTER_QUOTES.replace_all(raw, "");
    let text = NAMED_ENTITY.replace_all(&text, " ");
    let text = WRAPPED_LINE.replace_all(&text, " ");
    let text = SPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

/// Whether normalized text is worth sending to checkers.
///
/// Purely numeric, symbolic, or emoji content carries nothing a spelling
/// or prose checker can act on.
pub fn has_checkable_text(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_and_wrapped_lines() {
        assert_eq!(normalize("  Hello   world\n   !"), "Hello world !");
    }

    #[test]
    fn test_strips_outer_quotes() {
        assert_eq!(normalize("'Save changes'"), "Save changes");
        assert_eq!(normalize("\"Save changes\""), "Save changes");
        assert_eq!(normalize("`Save changes`"), "Save changes");
    }

    #[test]
    fn test_strips_only_one_quote_layer() {
        assert_eq!(normalize("\"'quoted'\""), "'quoted'");
    }

    #[test]
    fn test_replaces_named_entities() {
        assert_eq!(normalize("Save&nbsp;now"), "Save now");
        assert_eq!(normalize("a&amp;b"), "a b");
    }

    #[test]
    fn test_empty_and_symbolic_input() {
        assert_eq!(normalize("   "), "");
        assert!(!has_checkable_text(""));
        assert!(!has_checkable_text("42%"));
        assert!(!has_checkable_text("→ ★ 12"));
        assert!(has_checkable_text("42% done"));
    }
}
