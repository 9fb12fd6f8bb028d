//! Fragmented text detection
//!
//! A text run interleaved with expressions or child markup is a slice of
//! a larger logical sentence; checking it alone produces spurious
//! grammar failures. Such runs are skipped. The test is purely
//! syntactic, over the reconstituted inline content of the parent.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::{NodeKind, SyntaxNode};

static TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z]").expect("valid regex"));
static BRACE_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("valid regex"));
static SELF_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\s*>").expect("valid regex"));

/// Whether text runs among these content siblings are fragments.
///
/// `siblings` is a parent element's child list; attribute nodes are not
/// part of the inline content and do not count.
pub fn is_fragmented_context(siblings: &[SyntaxNode]) -> bool {
    let content: String = siblings
        .iter()
        .filter(|n| !matches!(n.kind, NodeKind::Attribute { .. }))
        .map(|n| n.text.as_str())
        .collect();

    TAG_START.is_match(&content)
        || BRACE_EXPR.is_match(&content)
        || SELF_CLOSE.is_match(&content)
}
