//! Ignore directives
//!
//! Source comments can fence off regions (`@text-lint ignore start` /
//! `@text-lint ignore end`) or suppress a single node (`@text-lint
//! ignore`). Region state lives in an [`IgnoreTracker`] owned by one
//! document traversal; it is never shared across validations.

use std::path::{Path, PathBuf};

use crate::parser::SyntaxNode;

/// Opens an ignore region lasting until the matching end marker (or the
/// end of the document, when unbalanced)
pub const IGNORE_START_MARKER: &str = "@text-lint ignore start";
/// Closes an ignore region
pub const IGNORE_END_MARKER: &str = "@text-lint ignore end";
/// Suppresses checking for the single node the comment precedes
pub const IGNORE_LINE_MARKER: &str = "@text-lint ignore";

/// State change reported by [`IgnoreTracker::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreTransition {
    /// The node is a region-start control comment
    Started,
    /// The node is a region-end control comment
    Ended,
    /// No directive on this node
    None,
}

/// Flat two-state machine: inactive, or active for one file.
///
/// Regions do not nest; a second start marker while active is a no-op,
/// as is an end marker while inactive.
#[derive(Debug, Default)]
pub struct IgnoreTracker {
    active: bool,
    file: Option<PathBuf>,
}

impl IgnoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect a node for region markers and apply any transition.
    /// Control comments are not text to extract; callers skip a node
    /// that reports [`IgnoreTransition::Started`].
    pub fn observe(&mut self, node: &SyntaxNode, file: &Path) -> IgnoreTransition {
        if !node.is_comment() {
            return IgnoreTransition::None;
        }
        let body = node.comment_body();
        if body.contains(IGNORE_START_MARKER) {
            self.active = true;
            self.file = Some(file.to_path_buf());
            IgnoreTransition::Started
        } else if body.contains(IGNORE_END_MARKER) {
            self.active = false;
            self.file = None;
            IgnoreTransition::Ended
        } else {
            IgnoreTransition::None
        }
    }

    /// Whether the region currently suppresses nodes of the given file
    pub fn suppresses(&self, file: &Path) -> bool {
        self.active && self.file.as_deref() == Some(file)
    }
}

/// Whether a comment is a single-node suppression directive.
///
/// The region markers contain the single-node marker as a substring, so
/// they are excluded explicitly; otherwise the node following an end
/// marker would be silently skipped too.
pub fn is_line_ignore_comment(node: &SyntaxNode) -> bool {
    if !node.is_comment() {
        return false;
    }
    let body = node.comment_body();
    body.contains(IGNORE_LINE_MARKER)
        && !body.contains(IGNORE_START_MARKER)
        && !body.contains(IGNORE_END_MARKER)
}
