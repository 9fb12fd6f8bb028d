//! Validation engine
//!
//! Walks a scanned document once, decides which nodes carry
//! user-visible text, and routes surviving fragments through the
//! configured checkers, producing line-addressed diagnostics in
//! document order.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::checkers::{Checker, Issue};
use crate::parser::{Document, NodeKind, SyntaxNode};
use crate::validation::attributes::{AttributeDisposition, AttributePolicy};
use crate::validation::fragment::is_fragmented_context;
use crate::validation::ignore::{is_line_ignore_comment, IgnoreTracker, IgnoreTransition};
use crate::validation::normalize::{has_checkable_text, normalize};

/// Where an extracted segment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrigin {
    Attribute,
    TextRun,
}

/// A normalized piece of user-visible text, ready for checking
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub text: String,
    pub line: usize,
    pub origin: SegmentOrigin,
}

/// A line-addressed issue report for one document
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub rule_id: String,
}

const DEFAULT_CHECKER_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-document validation driver.
///
/// Holds no per-document state between calls; concurrent `validate`
/// calls on different documents are independent.
pub struct Validator {
    policy: AttributePolicy,
    checkers: Vec<Box<dyn Checker>>,
    checker_timeout: Duration,
}

impl Validator {
    pub fn new(policy: AttributePolicy, checkers: Vec<Box<dyn Checker>>) -> Self {
        Self {
            policy,
            checkers,
            checker_timeout: DEFAULT_CHECKER_TIMEOUT,
        }
    }

    /// Bound each checker call; a timeout means no diagnostics from that
    /// checker for that segment, not a failed document
    pub fn with_checker_timeout(mut self, timeout: Duration) -> Self {
        self.checker_timeout = timeout;
        self
    }

    /// Validate one document. Diagnostics come back in document order;
    /// checker failures are logged and contained per segment.
    pub async fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let segments = extract_segments(doc, &self.policy);
        log::debug!(
            "{}: {} segment(s) extracted",
            doc.path.display(),
            segments.len()
        );

        // Identical fragments recur (repeated labels, list rows); check
        // each distinct text once and reuse the issues per line.
        let mut cache: HashMap<String, Vec<Issue>> = HashMap::new();
        let mut diagnostics = Vec::new();

        for segment in &segments {
            let issues = match cache.get(&segment.text) {
                Some(hit) => hit.clone(),
                None => {
                    let issues = self.check_segment(segment, doc.path.as_path()).await;
                    cache.insert(segment.text.clone(), issues.clone());
                    issues
                }
            };
            diagnostics.extend(issues.into_iter().map(|issue| Diagnostic {
                line: segment.line,
                message: issue.message,
                rule_id: issue.rule_id,
            }));
        }

        diagnostics
    }

    async fn check_segment(&self, segment: &TextSegment, path: &Path) -> Vec<Issue> {
        let mut issues = Vec::new();
        for checker in &self.checkers {
            match tokio::time::timeout(self.checker_timeout, checker.check(&segment.text)).await {
                Ok(Ok(found)) => issues.extend(found),
                Ok(Err(e)) => log::warn!(
                    "checker '{}' failed at {}:{}: {e:#}",
                    checker.name(),
                    path.display(),
                    segment.line
                ),
                Err(_) => log::warn!(
                    "checker '{}' timed out at {}:{}",
                    checker.name(),
                    path.display(),
                    segment.line
                ),
            }
        }
        issues
    }
}

/// Single pre-order pass: ignore directives, attribute policy, fragment
/// detection, normalization. Pure with respect to the document.
pub fn extract_segments(doc: &Document, policy: &AttributePolicy) -> Vec<TextSegment> {
    let mut tracker = IgnoreTracker::new();
    let mut segments = Vec::new();
    walk_siblings(
        &doc.nodes,
        doc.path.as_path(),
        policy,
        &mut tracker,
        &mut segments,
    );
    segments
}

fn walk_siblings(
    siblings: &[SyntaxNode],
    file: &Path,
    policy: &AttributePolicy,
    tracker: &mut IgnoreTracker,
    out: &mut Vec<TextSegment>,
) {
    for (idx, node) in siblings.iter().enumerate() {
        let transition = tracker.observe(node, file);
        if transition == IgnoreTransition::Started {
            // Control comment, not text
            continue;
        }
        if tracker.suppresses(file) {
            // Still descend: an end marker deeper in the tree reopens
            // checking for the rest of the document
            walk_siblings(&node.children, file, policy, tracker, out);
            continue;
        }

        match &node.kind {
            NodeKind::Attribute { name } => {
                if policy.classify(name) != AttributeDisposition::Checked {
                    continue;
                }
                if preceded_by_line_ignore(siblings, idx) {
                    continue;
                }
                // Only string literal values carry user-visible text;
                // expression values are opaque
                if let Some(value) = node.attribute_value() {
                    if value.kind == NodeKind::Text {
                        push_segment(out, &value.text, value.line, SegmentOrigin::Attribute);
                    }
                }
            }
            NodeKind::Text => {
                if node.text.trim().is_empty()
                    || is_fragmented_context(siblings)
                    || preceded_by_line_ignore(siblings, idx)
                {
                    continue;
                }
                push_segment(
                    out,
                    node.text.trim(),
                    text_start_line(node),
                    SegmentOrigin::TextRun,
                );
            }
            NodeKind::Element { .. } => {
                walk_siblings(&node.children, file, policy, tracker, out);
            }
            NodeKind::Expression | NodeKind::Comment | NodeKind::Other => {}
        }
    }
}

fn push_segment(out: &mut Vec<TextSegment>, raw: &str, line: usize, origin: SegmentOrigin) {
    let text = normalize(raw);
    if text.is_empty() || !has_checkable_text(&text) {
        return;
    }
    out.push(TextSegment { text, line, origin });
}

/// Immediately preceding sibling comment carrying the single-node marker
fn preceded_by_line_ignore(siblings: &[SyntaxNode], idx: usize) -> bool {
    idx > 0 && is_line_ignore_comment(&siblings[idx - 1])
}

/// A text run often opens with the newline ending the tag's line; the
/// reported line is where the visible text actually starts
fn text_start_line(node: &SyntaxNode) -> usize {
    let leading_newlines = node
        .text
        .chars()
        .take_while(|c| c.is_whitespace())
        .filter(|&c| c == '\n')
        .count();
    node.line + leading_newlines
}
