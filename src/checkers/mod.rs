//! Checker contract and reference checkers
//!
//! The engine only depends on the [`Checker`] trait; concrete checkers
//! are pluggable. The two shipped here are long-lived in-process
//! services: a word-list spelling checker and a rule-based prose linter.

pub mod spell;
pub mod style;

pub use spell::SpellChecker;
pub use style::StyleChecker;

use anyhow::Result;
use async_trait::async_trait;

/// A single finding from a checker
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub message: String,
    pub rule_id: String,
}

impl Issue {
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule_id: rule_id.into(),
        }
    }
}

/// Evaluates normalized text for spelling or prose-style issues.
///
/// Implementations must not mutate or retain the input, may be called
/// concurrently for different documents, and may fail; the engine
/// contains failures per segment.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn check(&self, text: &str) -> Result<Vec<Issue>>;
}

/// The standard checker pair: embedded-dictionary spelling plus prose style
pub fn default_checkers(forbidden_phrases: Vec<String>) -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(SpellChecker::with_embedded_dictionary()),
        Box::new(StyleChecker::new(forbidden_phrases)),
    ]
}
