//! Rule-based prose style checker
//!
//! Small set of built-in prose rules plus a configurable forbidden
//! phrase list. Each rule contributes issues under its own rule id;
//! outputs are concatenated with the spelling checker's, never merged.

use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use super::{Checker, Issue};

pub const RULE_REPEATED_WORD: &str = "style/repeated-word";
pub const RULE_SPACE_BEFORE_PUNCTUATION: &str = "style/space-before-punctuation";
pub const RULE_MULTIPLE_SPACES: &str = "style/multiple-spaces";
pub const RULE_FORBIDDEN_PHRASE: &str = "style/forbidden-phrase";

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[.,;:!?]").expect("valid regex"));
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"  +").expect("valid regex"));

/// Prose style linter
#[derive(Debug, Clone, Default)]
pub struct StyleChecker {
    forbidden_phrases: Vec<String>,
}

impl StyleChecker {
    pub fn new(forbidden_phrases: Vec<String>) -> Self {
        Self { forbidden_phrases }
    }
}

#[async_trait]
impl Checker for StyleChecker {
    fn name(&self) -> &'static str {
        "style"
    }

    async fn check(&self, text: &str) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();

        for pair in repeated_words(text) {
            issues.push(Issue::new(
                RULE_REPEATED_WORD,
                format!("\"{pair}\" repeats a word"),
            ));
        }

        if SPACE_BEFORE_PUNCT.is_match(text) {
            issues.push(Issue::new(
                RULE_SPACE_BEFORE_PUNCTUATION,
                "Whitespace before punctuation".to_string(),
            ));
        }

        if MULTI_SPACE.is_match(text) {
            issues.push(Issue::new(
                RULE_MULTIPLE_SPACES,
                "Multiple consecutive spaces".to_string(),
            ));
        }

        let lowered = text.to_lowercase();
        for phrase in &self.forbidden_phrases {
            if lowered.contains(&phrase.to_lowercase()) {
                issues.push(Issue::new(
                    RULE_FORBIDDEN_PHRASE,
                    format!("Avoid the phrase \"{phrase}\""),
                ));
            }
        }

        Ok(issues)
    }
}

/// Consecutive identical words, compared case-insensitively.
/// The regex crate has no backreferences, so this is a plain scan.
fn repeated_words(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();
    for pair in words.windows(2) {
        if pair[0].eq_ignore_ascii_case(pair[1]) {
            found.push(format!("{} {}", pair[0], pair[1]));
        }
    }
    found
}
