//! Word-list spelling checker
//!
//! In-process replacement for shelling out to an external spelling tool
//! per fragment. The dictionary is a lowercase word list embedded at
//! compile time; hosts can supply their own list instead.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;

use super::{Checker, Issue};

const EMBEDDED_WORDS: &str = include_str!("../../resources/words.txt");

pub const RULE_UNKNOWN_WORD: &str = "spell/unknown-word";

/// Dictionary-backed spelling checker
#[derive(Debug, Clone)]
pub struct SpellChecker {
    words: HashSet<String>,
}

impl SpellChecker {
    /// Build from the embedded word list shipped with the crate
    pub fn with_embedded_dictionary() -> Self {
        Self::new(EMBEDDED_WORDS.lines().map(str::to_string))
    }

    /// Build from an arbitrary word list; entries are lowercased, blank
    /// lines and `#` comments are skipped
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let words = words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        Self { words }
    }

    fn is_known(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    /// Tokens a word-level checker should not second-guess: very short
    /// runs, acronyms, and identifier-style mixed case
    fn should_skip(token: &str) -> bool {
        if token.chars().count() < 3 {
            return true;
        }
        if token.chars().all(|c| c.is_ascii_uppercase()) {
            return true;
        }
        // Uppercase after the first character: camelCase or PascalCase
        // identifiers leaking into copy, not prose
        token.chars().skip(1).any(|c| c.is_ascii_uppercase())
    }
}

#[async_trait]
impl Checker for SpellChecker {
    fn name(&self) -> &'static str {
        "spell"
    }

    async fn check(&self, text: &str) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        for token in tokenize(text) {
            if Self::should_skip(token) {
                continue;
            }
            if !self.is_known(token) {
                issues.push(Issue::new(
                    RULE_UNKNOWN_WORD,
                    format!("\"{token}\" appears to be misspelled"),
                ));
            }
        }
        Ok(issues)
    }
}

/// Split into word tokens: letter runs, apostrophes allowed inside
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
}
