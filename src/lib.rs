//! JSX Text Lint
//!
//! A text-quality linter for user-visible strings in JSX/TSX source
//! trees.
//!
//! This library provides:
//! - JSX/TSX scanning into a small syntax tree
//! - Text extraction (attribute policy, fragment detection, ignore directives)
//! - Checker dispatch producing line-addressed diagnostics
//! - Configuration management

pub mod checkers;
pub mod config;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use checkers::{default_checkers, Checker, Issue};
pub use config::Config;
pub use parser::{parse_document, Document, NodeKind, SyntaxNode};
pub use validation::{extract_segments, AttributePolicy, Diagnostic, Validator};
