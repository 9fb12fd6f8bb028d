//! JSX/TSX scanning
//!
//! Produces the node tree consumed by the validation engine. The engine
//! only depends on the `ast` types, so this scanner is swappable for a
//! real parser without touching extraction logic.

pub mod ast;
pub mod scanner;

pub use ast::{Document, NodeKind, SyntaxNode};

use std::path::Path;

/// Scan one source file's contents into a document tree
pub fn parse_document(path: impl AsRef<Path>, source: &str) -> Document {
    Document::new(path.as_ref().to_path_buf(), scanner::scan(source))
}
