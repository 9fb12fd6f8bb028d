//! Syntax tree for scanned JSX/TSX source
//!
//! Small, closed set of node categories - enough for text extraction,
//! no type information or full expression structure.

use std::path::PathBuf;

/// Category of a syntax node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A JSX element (or fragment, with an empty tag name)
    Element { tag: String },
    /// An attribute inside an opening tag; the value, if any, is the
    /// node's first child (a `Text` literal or an `Expression`)
    Attribute { name: String },
    /// A literal text run between markup
    Text,
    /// A brace-delimited expression `{ ... }`
    Expression,
    /// A comment: `// ...`, `/* ... */`, or `{/* ... */}`
    Comment,
    /// Anything the scanner consumed but could not classify
    Other,
}

/// A node in the scanned tree
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Raw source text of the node, including delimiters and quotes
    pub text: String,
    /// 1-based source line of the node's first character
    pub line: usize,
    /// For elements: attributes first, then content in document order
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            children: Vec::new(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == NodeKind::Comment
    }

    /// Comment body with delimiters removed; the trimmed text for non-comments
    pub fn comment_body(&self) -> &str {
        let t = self.text.trim();
        if let Some(inner) = t.strip_prefix("{/*").and_then(|s| s.strip_suffix("*/}")) {
            inner
        } else if let Some(inner) = t.strip_prefix("/*").and_then(|s| s.strip_suffix("*/")) {
            inner
        } else if let Some(inner) = t.strip_prefix("//") {
            inner
        } else {
            t
        }
    }

    /// Attribute value node, if this is an attribute with a value
    pub fn attribute_value(&self) -> Option<&SyntaxNode> {
        match self.kind {
            NodeKind::Attribute { .. } => self.children.first(),
            _ => None,
        }
    }
}

/// A scanned document: node forest plus the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub nodes: Vec<SyntaxNode>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, nodes: Vec<SyntaxNode>) -> Self {
        Self {
            path: path.into(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_body_line_comment() {
        let node = SyntaxNode::new(NodeKind::Comment, "// hello", 1);
        assert_eq!(node.comment_body(), " hello");
    }

    #[test]
    fn test_comment_body_block_comment() {
        let node = SyntaxNode::new(NodeKind::Comment, "/* hello */", 1);
        assert_eq!(node.comment_body(), " hello ");
    }

    #[test]
    fn test_comment_body_jsx_comment() {
        let node = SyntaxNode::new(NodeKind::Comment, "{/* hello */}", 1);
        assert_eq!(node.comment_body(), " hello ");
    }

    #[test]
    fn test_attribute_value() {
        let mut attr = SyntaxNode::new(
            NodeKind::Attribute {
                name: "title".to_string(),
            },
            "title=\"Hi\"",
            3,
        );
        attr.children
            .push(SyntaxNode::new(NodeKind::Text, "\"Hi\"", 3));

        let value = attr.attribute_value().unwrap();
        assert_eq!(value.text, "\"Hi\"");
        assert_eq!(value.line, 3);
    }

    #[test]
    fn test_attribute_value_absent_for_text() {
        let node = SyntaxNode::new(NodeKind::Text, "hello", 1);
        assert!(node.attribute_value().is_none());
    }
}
