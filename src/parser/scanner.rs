//! JSX/TSX source scanner
//!
//! Heuristic extraction of JSX structure from a source file: elements,
//! attributes, text runs, expressions, and comments. Not a compiler -
//! the goal is a tree good enough for text extraction, with malformed
//! input degraded rather than rejected.

use crate::parser::ast::{NodeKind, SyntaxNode};

/// Character cursor over the source with 1-based line tracking
struct Cursor<'a> {
    src: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).map(|&(_, c)| c)
    }

    /// Byte offset of the current position
    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|&(o, _)| o)
            .unwrap_or(self.src.len())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        if c == '\n' {
            self.line += 1;
        }
        self.pos += 1;
        Some(c)
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.src[self.offset()..].starts_with(s)
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    fn mark(&self) -> (usize, usize) {
        (self.pos, self.line)
    }

    fn restore(&mut self, mark: (usize, usize)) {
        self.pos = mark.0;
        self.line = mark.1;
    }
}

/// Scan a whole source file into a node forest
pub fn scan(src: &str) -> Vec<SyntaxNode> {
    let mut cur = Cursor::new(src);
    let mut nodes = Vec::new();

    while !cur.eof() {
        if cur.starts_with("//") {
            let node = line_comment(&mut cur);
            nodes.push(node);
        } else if cur.starts_with("/*") {
            let node = block_comment(&mut cur);
            nodes.push(node);
        } else {
            match cur.peek() {
                Some('"') | Some('\'') | Some('`') => skip_string(&mut cur),
                Some('<') if element_ahead(&cur) => {
                    if let Some(el) = parse_element(&mut cur) {
                        nodes.push(el);
                    } else {
                        cur.bump();
                    }
                }
                _ => {
                    cur.bump();
                }
            }
        }
    }

    nodes
}

/// `<` followed by a tag-name letter, or an opening fragment `<>`
fn element_ahead(cur: &Cursor) -> bool {
    matches!(cur.peek_at(1), Some(c) if c.is_ascii_alphabetic() || c == '>')
}

fn line_comment(cur: &mut Cursor) -> SyntaxNode {
    let start = cur.offset();
    let line = cur.line;
    while let Some(c) = cur.peek() {
        if c == '\n' {
            break;
        }
        cur.bump();
    }
    SyntaxNode::new(NodeKind::Comment, cur.slice(start, cur.offset()), line)
}

fn block_comment(cur: &mut Cursor) -> SyntaxNode {
    let start = cur.offset();
    let line = cur.line;
    cur.bump_n(2);
    while !cur.eof() && !cur.starts_with("*/") {
        cur.bump();
    }
    cur.bump_n(2);
    SyntaxNode::new(NodeKind::Comment, cur.slice(start, cur.offset()), line)
}

/// Consume a quoted string or template literal, honoring backslash escapes
fn skip_string(cur: &mut Cursor) {
    let quote = match cur.bump() {
        Some(q) => q,
        None => return,
    };
    while let Some(c) = cur.bump() {
        if c == '\\' {
            cur.bump();
        } else if c == quote {
            break;
        }
    }
}

/// Consume a balanced `{ ... }` block, skipping strings and comments inside
fn skip_balanced_braces(cur: &mut Cursor) {
    let mut depth = 0usize;
    while let Some(c) = cur.peek() {
        if cur.starts_with("//") {
            line_comment(cur);
            continue;
        }
        if cur.starts_with("/*") {
            block_comment(cur);
            continue;
        }
        match c {
            '"' | '\'' | '`' => skip_string(cur),
            '{' => {
                depth += 1;
                cur.bump();
            }
            '}' => {
                depth = depth.saturating_sub(1);
                cur.bump();
                if depth == 0 {
                    return;
                }
            }
            _ => {
                cur.bump();
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn read_tag_name(cur: &mut Cursor) -> Option<String> {
    let first = cur.peek()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let start = cur.offset();
    cur.bump();
    while let Some(c) = cur.peek() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
            cur.bump();
        } else {
            break;
        }
    }
    Some(cur.slice(start, cur.offset()).to_string())
}

/// Try to parse an element at `<`; restores the cursor and returns None
/// when the input turns out not to be markup (e.g. a comparison)
fn parse_element(cur: &mut Cursor) -> Option<SyntaxNode> {
    let mark = cur.mark();
    let start = cur.offset();
    let start_line = cur.line;
    cur.bump(); // '<'

    // Fragment: <>...</>
    if cur.peek() == Some('>') {
        cur.bump();
        let mut node = SyntaxNode::new(
            NodeKind::Element {
                tag: String::new(),
            },
            "",
            start_line,
        );
        parse_children(cur, &mut node);
        node.text = cur.slice(start, cur.offset()).to_string();
        return Some(node);
    }

    let tag = read_tag_name(cur)?;
    let mut node = SyntaxNode::new(NodeKind::Element { tag }, "", start_line);

    loop {
        while matches!(cur.peek(), Some(c) if c.is_whitespace()) {
            cur.bump();
        }
        if cur.eof() {
            // Unclosed tag at end of input; keep what we have
            break;
        }
        if cur.starts_with("/>") {
            cur.bump_n(2);
            node.text = cur.slice(start, cur.offset()).to_string();
            return Some(node);
        }
        if cur.starts_with("//") {
            let c = line_comment(cur);
            node.children.push(c);
            continue;
        }
        if cur.starts_with("/*") {
            let c = block_comment(cur);
            node.children.push(c);
            continue;
        }
        match cur.peek() {
            Some('>') => {
                cur.bump();
                parse_children(cur, &mut node);
                break;
            }
            Some('{') => {
                // Spread attribute {...props}
                let s = cur.offset();
                let l = cur.line;
                skip_balanced_braces(cur);
                node.children
                    .push(SyntaxNode::new(NodeKind::Other, cur.slice(s, cur.offset()), l));
            }
            Some(c) if is_ident_start(c) => {
                let attr = parse_attribute(cur);
                node.children.push(attr);
            }
            _ => {
                // Not markup after all
                cur.restore(mark);
                return None;
            }
        }
    }

    node.text = cur.slice(start, cur.offset()).to_string();
    Some(node)
}

fn parse_attribute(cur: &mut Cursor) -> SyntaxNode {
    let start = cur.offset();
    let line = cur.line;
    while let Some(c) = cur.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':' {
            cur.bump();
        } else {
            break;
        }
    }
    let name = cur.slice(start, cur.offset()).to_string();
    let name_end = cur.offset();

    // Lookahead for '=' without consuming a bare attribute's trailing space
    let mut k = 0;
    while matches!(cur.peek_at(k), Some(c) if c.is_whitespace()) {
        k += 1;
    }
    let mut attr = SyntaxNode::new(NodeKind::Attribute { name }, "", line);
    if cur.peek_at(k) == Some('=') {
        cur.bump_n(k + 1);
        while matches!(cur.peek(), Some(c) if c.is_whitespace()) {
            cur.bump();
        }
        match cur.peek() {
            Some('"') | Some('\'') => {
                let vs = cur.offset();
                let vl = cur.line;
                skip_string(cur);
                attr.children
                    .push(SyntaxNode::new(NodeKind::Text, cur.slice(vs, cur.offset()), vl));
            }
            Some('{') => {
                let vs = cur.offset();
                let vl = cur.line;
                skip_balanced_braces(cur);
                attr.children.push(SyntaxNode::new(
                    NodeKind::Expression,
                    cur.slice(vs, cur.offset()),
                    vl,
                ));
            }
            _ => {}
        }
        attr.text = cur.slice(start, cur.offset()).to_string();
    } else {
        attr.text = cur.slice(start, name_end).to_string();
    }
    attr
}

/// Parse element content up to and including the closing tag
fn parse_children(cur: &mut Cursor, parent: &mut SyntaxNode) {
    loop {
        if cur.eof() {
            return;
        }
        if cur.starts_with("</") {
            while let Some(c) = cur.bump() {
                if c == '>' {
                    break;
                }
            }
            return;
        }
        if cur.peek() == Some('{') {
            let s = cur.offset();
            let l = cur.line;
            skip_balanced_braces(cur);
            let text = cur.slice(s, cur.offset());
            let kind = if text.trim_end().ends_with("*/}") && text[1..].trim_start().starts_with("/*")
            {
                NodeKind::Comment
            } else {
                NodeKind::Expression
            };
            parent.children.push(SyntaxNode::new(kind, text, l));
            continue;
        }
        if cur.peek() == Some('<') && element_ahead(cur) {
            if let Some(el) = parse_element(cur) {
                parent.children.push(el);
                continue;
            }
        }
        // Literal text run up to the next markup boundary
        let s = cur.offset();
        let l = cur.line;
        cur.bump();
        while let Some(c) = cur.peek() {
            if c == '<' || c == '{' {
                break;
            }
            cur.bump();
        }
        parent
            .children
            .push(SyntaxNode::new(NodeKind::Text, cur.slice(s, cur.offset()), l));
    }
}
