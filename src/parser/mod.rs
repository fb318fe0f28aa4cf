//! Minimal line-oriented parser for the dummy language.
//!
//! The grammar is a deliberate skeleton: a file is a sequence of lines, each
//! of which is a comment (`# ...`), a directive (`@word ...`), or a plain
//! statement. Parsing is total - malformed input degrades to statement nodes
//! rather than failing, so checks always have a tree to visit.

/// Kind of a syntax-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Comment,
    Directive,
    Statement,
}

/// One node of the parsed tree: kind, 1-based source line, and raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub line: u32,
    pub text: String,
}

/// The parsed representation of one dummy-language file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parse dummy-language source into a syntax tree.
///
/// Blank lines produce no node.
pub fn parse(source: &str) -> SyntaxTree {
    let mut nodes = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = (idx + 1) as u32;
        let trimmed = raw.trim_start();

        if trimmed.is_empty() {
            continue;
        }

        let kind = if trimmed.starts_with('#') {
            NodeKind::Comment
        } else if trimmed.starts_with('@') {
            NodeKind::Directive
        } else {
            NodeKind::Statement
        };

        nodes.push(Node {
            kind,
            line,
            text: raw.to_string(),
        });
    }

    SyntaxTree { nodes }
}
