//! Textual renderings of a syntax tree: the s-expression dump and a readable
//! outline.

use std::fmt;

use super::SyntaxNode;

const OUTLINE_TEXT_LIMIT: usize = 50;

/// Writes `node` in the s-expression dump format read by
/// [`parse_tree`](super::parser::parse_tree).
pub fn to_sexp<N: SyntaxNode>(node: &N) -> String {
    let mut output = String::new();
    write_sexp(node, 0, &mut output);
    output.push('\n');
    output
}

fn write_sexp<N: SyntaxNode>(node: &N, depth: usize, output: &mut String) {
    indent(depth, output);
    if let Some(field) = node.field_name() {
        output.push_str(field);
        output.push_str(": ");
    }
    output.push('(');
    write_kind(node.kind(), output);
    output.push_str(&format!(" [{}, {}]", node.start_index(), node.end_index()));

    for child in (0..node.child_count()).filter_map(|i| node.child(i)) {
        output.push('\n');
        write_sexp(&child, depth + 1, output);
    }
    output.push(')');
}

fn write_kind(kind: &str, output: &mut String) {
    if is_bare_kind(kind) {
        output.push_str(kind);
        return;
    }

    output.push('"');
    for c in kind.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            c => output.push(c),
        }
    }
    output.push('"');
}

fn is_bare_kind(kind: &str) -> bool {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// One line per node, two spaces of indentation per level: the node type and
/// the first 50 characters of its text with newlines escaped.
pub fn outline<N: SyntaxNode>(node: &N, source: &str) -> String {
    let mut output = String::new();
    write_outline(node, source, 0, &mut output);
    output
}

fn write_outline<N: SyntaxNode>(node: &N, source: &str, depth: usize, output: &mut String) {
    let text = node.text(source).unwrap_or_default();
    let preview: String = text
        .chars()
        .take(OUTLINE_TEXT_LIMIT)
        .collect::<String>()
        .replace('\n', "\\n");
    let ellipsis = if text.chars().count() > OUTLINE_TEXT_LIMIT {
        "..."
    } else {
        ""
    };

    indent(depth, output);
    output.push_str(&format!("{} ({}{})\n", node.kind(), preview, ellipsis));

    for child in (0..node.child_count()).filter_map(|i| node.child(i)) {
        write_outline(&child, source, depth + 1, output);
    }
}

fn indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str("  ");
    }
}

/// Headline facts about a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSummary {
    pub has_error: bool,
    pub child_count: usize,
}

pub fn summary<N: SyntaxNode>(root: &N) -> TreeSummary {
    TreeSummary {
        has_error: root.has_error(),
        child_count: root.child_count(),
    }
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Has errors: {}",
            if self.has_error { "yes" } else { "no" }
        )?;
        write!(f, "Child count: {}", self.child_count)
    }
}
