//! Native tree-sitter trees.
//!
//! The Wing grammar itself is loaded by the caller; this module only lets the
//! highlighter walk the trees it produces.

use tree_sitter::{Node, Parser};

use super::SyntaxNode;
use crate::config::HighlightConfig;
use crate::error::{HighlightError, Result};
use crate::format::Segment;
use crate::highlight::highlight;

impl<'tree> SyntaxNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn start_index(&self) -> usize {
        self.start_byte()
    }

    fn end_index(&self) -> usize {
        self.end_byte()
    }

    fn child_count(&self) -> usize {
        Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        Node::child(self, index)
    }

    fn is_error(&self) -> bool {
        Node::is_error(self)
    }

    fn is_missing(&self) -> bool {
        Node::is_missing(self)
    }

    fn has_error(&self) -> bool {
        Node::has_error(self)
    }
}

/// Parses `source` and highlights the resulting tree. A parser that yields no
/// tree (no language set, cancelled, timed out) leaves highlighting
/// unavailable.
pub fn parse_and_highlight<'s>(
    parser: &mut Parser,
    source: &'s str,
    config: &HighlightConfig,
) -> Result<Vec<Segment<'s>>> {
    let tree = parser.parse(source, None).ok_or_else(|| {
        HighlightError::Unavailable("parser produced no tree; is a language set?".to_string())
    })?;
    highlight(&tree.root_node(), source, config)
}
