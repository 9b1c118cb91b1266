//! Syntax trees produced by an external parser.
//!
//! The highlighter never builds trees itself. It walks anything implementing
//! [`SyntaxNode`]: the owned [`SyntaxTree`] loaded from a dump of an external
//! parse, or a native tree-sitter node when the `tree-sitter` feature is on.

mod node;
pub mod parser;
pub mod printer;
#[cfg(feature = "tree-sitter")]
pub mod sitter;

pub use node::{SyntaxTree, TreeNode};

/// Read-only view of one node of an external syntax tree.
///
/// Ranges are byte offsets into the source text the tree was parsed from.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> &str;

    fn start_index(&self) -> usize;

    fn end_index(&self) -> usize;

    fn child_count(&self) -> usize;

    /// The `index`-th child, or `None` when the tree has no node there.
    fn child(&self, index: usize) -> Option<Self>;

    /// Name of the field this node occupies in its parent, if any.
    fn field_name(&self) -> Option<&str> {
        None
    }

    /// The source text covered by this node. `None` when the node range does
    /// not describe a valid slice of `source`.
    fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start_index()..self.end_index())
    }

    fn is_error(&self) -> bool {
        self.kind() == "ERROR"
    }

    /// Zero-width placeholder the parser inserted for a missing token.
    fn is_missing(&self) -> bool {
        self.kind().starts_with("MISSING") && self.start_index() == self.end_index()
    }

    fn has_error(&self) -> bool {
        self.is_error()
            || self.is_missing()
            || (0..self.child_count())
                .filter_map(|i| self.child(i))
                .any(|child| child.has_error())
    }
}
