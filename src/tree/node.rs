//! Owned syntax tree loaded from a parser dump

use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::SyntaxNode;
use crate::error::{HighlightError, Result};

/// One node of a dumped syntax tree.
///
/// The JSON form mirrors the node properties of web-tree-sitter
/// (`type`, `startIndex`, `endIndex`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNode {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,

    /// Field name in the parent, e.g. `name` for `name: (identifier ...)`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub field: Option<String>,

    pub start_index: usize,
    pub end_index: usize,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(
        kind: impl Into<String>,
        start_index: usize,
        end_index: usize,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            kind: kind.into(),
            field: None,
            start_index,
            end_index,
            children,
        }
    }

    pub fn leaf(kind: impl Into<String>, start_index: usize, end_index: usize) -> Self {
        Self::new(kind, start_index, end_index, Vec::new())
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    fn validate(&self, source: &str) -> Result<()> {
        let (start, end) = (self.start_index, self.end_index);
        if start > end
            || end > source.len()
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            return Err(HighlightError::InvalidNodeRange {
                kind: self.kind.clone(),
                start,
                end,
                len: source.len(),
            });
        }
        self.children
            .iter()
            .try_for_each(|child| child.validate(source))
    }
}

impl<'a> SyntaxNode for &'a TreeNode {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start_index(&self) -> usize {
        self.start_index
    }

    fn end_index(&self) -> usize {
        self.end_index
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        let node: &'a TreeNode = *self;
        node.children.get(index)
    }

    fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// A complete syntax tree as dumped by the external parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: TreeNode,
}

impl SyntaxTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root_node(&self) -> &TreeNode {
        &self.root
    }

    pub fn into_root(self) -> TreeNode {
        self.root
    }

    pub fn has_error(&self) -> bool {
        self.root_node().has_error()
    }

    /// Parses a dump, picking the format from its first non-blank character:
    /// `{` for JSON, anything else for the s-expression form.
    pub fn parse_dump(input: &str) -> Result<Self> {
        if input.trim_start().starts_with('{') {
            Self::from_json(input)
        } else {
            Self::from_sexp(input)
        }
    }

    pub fn from_sexp(input: &str) -> Result<Self> {
        super::parser::parse_tree(input)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> Result<Self> {
        let root: TreeNode = serde_json::from_str(input)?;
        Ok(Self::new(root))
    }

    #[cfg(not(feature = "serde"))]
    pub fn from_json(_input: &str) -> Result<Self> {
        Err(HighlightError::TreeDump(
            "JSON tree dumps require the `serde` feature".to_string(),
        ))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Reads and parses a dump file. Any failure means no tree is available
    /// to highlight with.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| HighlightError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::parse_dump(&text)
            .map_err(|e| HighlightError::Unavailable(format!("{}: {}", path.display(), e)))
    }

    /// Checks that every node range is a valid slice of `source`.
    pub fn validate(&self, source: &str) -> Result<()> {
        self.root.validate(source)
    }
}
