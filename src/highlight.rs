//! The highlighting pipeline: extract spans from a syntax tree, resolve
//! nested spans, then render the source as segments.

mod extract;
mod render;
mod resolve;

pub use self::extract::extract;
pub use self::render::render;
pub use self::resolve::resolve;

use crate::config::HighlightConfig;
use crate::error::Result;
use crate::format::Segment;
use crate::tree::{SyntaxNode, SyntaxTree};

/// Highlights `source` using the tree `root` was parsed from it.
///
/// Pure and deterministic: the same tree and text always give the same
/// segments, and the segments concatenate back to `source`.
pub fn highlight<'s, N: SyntaxNode>(
    root: &N,
    source: &'s str,
    config: &HighlightConfig,
) -> Result<Vec<Segment<'s>>> {
    let raw = extract(root, source, config);
    let raw_count = raw.len();
    let spans = resolve(raw);
    log::debug!(
        "extracted {} spans, {} left after resolving",
        raw_count,
        spans.len()
    );
    render(&spans, source)
}

/// Holds a highlighting configuration for repeated passes, e.g. every time
/// the source is edited and reparsed.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut HighlightConfig {
        &mut self.config
    }

    pub fn highlight<'s, N: SyntaxNode>(&self, root: &N, source: &'s str) -> Result<Vec<Segment<'s>>> {
        highlight(root, source, &self.config)
    }

    pub fn highlight_tree<'s>(&self, tree: &SyntaxTree, source: &'s str) -> Result<Vec<Segment<'s>>> {
        highlight(&tree.root_node(), source, &self.config)
    }
}
