pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod html;
pub mod result;
pub mod tree;

pub use config::HighlightConfig;
pub use error::{HighlightError, Result};
pub use format::{Category, Segment, Span};
pub use highlight::{highlight, Highlighter};
pub use tree::{SyntaxNode, SyntaxTree, TreeNode};
