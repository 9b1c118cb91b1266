use thiserror::Error;

use crate::format::Category;

pub type Result<T, E = HighlightError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("{category} span {start}..{end} has its start after its end")]
    InvertedSpan {
        category: Category,
        start: usize,
        end: usize,
    },
    #[error("{category} span {start}..{end} is out of bounds for source of length {len}")]
    SpanOutOfBounds {
        category: Category,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("{category} span {start}..{end} does not fall on a character boundary")]
    SpanNotOnCharBoundary {
        category: Category,
        start: usize,
        end: usize,
    },
    #[error("{category} span {start}..{end} overlaps text already rendered up to {cursor}")]
    OverlappingSpan {
        category: Category,
        start: usize,
        end: usize,
        cursor: usize,
    },
    #[error("Node `{kind}` has range {start}..{end} outside of source of length {len}")]
    InvalidNodeRange {
        kind: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Tree dump error:\n{0}")]
    TreeDump(String),
    #[cfg(feature = "serde")]
    #[error("Tree dump error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Highlighting unavailable: {0}")]
    Unavailable(String),
}

impl HighlightError {
    /// Whether the error comes from the upstream tree source rather than from
    /// the highlighting pipeline itself.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HighlightError::Unavailable(_))
    }
}
