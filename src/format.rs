use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The highlight category a region of source text is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Keyword,
    BuiltinType,
    Number,
    SpecialCharacter,
    ClassIdentifier,
}

pub const CATEGORIES: &[Category] = &[
    Category::Keyword,
    Category::BuiltinType,
    Category::Number,
    Category::SpecialCharacter,
    Category::ClassIdentifier,
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::BuiltinType => "builtin_type",
            Category::Number => "number",
            Category::SpecialCharacter => "special_character",
            Category::ClassIdentifier => "class_identifier",
        }
    }

    /// CSS class used by the web component stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Keyword => "wing-code-keyword",
            Category::BuiltinType => "wing-code-builtin-type",
            Category::Number => "wing-code-number",
            Category::SpecialCharacter => "wing-code-special-character",
            Category::ClassIdentifier => "wing-code-class-identifier",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified `[start, end)` byte range of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl Span {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Whether `other` lies entirely within this span (equal ranges included).
    pub fn contains(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A contiguous piece of the rendered output. `category` is `None` for plain
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment<'s> {
    pub start: usize,
    pub end: usize,
    pub text: &'s str,
    pub category: Option<Category>,
}

impl<'s> Segment<'s> {
    pub fn plain(start: usize, end: usize, text: &'s str) -> Self {
        Self {
            start,
            end,
            text,
            category: None,
        }
    }

    pub fn categorized(span: &Span, text: &'s str) -> Self {
        Self {
            start: span.start,
            end: span.end,
            text,
            category: Some(span.category),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }
}
