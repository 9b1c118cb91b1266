//! Highlighting configuration: the keyword set, the special-character set and
//! the node-type names the extractor dispatches on.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reserved words of the Wing language.
pub const WING_KEYWORDS: &[&str] = &[
    "bring",
    "let",
    "const",
    "var",
    "if",
    "else",
    "for",
    "while",
    "return",
    "fn",
    "class",
    "interface",
    "struct",
    "enum",
    "new",
    "this",
    "super",
    "async",
    "await",
    "in",
    "is",
    "as",
    "extends",
    "implements",
    "static",
    "public",
    "private",
    "protected",
    "internal",
    "extern",
    "inflight",
    "preflight",
    "test",
    "try",
    "catch",
    "throw",
    "finally",
];

pub const WING_SPECIAL_CHARACTERS: &[&str] =
    &[";", ",", ".", ":", "(", ")", "{", "}", "[", "]", "\"", "'"];

/// What a node type means to the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    ClassDefinition,
    BuiltinType,
    Number,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightConfig {
    /// Compared against the lowercased text of leaf nodes.
    pub keywords: BTreeSet<String>,
    /// Compared against the exact text of leaf nodes.
    pub special_characters: BTreeSet<String>,
    pub class_definition_kind: String,
    pub builtin_type_kind: String,
    pub identifier_kind: String,
    pub number_kinds: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::wing()
    }
}

impl HighlightConfig {
    pub fn wing() -> Self {
        Self {
            keywords: WING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            special_characters: WING_SPECIAL_CHARACTERS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            class_definition_kind: "class_definition".to_string(),
            builtin_type_kind: "builtin_type".to_string(),
            identifier_kind: "identifier".to_string(),
            number_kinds: vec!["number".to_string(), "number_literal".to_string()],
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn with_special_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.special_characters = characters
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        self
    }

    /// Lowercases keywords and node-type names so lookups against normalized
    /// node types and lowercased text succeed.
    pub fn normalized(mut self) -> Self {
        self.keywords = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        self.class_definition_kind = self.class_definition_kind.to_lowercase();
        self.builtin_type_kind = self.builtin_type_kind.to_lowercase();
        self.identifier_kind = self.identifier_kind.to_lowercase();
        for kind in &mut self.number_kinds {
            *kind = kind.to_lowercase();
        }
        self
    }

    /// Classifies a normalized (lowercased) node type. Checked in rule order:
    /// class definition, builtin type, number.
    pub fn classify(&self, kind: &str) -> NodeRole {
        if kind == self.class_definition_kind {
            NodeRole::ClassDefinition
        } else if kind == self.builtin_type_kind {
            NodeRole::BuiltinType
        } else if self.number_kinds.iter().any(|k| k == kind) {
            NodeRole::Number
        } else {
            NodeRole::Other
        }
    }

    pub fn is_identifier(&self, kind: &str) -> bool {
        kind.to_lowercase() == self.identifier_kind
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(&text.to_lowercase())
    }

    pub fn is_special_character(&self, text: &str) -> bool {
        self.special_characters.contains(text)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        let config: HighlightConfig = serde_json::from_str(input)?;
        Ok(config.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let config = HighlightConfig::wing();
        assert_eq!(config.classify("class_definition"), NodeRole::ClassDefinition);
        assert_eq!(config.classify("builtin_type"), NodeRole::BuiltinType);
        assert_eq!(config.classify("number"), NodeRole::Number);
        assert_eq!(config.classify("number_literal"), NodeRole::Number);
        assert_eq!(config.classify("identifier"), NodeRole::Other);
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let config = HighlightConfig::wing();
        assert!(config.is_keyword("inflight"));
        assert!(config.is_keyword("Inflight"));
        assert!(config.is_keyword("LET"));
        assert!(!config.is_keyword("cloud"));
    }

    #[test]
    fn test_special_characters_are_exact() {
        let config = HighlightConfig::wing();
        assert!(config.is_special_character(";"));
        assert!(config.is_special_character("\""));
        assert!(!config.is_special_character("="));
        assert!(!config.is_special_character(";;"));
    }

    #[test]
    fn test_with_keywords_lowercases() {
        let config = HighlightConfig::wing().with_keywords(["Foo", "BAR"]);
        assert!(config.is_keyword("foo"));
        assert!(config.is_keyword("bar"));
        assert!(!config.is_keyword("let"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_keeps_defaults() {
        let config = HighlightConfig::from_json(
            r#"{ "keywords": ["Pub"], "class_definition_kind": "Class_Decl" }"#,
        )
        .unwrap();
        assert!(config.is_keyword("pub"));
        assert!(!config.is_keyword("let"));
        assert_eq!(config.classify("class_decl"), NodeRole::ClassDefinition);
        assert_eq!(config.builtin_type_kind, "builtin_type");
        assert!(config.is_special_character(";"));
    }
}
