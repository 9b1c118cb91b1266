use crate::config::{HighlightConfig, NodeRole};
use crate::format::{Category, Span};
use crate::tree::SyntaxNode;

/// Walks the tree depth-first in pre-order and records a span for every node
/// of interest. The result is in walk order and may contain nested spans.
pub fn extract<N: SyntaxNode>(root: &N, source: &str, config: &HighlightConfig) -> Vec<Span> {
    let mut collector = SpanCollector::new(source, config);
    collector.visit(root);
    collector.finish()
}

struct SpanCollector<'a> {
    source: &'a str,
    config: &'a HighlightConfig,
    spans: Vec<Span>,
}

impl<'a> SpanCollector<'a> {
    fn new(source: &'a str, config: &'a HighlightConfig) -> Self {
        Self {
            source,
            config,
            spans: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Span> {
        self.spans
    }

    fn push<N: SyntaxNode>(&mut self, node: &N, category: Category) {
        self.spans
            .push(Span::new(node.start_index(), node.end_index(), category));
    }

    fn visit<N: SyntaxNode>(&mut self, node: &N) {
        let kind = node.kind().to_lowercase();
        let child_count = node.child_count();
        log::trace!("{} {:?}", kind, node.text(self.source));

        match self.config.classify(&kind) {
            NodeRole::ClassDefinition => {
                // only the first direct identifier child names the class
                let name = (0..child_count)
                    .filter_map(|i| node.child(i))
                    .find(|child| self.config.is_identifier(child.kind()));
                if let Some(name) = name {
                    self.push(&name, Category::ClassIdentifier);
                }
            }
            NodeRole::BuiltinType if child_count > 0 => {
                if let Some(first) = node.child(0) {
                    self.push(&first, Category::BuiltinType);
                }
                return;
            }
            NodeRole::Number => {
                self.push(node, Category::Number);
                if child_count == 0 {
                    return;
                }
            }
            _ => {}
        }

        if child_count == 0 {
            if let Some(category) = self.classify_leaf(node) {
                self.push(node, category);
                return;
            }
        }

        for child in (0..child_count).filter_map(|i| node.child(i)) {
            self.visit(&child);
        }
    }

    fn classify_leaf<N: SyntaxNode>(&self, node: &N) -> Option<Category> {
        let text = node.text(self.source).filter(|text| !text.is_empty())?;
        if self.config.is_special_character(text) {
            Some(Category::SpecialCharacter)
        } else if self.config.is_keyword(text) {
            Some(Category::Keyword)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn spans(root: &TreeNode, source: &str) -> Vec<(usize, usize, Category)> {
        extract(&root, source, &HighlightConfig::wing())
            .into_iter()
            .map(|s| (s.start, s.end, s.category))
            .collect()
    }

    #[test]
    fn test_builtin_type_uses_first_child_and_stops() {
        // x:num
        let root = TreeNode::new(
            "type_annotation",
            1,
            5,
            vec![
                TreeNode::leaf(":", 1, 2),
                TreeNode::new(
                    "builtin_type",
                    2,
                    5,
                    vec![TreeNode::leaf("num", 2, 5), TreeNode::leaf(";", 4, 5)],
                ),
            ],
        );
        assert_eq!(
            spans(&root, "x:num"),
            vec![
                (1, 2, Category::SpecialCharacter),
                (2, 5, Category::BuiltinType)
            ]
        );
    }

    #[test]
    fn test_childless_builtin_type_falls_through_to_leaf_rules() {
        let root = TreeNode::leaf("builtin_type", 0, 3);
        assert_eq!(spans(&root, "num"), vec![]);
        assert_eq!(spans(&root, "let"), vec![(0, 3, Category::Keyword)]);
    }

    #[test]
    fn test_number_with_children_keeps_descending() {
        let root = TreeNode::new(
            "Number_Literal",
            0,
            4,
            vec![TreeNode::leaf("integer", 0, 1), TreeNode::leaf(".", 1, 2)],
        );
        assert_eq!(
            spans(&root, "1.50"),
            vec![
                (0, 4, Category::Number),
                (1, 2, Category::SpecialCharacter)
            ]
        );
    }

    #[test]
    fn test_class_identifier_first_direct_child_only() {
        // class Aaa { class Bbb {} }
        let source = "class Aaa { class Bbb {} }";
        let inner = TreeNode::new(
            "class_definition",
            12,
            24,
            vec![
                TreeNode::leaf("class", 12, 17),
                TreeNode::leaf("identifier", 18, 21),
                TreeNode::new(
                    "class_implementation",
                    22,
                    24,
                    vec![TreeNode::leaf("{", 22, 23), TreeNode::leaf("}", 23, 24)],
                ),
            ],
        );
        let root = TreeNode::new(
            "class_definition",
            0,
            26,
            vec![
                TreeNode::leaf("class", 0, 5),
                TreeNode::leaf("identifier", 6, 9),
                TreeNode::leaf("identifier", 6, 9),
                TreeNode::new(
                    "class_implementation",
                    10,
                    26,
                    vec![
                        TreeNode::leaf("{", 10, 11),
                        inner,
                        TreeNode::leaf("}", 25, 26),
                    ],
                ),
            ],
        );
        let found: Vec<_> = spans(&root, source)
            .into_iter()
            .filter(|(_, _, category)| *category == Category::ClassIdentifier)
            .collect();
        assert_eq!(
            found,
            vec![
                (6, 9, Category::ClassIdentifier),
                (18, 21, Category::ClassIdentifier)
            ]
        );
    }

    #[test]
    fn test_class_definition_without_identifier() {
        let root = TreeNode::new(
            "class_definition",
            0,
            5,
            vec![TreeNode::new(
                "wrapper",
                0,
                5,
                vec![TreeNode::leaf("identifier", 0, 5)],
            )],
        );
        assert_eq!(spans(&root, "Hello"), vec![]);
    }

    #[test]
    fn test_keywords_are_case_insensitive_leaves() {
        let root = TreeNode::new(
            "source",
            0,
            11,
            vec![
                TreeNode::leaf("identifier", 0, 8),
                TreeNode::leaf("identifier", 9, 11),
            ],
        );
        assert_eq!(
            spans(&root, "Inflight xx"),
            vec![(0, 8, Category::Keyword)]
        );
    }

    #[test]
    fn test_inner_nodes_are_never_keywords() {
        let root = TreeNode::new("let", 0, 3, vec![TreeNode::leaf("identifier", 0, 3)]);
        // the leaf matches, the parent with the same text does not
        assert_eq!(spans(&root, "let"), vec![(0, 3, Category::Keyword)]);
    }

    #[test]
    fn test_invalid_leaf_range_is_skipped() {
        let root = TreeNode::new("source", 0, 3, vec![TreeNode::leaf(";", 5, 6)]);
        assert_eq!(spans(&root, "abc"), vec![]);
    }
}
