//! HTML output matching the stylesheet of the Wing code web component.

use crate::format::Segment;

/// Renders segments as `<span>` elements inside `<pre class="wing-code-output">`.
pub fn to_html(segments: &[Segment]) -> String {
    let mut output = String::from("<pre class=\"wing-code-output\">");
    for segment in segments {
        match segment.category {
            Some(category) => {
                output.push_str("<span class=\"");
                output.push_str(category.css_class());
                output.push_str("\">");
            }
            None => output.push_str("<span>"),
        }
        escape_into(segment.text, &mut output);
        output.push_str("</span>");
    }
    output.push_str("</pre>");
    output
}

/// Wraps a preformatted tree dump as the syntax tree panel.
pub fn tree_panel(dump: &str) -> String {
    let mut output = String::from("<pre class=\"wing-code-tree-output\">");
    escape_into(dump, &mut output);
    output.push_str("</pre>");
    output
}

pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    escape_into(text, &mut output);
    output
}

fn escape_into(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Category;

    #[test]
    fn test_to_html() {
        let segments = vec![
            Segment {
                start: 0,
                end: 3,
                text: "let",
                category: Some(Category::Keyword),
            },
            Segment::plain(3, 10, " s = \"<"),
            Segment {
                start: 10,
                end: 11,
                text: "\"",
                category: Some(Category::SpecialCharacter),
            },
        ];
        assert_eq!(
            to_html(&segments),
            "<pre class=\"wing-code-output\">\
             <span class=\"wing-code-keyword\">let</span>\
             <span> s = &quot;&lt;</span>\
             <span class=\"wing-code-special-character\">&quot;</span>\
             </pre>"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_html(&[]), "<pre class=\"wing-code-output\"></pre>");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a && 'b' > c"), "a &amp;&amp; &#39;b&#39; &gt; c");
        assert_eq!(
            tree_panel("(\"<\" [0, 1])"),
            "<pre class=\"wing-code-tree-output\">(&quot;&lt;&quot; [0, 1])</pre>"
        );
    }
}
