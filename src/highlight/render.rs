use crate::error::{HighlightError, Result};
use crate::format::{Segment, Span};

/// Cuts `source` into plain and categorized segments following resolved
/// spans. The segments cover the source exactly once, in order.
///
/// Spans must be sorted and disjoint. A span that is inverted, out of
/// bounds, splits a character or reaches back into already rendered text is
/// an error; it is never clamped.
pub fn render<'s>(spans: &[Span], source: &'s str) -> Result<Vec<Segment<'s>>> {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        check_span(span, source, cursor)?;
        if span.is_empty() {
            continue;
        }
        if span.start > cursor {
            segments.push(Segment::plain(
                cursor,
                span.start,
                &source[cursor..span.start],
            ));
        }
        segments.push(Segment::categorized(span, &source[span.start..span.end]));
        cursor = span.end;
    }

    if cursor < source.len() {
        segments.push(Segment::plain(cursor, source.len(), &source[cursor..]));
    }

    Ok(segments)
}

fn check_span(span: &Span, source: &str, cursor: usize) -> Result<()> {
    let Span {
        start,
        end,
        category,
    } = *span;

    if start > end {
        return Err(HighlightError::InvertedSpan {
            category,
            start,
            end,
        });
    }
    if end > source.len() {
        return Err(HighlightError::SpanOutOfBounds {
            category,
            start,
            end,
            len: source.len(),
        });
    }
    if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
        return Err(HighlightError::SpanNotOnCharBoundary {
            category,
            start,
            end,
        });
    }
    if start < cursor {
        return Err(HighlightError::OverlappingSpan {
            category,
            start,
            end,
            cursor,
        });
    }
    Ok(())
}
