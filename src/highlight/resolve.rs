use crate::format::Span;

/// Orders spans by start offset and drops every span that lies inside another
/// one. On ties the span seen first by the extractor wins, so outer spans
/// beat the nested spans found below them.
///
/// Partially overlapping spans are kept as they are; the extractor only ever
/// produces nested or disjoint ranges.
pub fn resolve(mut spans: Vec<Span>) -> Vec<Span> {
    // stable: keeps pre-order among equal starts
    spans.sort_by_key(|span| span.start);

    let mut accepted: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if let Some(outer) = accepted.iter().find(|a| a.contains(&span)) {
            log::debug!(
                "dropping {} {}..{} inside {} {}..{}",
                span.category,
                span.start,
                span.end,
                outer.category,
                outer.start,
                outer.end
            );
            continue;
        }
        accepted.retain(|a| !span.contains(a));
        accepted.push(span);
    }
    accepted
}
