//! Visual width measurement and width-bounded truncation of styled text.

use super::scan::spans;
use super::width::char_width;

/// Number of terminal columns `text` occupies once printed.
///
/// Control sequences count for nothing.
pub fn visual_width(text: &str) -> usize {
    spans(text)
        .filter(|span| !span.is_control())
        .flat_map(|span| span.text.chars())
        .map(char_width)
        .sum()
}

/// Cut `text` down so it occupies at most `max_width` columns.
///
/// Control sequences ahead of the cut are kept verbatim, as are zero-width
/// characters riding on an already counted glyph. Nothing after the first
/// character that does not fit is kept. No reset sequence is added, so a
/// cut inside a colored run leaves that color active.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut used = 0;

    for span in spans(text) {
        if span.is_control() {
            out.push_str(span.text);
            continue;
        }
        for c in span.text.chars() {
            let w = char_width(c);
            if w > 0 && used + w > max_width {
                return out;
            }
            used += w;
            out.push(c);
        }
    }

    out
}
