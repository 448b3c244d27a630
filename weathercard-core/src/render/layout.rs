//! Line-level layout: padding, borders, side-by-side blocks and table rows.

use tracing::trace;

use super::measure::{truncate_to_width, visual_width};
use super::style::RESET;

const HORIZONTAL: &str = "\u{2500}";
const VERTICAL: char = '\u{2502}';

pub const DAY_COLUMN: usize = 10;
pub const TEMP_COLUMN: usize = 6;
pub const INDENT: &str = "  ";

/// Frame `content` with vertical borders, exactly `width` columns inside.
///
/// Content wider than `width` is truncated. If the kept part carries style
/// codes a reset follows it, so a cut color cannot bleed into the border.
pub fn pad_line(content: &str, width: usize) -> String {
    let mut line = String::with_capacity(content.len() + width + 8);
    line.push(VERTICAL);

    let mut used = visual_width(content);
    if used > width {
        let cut = truncate_to_width(content, width);
        trace!(from = used, to = width, "truncating card line");
        used = visual_width(&cut);
        line.push_str(&cut);
        if cut.contains('\x1b') {
            line.push_str(RESET);
        }
    } else {
        line.push_str(content);
    }

    line.extend(std::iter::repeat_n(' ', width - used));
    line.push(VERTICAL);
    line.push('\n');
    line
}

/// An interior line with nothing in it.
pub fn empty_line(width: usize) -> String {
    pad_line("", width)
}

fn rule(left: char, right: char, width: usize) -> String {
    format!("{left}{}{right}\n", HORIZONTAL.repeat(width))
}

pub fn top_border(width: usize) -> String {
    rule('\u{250C}', '\u{2510}', width)
}

pub fn bottom_border(width: usize) -> String {
    rule('\u{2514}', '\u{2518}', width)
}

/// Horizontal rule joining the side borders with T-junctions.
pub fn divider(width: usize) -> String {
    rule('\u{251C}', '\u{2524}', width)
}

/// Pad on the right to `width` columns. Wider text is returned as is.
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(visual_width(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Pad on the left to `width` columns. Wider text is returned as is.
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(visual_width(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(text);
    out
}

/// Exactly `width` columns: truncated when too wide, padded on the right otherwise.
///
/// A styled cell that gets cut is closed with a reset so its style stays
/// inside the cell.
pub fn fit(text: &str, width: usize) -> String {
    if visual_width(text) > width {
        let mut cut = truncate_to_width(text, width);
        if cut.contains('\x1b') {
            cut.push_str(RESET);
        }
        pad_right(&cut, width)
    } else {
        pad_right(text, width)
    }
}

/// Place `left` and `right` side by side, line by line.
///
/// The left block is padded to `left_width` columns; the shorter block is
/// extended with empty lines. Every merged line starts with [`INDENT`].
pub fn merge_blocks<L, R>(left: &[L], right: &[R], left_width: usize) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map_or("", AsRef::as_ref);
            let r = right.get(i).map_or("", AsRef::as_ref);
            format!("{INDENT}{}{r}", pad_right(l, left_width))
        })
        .collect()
}

/// One forecast table row: day (left aligned), high and low (right
/// aligned), then the icon and an optional description.
pub fn forecast_row(day: &str, hi: &str, lo: &str, icon: &str, desc: &str) -> String {
    let mut row = String::from(INDENT);
    row.push_str(&fit(day, DAY_COLUMN));
    row.push_str(&pad_left(hi, TEMP_COLUMN));
    row.push_str(&pad_left(lo, TEMP_COLUMN));
    row.push_str(INDENT);
    row.push_str(icon);
    if !desc.is_empty() {
        row.push(' ');
        row.push_str(desc);
    }
    row
}
