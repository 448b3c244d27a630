//! Terminal column width of a single code point.
//!
//! Widths are approximated per code point, not per grapheme cluster: a ZWJ
//! emoji sequence measures as the sum of its parts.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Han script ranges (CJK ideographs, radicals and ideographic marks).
const HAN_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
    (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B739),
    (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0),
    (0x2EBF0, 0x2EE5D),
    (0x2F800, 0x2FA1D),
    (0x30000, 0x3134A),
    (0x31350, 0x323AF),
];

/// Symbols outside the emoji blocks that terminals draw two columns wide.
const WIDE_SYMBOLS: &[u32] = &[0x26A1, 0x26C5, 0x26C8, 0x2753];

/// Display width of `c` in terminal columns: 0, 1 or 2.
///
/// Rules are checked in order and the first match wins; anything not
/// matched is one column wide.
pub fn char_width(c: char) -> usize {
    let cp = c as u32;

    if (0xFE00..=0xFE0F).contains(&cp) {
        return 0;
    }
    if is_combining_mark(c) {
        return 0;
    }
    if matches!(cp, 0x200B..=0x200F) {
        return 0;
    }
    // Skin tones merge into the preceding emoji.
    if (0x1F3FB..=0x1F3FF).contains(&cp) {
        return 0;
    }
    if (0x1F1E6..=0x1F1FF).contains(&cp) {
        return 2;
    }
    if (0x1F300..=0x1F9FF).contains(&cp) || (0x2600..=0x27BF).contains(&cp) {
        return 2;
    }
    if WIDE_SYMBOLS.contains(&cp) {
        return 2;
    }
    if is_han(cp) {
        return 2;
    }
    if (0xFF01..=0xFF60).contains(&cp) || (0xFFE0..=0xFFE6).contains(&cp) {
        return 2;
    }
    1
}

/// Nonspacing (Mn) and enclosing (Me) marks.
fn is_combining_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark | GeneralCategory::EnclosingMark
    )
}

fn is_han(cp: u32) -> bool {
    HAN_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
