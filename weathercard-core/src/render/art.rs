//! Small glyph-art blocks drawn beside the current conditions.

use super::conditions::Category;

/// Columns reserved for the art block, wide enough for every drawing.
pub const ART_WIDTH: usize = 16;

const CLEAR: &[&str] = &[
    "    \\   /",
    "     .-.",
    "  - (   ) -",
    "     `-'",
    "    /   \\",
];

const CLOUDY: &[&str] = &[
    "",
    "     .--.",
    "  .-(    ).",
    " (___.__)__)",
    "            ",
];

const RAIN: &[&str] = &[
    "     .-.",
    "    (   ).",
    "   (___(__)",
    "    ' ' ' '",
    "   ' ' ' ' ",
];

const SNOW: &[&str] = &[
    "     .-.",
    "    (   ).",
    "   (___(__)",
    "    *  *  *",
    "   *  *  * ",
];

const STORM: &[&str] = &[
    "     .-.",
    "    (   ).",
    "   (___(__)",
    "   /_/ /_/",
    "    /  /   ",
];

const FOG: &[&str] = &[
    "",
    "  _ - _ - _",
    "   _ - _ -",
    "  _ - _ - _",
    "            ",
];

const UNKNOWN: &[&str] = &[
    "",
    "     .-.",
    "    (   )",
    "     '-'",
    "    ?   ? ",
];

pub fn art_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Clear => CLEAR,
        Category::Cloudy => CLOUDY,
        Category::Rain => RAIN,
        Category::Snow => SNOW,
        Category::Storm => STORM,
        Category::Fog => FOG,
        Category::Unknown => UNKNOWN,
    }
}
