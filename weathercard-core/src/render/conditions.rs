//! WMO weather code → description, icon and art category.

/// Art family drawn next to the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Storm,
    Fog,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub code: i32,
    /// English description, used when no translation exists.
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
}

const fn cond(code: i32, description: &'static str, icon: &'static str, category: Category) -> Condition {
    Condition { code, description, icon, category }
}

const CONDITIONS: &[Condition] = &[
    cond(0, "Clear sky", "\u{2600}\u{FE0F}", Category::Clear),
    cond(1, "Mainly clear", "\u{1F324}\u{FE0F}", Category::Clear),
    cond(2, "Partly cloudy", "\u{26C5}", Category::Cloudy),
    cond(3, "Overcast", "\u{2601}\u{FE0F}", Category::Cloudy),
    cond(45, "Fog", "\u{1F32B}\u{FE0F}", Category::Fog),
    cond(48, "Depositing rime fog", "\u{1F32B}\u{FE0F}", Category::Fog),
    cond(51, "Light drizzle", "\u{1F326}\u{FE0F}", Category::Rain),
    cond(53, "Moderate drizzle", "\u{1F326}\u{FE0F}", Category::Rain),
    cond(55, "Dense drizzle", "\u{1F326}\u{FE0F}", Category::Rain),
    cond(56, "Light freezing drizzle", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(57, "Dense freezing drizzle", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(61, "Slight rain", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(63, "Moderate rain", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(65, "Heavy rain", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(66, "Light freezing rain", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(67, "Heavy freezing rain", "\u{1F327}\u{FE0F}", Category::Rain),
    cond(71, "Slight snow", "\u{2744}\u{FE0F}", Category::Snow),
    cond(73, "Moderate snow", "\u{2744}\u{FE0F}", Category::Snow),
    cond(75, "Heavy snow", "\u{2744}\u{FE0F}", Category::Snow),
    cond(77, "Snow grains", "\u{2744}\u{FE0F}", Category::Snow),
    cond(80, "Slight rain showers", "\u{1F326}\u{FE0F}", Category::Rain),
    cond(81, "Moderate rain showers", "\u{1F326}\u{FE0F}", Category::Rain),
    cond(82, "Violent rain showers", "\u{26C8}\u{FE0F}", Category::Rain),
    cond(85, "Slight snow showers", "\u{1F328}\u{FE0F}", Category::Snow),
    cond(86, "Heavy snow showers", "\u{1F328}\u{FE0F}", Category::Snow),
    cond(95, "Thunderstorm", "\u{26A1}", Category::Storm),
    cond(96, "Thunderstorm with slight hail", "\u{26A1}", Category::Storm),
    cond(99, "Thunderstorm with heavy hail", "\u{26A1}", Category::Storm),
];

/// Every WMO code with a dedicated entry.
pub fn known_codes() -> impl Iterator<Item = i32> {
    CONDITIONS.iter().map(|c| c.code)
}

/// Display tuple for `code`. Codes without an entry map to "Unknown".
pub fn lookup(code: i32) -> Condition {
    CONDITIONS
        .iter()
        .find(|c| c.code == code)
        .copied()
        .unwrap_or(cond(code, "Unknown", "\u{2753}", Category::Unknown))
}
