//! Translated labels, condition descriptions, weekdays and compass points.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

mod de;
mod en;
mod es;
mod fr;
mod it;
pub mod locale;
mod zh;

/// Fixed vocabulary of labels printed on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Day,
    Hi,
    Lo,
    Cond,
    Humidity,
    Wind,
    Feels,
}

/// All translatable strings for one language.
#[derive(Debug)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
    pub day: &'static str,
    pub hi: &'static str,
    pub lo: &'static str,
    pub cond: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub feels: &'static str,
    /// Indexed from Sunday.
    pub day_abbreviations: [&'static str; 7],
    /// N, NNE, NE, ENE, E, ESE, SE, SSE, S, SSW, SW, WSW, W, WNW, NW, NNW.
    pub cardinals: [&'static str; 16],
    /// WMO code → description.
    pub conditions: &'static [(i32, &'static str)],
    pub tip_manual_location: &'static str,
}

static LANGUAGES: [&Lang; 6] = [&en::LANG, &de::LANG, &es::LANG, &fr::LANG, &it::LANG, &zh::LANG];

pub static ENGLISH: &Lang = &en::LANG;

impl Lang {
    pub fn label(&self, label: Label) -> &'static str {
        match label {
            Label::Day => self.day,
            Label::Hi => self.hi,
            Label::Lo => self.lo,
            Label::Cond => self.cond,
            Label::Humidity => self.humidity,
            Label::Wind => self.wind,
            Label::Feels => self.feels,
        }
    }

    /// Translated description for a WMO code, if this language has one.
    pub fn condition(&self, code: i32) -> Option<&'static str> {
        self.conditions.iter().find(|(c, _)| *c == code).map(|(_, desc)| *desc)
    }

    pub fn day_abbr(&self, weekday: Weekday) -> &'static str {
        self.day_abbreviations[weekday.num_days_from_sunday() as usize]
    }

    /// Compass label for `index` in `0..16`; anything else is `"?"`.
    pub fn cardinal(&self, index: i32) -> &'static str {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cardinals.get(i))
            .copied()
            .unwrap_or("?")
    }

    /// `"Sat 14"` style label for a `YYYY-MM-DD` date.
    ///
    /// Dates that do not parse are returned unchanged.
    pub fn format_day(&self, date: &str) -> String {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(d) => format!("{} {:02}", self.day_abbr(d.weekday()), d.day()),
            Err(_) => date.to_string(),
        }
    }
}

/// Registered languages, English first.
pub fn languages() -> &'static [&'static Lang] {
    &LANGUAGES
}

/// Language registered under `code`, ignoring case.
pub fn lookup(code: &str) -> Option<&'static Lang> {
    let code = code.trim().to_lowercase();
    LANGUAGES.iter().copied().find(|l| l.code == code)
}

/// Pick the override if given, else the system locale, falling back to English.
pub fn select(lang_override: Option<&str>) -> &'static Lang {
    let code = match lang_override.filter(|s| !s.trim().is_empty()) {
        Some(code) => code.to_string(),
        None => locale::detect_locale(),
    };

    match lookup(&code) {
        Some(lang) => lang,
        None => {
            debug!(%code, "no translation for language, using English");
            ENGLISH
        }
    }
}
