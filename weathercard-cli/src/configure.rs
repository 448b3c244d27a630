//! `weathercard configure`: edit the saved defaults with prompts.

use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt;

use weathercard_core::{
    Config, Units,
    config::{MAX_DAYS, MIN_DAYS},
    i18n::{self, Lang},
    render::DEFAULT_DAYS,
};

/// Language choice offered in the prompt.
#[derive(Debug, Clone, Copy)]
enum LangChoice {
    Auto,
    Fixed(&'static Lang),
}

impl LangChoice {
    fn all() -> Vec<LangChoice> {
        std::iter::once(LangChoice::Auto)
            .chain(i18n::languages().iter().map(|&lang| LangChoice::Fixed(lang)))
            .collect()
    }

    fn code(&self) -> Option<String> {
        match self {
            LangChoice::Auto => None,
            LangChoice::Fixed(lang) => Some(lang.code.to_string()),
        }
    }
}

impl PartialEq for LangChoice {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl fmt::Display for LangChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangChoice::Auto => f.write_str("auto (system locale)"),
            LangChoice::Fixed(lang) => write!(f, "{} ({})", lang.code, lang.name),
        }
    }
}

/// Answers collected from the prompts.
#[derive(Debug)]
struct Answers {
    city: String,
    units: Units,
    lang: LangChoice,
    days: u8,
    color: bool,
}

impl From<Answers> for Config {
    fn from(a: Answers) -> Self {
        let city = a.city.trim();
        Config {
            city: (!city.is_empty()).then(|| city.to_string()),
            units: Some(a.units),
            lang: a.lang.code(),
            days: Some(a.days),
            color: Some(a.color),
        }
    }
}

pub fn run() -> Result<()> {
    let path = Config::config_file_path()?;
    let current = Config::load()?;

    let updated: Config = prompt(&current)?.into();
    updated.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn prompt(current: &Config) -> Result<Answers> {
    let city = Text::new("Default city:")
        .with_initial_value(current.city.as_deref().unwrap_or(""))
        .with_help_message("Leave empty to locate by IP address")
        .prompt()?;

    let units_options = vec![Units::Metric, Units::Imperial];
    let units_cursor = units_options
        .iter()
        .position(|u| Some(*u) == current.units)
        .unwrap_or(0);
    let units = Select::new("Units:", units_options)
        .with_starting_cursor(units_cursor)
        .prompt()?;

    let lang_options = LangChoice::all();
    let lang_cursor = current
        .lang
        .as_deref()
        .and_then(i18n::lookup)
        .and_then(|lang| {
            lang_options
                .iter()
                .position(|c| *c == LangChoice::Fixed(lang))
        })
        .unwrap_or(0);
    let lang = Select::new("Language:", lang_options)
        .with_starting_cursor(lang_cursor)
        .prompt()?;

    let days = CustomType::<u8>::new("Forecast days:")
        .with_default(current.days.unwrap_or(DEFAULT_DAYS as u8))
        .with_help_message("Between 1 and 7")
        .with_error_message("Please type a whole number")
        .with_validator(|days: &u8| {
            if (MIN_DAYS..=MAX_DAYS).contains(days) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("Must be between {MIN_DAYS} and {MAX_DAYS}").into(),
                ))
            }
        })
        .prompt()?;

    let color = Confirm::new("Use colors?")
        .with_default(current.color.unwrap_or(true))
        .prompt()?;

    Ok(Answers {
        city,
        units,
        lang,
        days,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_start_with_auto_then_every_language() {
        let choices = LangChoice::all();
        assert_eq!(choices[0], LangChoice::Auto);
        assert_eq!(choices.len(), i18n::languages().len() + 1);
        assert_eq!(choices[0].to_string(), "auto (system locale)");
        assert_eq!(choices[1].to_string(), "en (English)");
    }

    #[test]
    fn answers_become_config() {
        let de = i18n::lookup("de").expect("german");
        let cfg: Config = Answers {
            city: "  Hamburg ".into(),
            units: Units::Metric,
            lang: LangChoice::Fixed(de),
            days: 6,
            color: false,
        }
        .into();

        assert_eq!(cfg.city.as_deref(), Some("Hamburg"));
        assert_eq!(cfg.lang.as_deref(), Some("de"));
        assert_eq!(cfg.days, Some(6));
        assert_eq!(cfg.color, Some(false));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_city_and_auto_language_are_unset() {
        let cfg: Config = Answers {
            city: "   ".into(),
            units: Units::Imperial,
            lang: LangChoice::Auto,
            days: 5,
            color: true,
        }
        .into();

        assert_eq!(cfg.city, None);
        assert_eq!(cfg.lang, None);
        assert_eq!(cfg.units, Some(Units::Imperial));
    }
}
