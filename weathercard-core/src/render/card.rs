//! The bordered weather card.

use super::art::{ART_WIDTH, art_for};
use super::conditions::{self, Condition};
use super::layout::{
    INDENT, bottom_border, divider, empty_line, forecast_row, merge_blocks, pad_line, top_border,
};
use super::style::Painter;
use super::RenderOptions;
use crate::i18n::{Label, Lang};
use crate::model::{CurrentWeather, WeatherData};
use crate::units::cardinal_index;

/// Interior width of the card, borders excluded.
pub const CARD_WIDTH: usize = 52;

/// Render the full card for `location` as newline-terminated lines.
pub fn render_card(location: &str, data: &WeatherData, options: &RenderOptions) -> String {
    let paint = Painter::new(options.color_enabled);
    let lang = options.lang;
    let current = conditions::lookup(data.current.weather_code);

    let mut out = String::new();
    out.push_str(&top_border(CARD_WIDTH));

    let header = format!("{INDENT}{}  {}", paint.bold(location), current.icon);
    out.push_str(&pad_line(&header, CARD_WIDTH));
    out.push_str(&empty_line(CARD_WIDTH));

    let info = info_block(&data.current, &current, options, &paint);
    for line in merge_blocks(art_for(current.category), &info, ART_WIDTH) {
        out.push_str(&pad_line(&line, CARD_WIDTH));
    }

    out.push_str(&empty_line(CARD_WIDTH));
    out.push_str(&divider(CARD_WIDTH));

    let header_row = forecast_row(
        &paint.dim(lang.label(Label::Day)),
        &paint.dim(lang.label(Label::Hi)),
        &paint.dim(lang.label(Label::Lo)),
        &paint.dim(lang.label(Label::Cond)),
        "",
    );
    out.push_str(&pad_line(&header_row, CARD_WIDTH));

    for day in data.daily.iter().take(options.days) {
        let cond = conditions::lookup(day.weather_code);
        let row = forecast_row(
            &lang.format_day(&day.date),
            &options.units.format_temp(day.temperature_max),
            &options.units.format_temp(day.temperature_min),
            cond.icon,
            describe(lang, &cond),
        );
        out.push_str(&pad_line(&row, CARD_WIDTH));
    }

    out.push_str(&bottom_border(CARD_WIDTH));
    out
}

/// Condition, temperatures, humidity and wind, one per line.
fn info_block(
    current: &CurrentWeather,
    cond: &Condition,
    options: &RenderOptions,
    paint: &Painter,
) -> Vec<String> {
    let lang = options.lang;
    let units = options.units;

    vec![
        format!("{} {}", cond.icon, paint.bold(describe(lang, cond))),
        format!(
            "{} ({} {})",
            paint.yellow(&units.format_temp(current.temperature)),
            lang.label(Label::Feels),
            units.format_temp(current.apparent_temperature),
        ),
        format!(
            "{} {}",
            lang.label(Label::Humidity),
            paint.cyan(&format!("{}%", current.humidity)),
        ),
        format!(
            "{} {} {}",
            lang.label(Label::Wind),
            paint.green(&units.format_wind(current.wind_speed)),
            lang.cardinal(cardinal_index(current.wind_direction)),
        ),
    ]
}

fn describe(lang: &Lang, cond: &Condition) -> &'static str {
    lang.condition(cond.code).unwrap_or(cond.description)
}
