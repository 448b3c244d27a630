use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement system used for requests and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn temp_unit(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }

    /// Temperature rounded to a whole degree, with its unit: `18°C`.
    pub fn format_temp(&self, temp: f64) -> String {
        format!("{temp:.0}{}", self.temp_unit())
    }

    /// Wind speed rounded to a whole number, with its unit: `12 km/h`.
    pub fn format_wind(&self, speed: f64) -> String {
        format!("{speed:.0} {}", self.wind_unit())
    }

    /// `temperature_unit` query value understood by Open-Meteo.
    pub fn api_temperature_unit(&self) -> &'static str {
        match self {
            Units::Metric => "celsius",
            Units::Imperial => "fahrenheit",
        }
    }

    /// `wind_speed_unit` query value understood by Open-Meteo.
    pub fn api_wind_speed_unit(&self) -> &'static str {
        match self {
            Units::Metric => "kmh",
            Units::Imperial => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Metric => f.write_str("metric"),
            Units::Imperial => f.write_str("imperial"),
        }
    }
}

/// Index into the 16-point compass rose (`0` = N, `4` = E, ...).
///
/// Negative degrees produce a negative index, which translation tables
/// render as a placeholder.
pub fn cardinal_index(degrees: i32) -> i32 {
    (degrees.saturating_add(11) / 22) % 16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_suffixes() {
        assert_eq!(Units::Metric.temp_unit(), "°C");
        assert_eq!(Units::Imperial.temp_unit(), "°F");
        assert_eq!(Units::Metric.wind_unit(), "km/h");
        assert_eq!(Units::Imperial.wind_unit(), "mph");
    }

    #[test]
    fn format_temp_rounds_to_whole_degrees() {
        let cases = [
            (18.5, Units::Metric, "18°C"),
            (65.3, Units::Imperial, "65°F"),
            (0.0, Units::Metric, "0°C"),
            (-5.7, Units::Metric, "-6°C"),
        ];
        for (temp, units, want) in cases {
            assert_eq!(units.format_temp(temp), want, "{temp} {units}");
        }
    }

    #[test]
    fn format_wind_includes_unit() {
        assert_eq!(Units::Metric.format_wind(12.0), "12 km/h");
        assert_eq!(Units::Imperial.format_wind(7.6), "8 mph");
    }

    #[test]
    fn api_parameters() {
        assert_eq!(Units::Metric.api_temperature_unit(), "celsius");
        assert_eq!(Units::Imperial.api_temperature_unit(), "fahrenheit");
        assert_eq!(Units::Metric.api_wind_speed_unit(), "kmh");
        assert_eq!(Units::Imperial.api_wind_speed_unit(), "mph");
    }

    #[test]
    fn cardinal_points() {
        let cases = [
            (0, 0),
            (45, 2),
            (90, 4),
            (135, 6),
            (180, 8),
            (225, 10),
            (240, 11),
            (270, 12),
            (315, 14),
            (359, 0),
        ];
        for (degrees, want) in cases {
            assert_eq!(cardinal_index(degrees), want, "{degrees}°");
        }
    }

    #[test]
    fn negative_degrees_give_out_of_range_index() {
        assert!(cardinal_index(-90) < 0);
    }

    #[test]
    fn units_parse_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            units: Units,
        }
        let w: Wrapper = toml::from_str("units = \"imperial\"").expect("valid toml");
        assert_eq!(w.units, Units::Imperial);
    }
}
