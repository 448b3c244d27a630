use serde::{Deserialize, Serialize};

use crate::units::Units;

/// Parameters of a forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub days: usize,
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub apparent_temperature: f64,
    /// Relative humidity in percent.
    pub humidity: i32,
    pub wind_speed: f64,
    /// Direction the wind blows from, in degrees.
    pub wind_direction: i32,
    pub weather_code: i32,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// `YYYY-MM-DD` in the location's timezone.
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub weather_code: i32,
}

/// Current conditions plus the daily forecast, in the requested units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub daily: Vec<DailyForecast>,
    pub timezone: String,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    /// Given on the command line or in the config file.
    Manual,
    /// Looked up from the public IP address.
    Ip,
}

/// A resolved position, with whatever naming the source provided.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub source: LocationSource,
}

impl Location {
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: String::new(),
            country: String::new(),
            source: LocationSource::Manual,
        }
    }

    /// Name shown in the card header.
    ///
    /// `"City, Country"`, or whichever half is known, falling back to the
    /// coordinates.
    pub fn display_name(&self) -> String {
        match (self.city.is_empty(), self.country.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.country),
            (false, true) => self.city.clone(),
            (true, false) => self.country.clone(),
            (true, true) => format!("{:.2}, {:.2}", self.latitude, self.longitude),
        }
    }
}

impl From<Place> for Location {
    fn from(place: Place) -> Self {
        Self {
            latitude: place.latitude,
            longitude: place.longitude,
            city: place.name,
            country: place.country,
            source: LocationSource::Manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(city: &str, country: &str) -> Location {
        Location {
            latitude: 52.5244,
            longitude: 13.4105,
            city: city.to_string(),
            country: country.to_string(),
            source: LocationSource::Ip,
        }
    }

    #[test]
    fn display_name_joins_city_and_country() {
        assert_eq!(location("Berlin", "Germany").display_name(), "Berlin, Germany");
    }

    #[test]
    fn display_name_uses_whichever_part_is_known() {
        assert_eq!(location("Berlin", "").display_name(), "Berlin");
        assert_eq!(location("", "Germany").display_name(), "Germany");
    }

    #[test]
    fn display_name_falls_back_to_coordinates() {
        assert_eq!(location("", "").display_name(), "52.52, 13.41");
        assert_eq!(Location::from_coordinates(-33.8688, 151.2093).display_name(), "-33.87, 151.21");
    }

    #[test]
    fn place_converts_to_manual_location() {
        let loc = Location::from(Place {
            name: "Paris".into(),
            country: "France".into(),
            latitude: 48.85,
            longitude: 2.35,
        });
        assert_eq!(loc.source, LocationSource::Manual);
        assert_eq!(loc.display_name(), "Paris, France");
    }
}
