use crate::model::{ForecastRequest, Place, WeatherData};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod geocoding;
pub mod openmeteo;

pub use geocoding::OpenMeteoGeocoder;
pub use openmeteo::OpenMeteoProvider;

/// Source of current conditions and a daily forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, request: &ForecastRequest) -> anyhow::Result<WeatherData>;
}

/// Turns a city name into coordinates.
///
/// An unknown name is reported as [`LocationError::CityNotFound`] inside the
/// returned error so callers can tell it apart from transport failures.
///
/// [`LocationError::CityNotFound`]: crate::location::LocationError::CityNotFound
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn geocode(&self, name: &str) -> anyhow::Result<Place>;
}

/// Shorten an error body for inclusion in a message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("bad request"), "bad request");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundaries() {
        let body = "é".repeat(300);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
