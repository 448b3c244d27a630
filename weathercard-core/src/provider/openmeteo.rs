use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::model::{CurrentWeather, DailyForecast, ForecastRequest, WeatherData};

use super::{WeatherProvider, truncate_body};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m,wind_direction_10m,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code";
const TIMEOUT: Duration = Duration::from_secs(10);

/// Current conditions and daily forecast from Open-Meteo (no API key).
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FORECAST_URL)
    }

    /// Point the provider at another endpoint, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    #[serde(default)]
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: i32,
    apparent_temperature: f64,
    wind_speed_10m: f64,
    wind_direction_10m: i32,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<i32>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    #[serde(default)]
    timezone: String,
    current: OmCurrent,
    daily: OmDaily,
}

impl From<OmResponse> for WeatherData {
    fn from(parsed: OmResponse) -> Self {
        let OmDaily {
            time,
            temperature_2m_max,
            temperature_2m_min,
            weather_code,
        } = parsed.daily;

        let days = time.len();
        if temperature_2m_max.len() != days
            || temperature_2m_min.len() != days
            || weather_code.len() != days
        {
            warn!(
                dates = days,
                max = temperature_2m_max.len(),
                min = temperature_2m_min.len(),
                codes = weather_code.len(),
                "Open-Meteo daily arrays differ in length; keeping complete days only"
            );
        }

        let daily = time
            .into_iter()
            .zip(temperature_2m_max)
            .zip(temperature_2m_min)
            .zip(weather_code)
            .map(|(((date, max), min), code)| DailyForecast {
                date,
                temperature_max: max,
                temperature_min: min,
                weather_code: code,
            })
            .collect();

        let c = parsed.current;
        WeatherData {
            current: CurrentWeather {
                temperature: c.temperature_2m,
                apparent_temperature: c.apparent_temperature,
                humidity: c.relative_humidity_2m,
                wind_speed: c.wind_speed_10m,
                wind_direction: c.wind_direction_10m,
                weather_code: c.weather_code,
                time: c.time,
            },
            daily,
            timezone: parsed.timezone,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_weather(&self, request: &ForecastRequest) -> Result<WeatherData> {
        let latitude = format!("{:.4}", request.latitude);
        let longitude = format!("{:.4}", request.longitude);
        let days = request.days.to_string();

        debug!(%latitude, %longitude, days = request.days, units = %request.units, "requesting Open-Meteo forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
                ("forecast_days", days.as_str()),
                ("temperature_unit", request.units.api_temperature_unit()),
                ("wind_speed_unit", request.units.api_wind_speed_unit()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.419998,
        "timezone": "Europe/Berlin",
        "current": {
            "time": "2026-02-14T12:00",
            "interval": 900,
            "temperature_2m": 5.2,
            "relative_humidity_2m": 73,
            "apparent_temperature": 1.8,
            "wind_speed_10m": 14.3,
            "wind_direction_10m": 250,
            "weather_code": 3
        },
        "daily": {
            "time": ["2026-02-14", "2026-02-15", "2026-02-16", "2026-02-17", "2026-02-18"],
            "temperature_2m_max": [6.2, 7.1, 4.0, 3.3, 5.9],
            "temperature_2m_min": [1.1, 2.4, -0.5, -1.8, 0.2],
            "weather_code": [3, 61, 71, 0, 45]
        }
    }"#;

    fn request(units: Units) -> ForecastRequest {
        ForecastRequest {
            latitude: 52.52,
            longitude: 13.41,
            days: 5,
            units,
        }
    }

    #[tokio::test]
    async fn parses_current_and_daily() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri()).expect("client");
        let data = provider.fetch_weather(&request(Units::Metric)).await.expect("weather");

        assert_eq!(data.current.temperature, 5.2);
        assert_eq!(data.current.humidity, 73);
        assert_eq!(data.current.weather_code, 3);
        assert_eq!(data.current.wind_direction, 250);
        assert_eq!(data.timezone, "Europe/Berlin");
        assert_eq!(data.daily.len(), 5);
        assert_eq!(data.daily[0].temperature_max, 6.2);
        assert_eq!(data.daily[2].weather_code, 71);
    }

    #[tokio::test]
    async fn imperial_request_asks_for_fahrenheit_and_mph() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("wind_speed_unit", "mph"))
            .and(query_param("forecast_days", "5"))
            .and(query_param("latitude", "52.5200"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri()).expect("client");
        provider.fetch_weather(&request(Units::Imperial)).await.expect("weather");
    }

    #[tokio::test]
    async fn http_error_is_reported_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":true,"reason":"bad latitude"}"#))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri()).expect("client");
        let err = provider.fetch_weather(&request(Units::Metric)).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("400"), "{msg}");
        assert!(msg.contains("bad latitude"), "{msg}");
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri()).expect("client");
        let err = provider.fetch_weather(&request(Units::Metric)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse Open-Meteo forecast JSON"));
    }

    #[test]
    fn ragged_daily_arrays_keep_complete_days() {
        let mut parsed: OmResponse = serde_json::from_str(FIXTURE).expect("fixture parses");
        parsed.daily.weather_code.truncate(3);
        let data = WeatherData::from(parsed);
        assert_eq!(data.daily.len(), 3);
    }
}
