use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::location::LocationError;
use crate::model::Place;

use super::{Geocoder, truncate_body};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const TIMEOUT: Duration = Duration::from_secs(5);

/// City search via the Open-Meteo geocoding API.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    base_url: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GEOCODING_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("Failed to build HTTP client for Open-Meteo geocoding")?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    // absent entirely when nothing matches
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn geocode(&self, name: &str) -> Result<Place> {
        debug!(city = name, "geocoding city");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (geocoding)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read geocoding response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: GeoResponse =
            serde_json::from_str(&body).context("Failed to parse geocoding JSON")?;

        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::CityNotFound(name.to_string()))?;

        debug!(
            city = %first.name,
            country = %first.country,
            latitude = first.latitude,
            longitude = first.longitude,
            "geocoded city"
        );

        Ok(Place {
            name: first.name,
            country: first.country,
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }
}
