use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::model::{Location, LocationSource};

use super::{IpLocator, LocationError};

pub const IP_API_URL: &str = "http://ip-api.com/json/";

const TIMEOUT: Duration = Duration::from_secs(5);

/// IP geolocation through ip-api.com.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    url: String,
    http: Client,
}

impl IpApiLocator {
    pub fn new() -> Result<Self> {
        Self::with_url(IP_API_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("Failed to build HTTP client for IP geolocation")?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    city: String,
    #[serde(default)]
    region_name: String,
    #[serde(default)]
    country: String,
}

impl IpApiResponse {
    fn into_location(self) -> Result<Location, LocationError> {
        if self.status != "success" {
            let reason = self.message.unwrap_or_else(|| format!("status {}", self.status));
            return Err(LocationError::IpLookupFailed(reason));
        }

        let city = if self.city.is_empty() {
            self.region_name
        } else {
            self.city
        };

        Ok(Location {
            latitude: self.lat,
            longitude: self.lon,
            city,
            country: self.country,
            source: LocationSource::Ip,
        })
    }
}

#[async_trait]
impl IpLocator for IpApiLocator {
    async fn locate(&self) -> Result<Location> {
        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::IpLookupFailed(format!("server returned {status}")).into());
        }

        let parsed: IpApiResponse = res
            .json()
            .await
            .map_err(|e| LocationError::IpLookupFailed(format!("invalid response: {e}")))?;

        let location = parsed.into_location()?;
        debug!(
            city = %location.city,
            country = %location.country,
            "located by IP"
        );
        Ok(location)
    }
}
