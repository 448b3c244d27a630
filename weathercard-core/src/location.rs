//! Working out where to show the weather for.
//!
//! Explicit coordinates win, then a city name, then the public IP address.

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

use crate::model::Location;
use crate::provider::Geocoder;

pub mod ipapi;

pub use ipapi::IpApiLocator;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("city not found: {0}")]
    CityNotFound(String),

    #[error("IP geolocation failed: {0}")]
    IpLookupFailed(String),

    #[error("both latitude and longitude must be provided together")]
    MissingCoordinate,
}

/// Finds the machine's approximate position without user input.
#[async_trait]
pub trait IpLocator: Send + Sync + Debug {
    async fn locate(&self) -> anyhow::Result<Location>;
}

/// What the user asked for, before any lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationQuery {
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationQuery {
    pub fn validate(&self) -> Result<(), LocationError> {
        match (self.latitude, self.longitude) {
            (Some(_), None) | (None, Some(_)) => Err(LocationError::MissingCoordinate),
            _ => Ok(()),
        }
    }

    fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Resolve `query` to a position, consulting the collaborators as needed.
pub async fn resolve_location(
    query: &LocationQuery,
    geocoder: &dyn Geocoder,
    ip_locator: &dyn IpLocator,
) -> anyhow::Result<Location> {
    query.validate()?;

    if let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) {
        debug!(latitude, longitude, "using coordinates as given");
        return Ok(Location::from_coordinates(latitude, longitude));
    }

    if let Some(city) = query.city() {
        let place = geocoder.geocode(city).await?;
        return Ok(place.into());
    }

    debug!("no location given, falling back to IP geolocation");
    ip_locator.locate().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocationSource, Place};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct FakeGeocoder {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn geocode(&self, name: &str) -> anyhow::Result<Place> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if name == "Berlin" {
                Ok(Place {
                    name: "Berlin".into(),
                    country: "Germany".into(),
                    latitude: 52.52,
                    longitude: 13.41,
                })
            } else {
                Err(LocationError::CityNotFound(name.to_string()).into())
            }
        }
    }

    #[derive(Debug, Default)]
    struct FakeIpLocator {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl IpLocator for FakeIpLocator {
        async fn locate(&self) -> anyhow::Result<Location> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LocationError::IpLookupFailed("offline".into()).into());
            }
            Ok(Location {
                latitude: 48.85,
                longitude: 2.35,
                city: "Paris".into(),
                country: "France".into(),
                source: LocationSource::Ip,
            })
        }
    }

    #[tokio::test]
    async fn coordinates_take_priority() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator::default();
        let query = LocationQuery {
            city: Some("Berlin".into()),
            latitude: Some(40.71),
            longitude: Some(-74.01),
        };

        let loc = resolve_location(&query, &geocoder, &ip).await.expect("location");
        assert_eq!(loc.source, LocationSource::Manual);
        assert_eq!(loc.latitude, 40.71);
        assert_eq!(loc.display_name(), "40.71, -74.01");
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
        assert_eq!(ip.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn city_is_geocoded() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator::default();
        let query = LocationQuery {
            city: Some("Berlin".into()),
            ..Default::default()
        };

        let loc = resolve_location(&query, &geocoder, &ip).await.expect("location");
        assert_eq!(loc.display_name(), "Berlin, Germany");
        assert_eq!(loc.source, LocationSource::Manual);
        assert_eq!(ip.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_city_does_not_fall_back_to_ip() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator::default();
        let query = LocationQuery {
            city: Some("Atlantis".into()),
            ..Default::default()
        };

        let err = resolve_location(&query, &geocoder, &ip).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LocationError>(),
            Some(LocationError::CityNotFound(_))
        ));
        assert_eq!(ip.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nothing_given_uses_ip() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator::default();
        let query = LocationQuery {
            city: Some("   ".into()),
            ..Default::default()
        };

        let loc = resolve_location(&query, &geocoder, &ip).await.expect("location");
        assert_eq!(loc.source, LocationSource::Ip);
        assert_eq!(loc.city, "Paris");
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ip_failure_is_reported() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator {
            fail: true,
            ..Default::default()
        };

        let err = resolve_location(&LocationQuery::default(), &geocoder, &ip)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("IP geolocation failed"));
    }

    #[tokio::test]
    async fn lone_coordinate_is_rejected() {
        let geocoder = FakeGeocoder::default();
        let ip = FakeIpLocator::default();
        let query = LocationQuery {
            latitude: Some(52.5),
            ..Default::default()
        };

        let err = resolve_location(&query, &geocoder, &ip).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LocationError>(),
            Some(LocationError::MissingCoordinate)
        ));
        assert_eq!(ip.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn validate_accepts_pairs_and_absence() {
        assert!(LocationQuery::default().validate().is_ok());
        let both = LocationQuery {
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(both.validate().is_ok());
        let lon_only = LocationQuery {
            longitude: Some(13.4),
            ..Default::default()
        };
        assert!(lon_only.validate().is_err());
    }
}
