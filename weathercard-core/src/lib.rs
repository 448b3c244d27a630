//! Core library for the `weathercard` CLI.
//!
//! This crate defines:
//! - The terminal card renderer (width-aware layout of styled text)
//! - Weather, geocoding and IP-location clients
//! - Persisted configuration
//! - Translations and unit handling
//!
//! It is used by `weathercard-cli`, but can also be reused by other binaries.

pub mod config;
pub mod i18n;
pub mod location;
pub mod model;
pub mod provider;
pub mod render;
pub mod units;

pub use config::Config;
pub use location::{IpApiLocator, IpLocator, LocationError, LocationQuery, resolve_location};
pub use model::{CurrentWeather, DailyForecast, ForecastRequest, Location, WeatherData};
pub use provider::{Geocoder, OpenMeteoGeocoder, OpenMeteoProvider, WeatherProvider};
pub use render::{RenderOptions, render_card};
pub use units::Units;
