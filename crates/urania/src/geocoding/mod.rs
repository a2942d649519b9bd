//! Location lookup boundary.
//!
//! The core never invents coordinates: a city that cannot be resolved is a
//! terminal error for the chart request.

pub mod fallback;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fallback::FallbackGeocoder;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("No location found for {0}")]
    NotFound(String),
    #[error("Geocoding service failed: {0}")]
    Service(String),
    #[error("Invalid coordinates for {query}: lat {lat}, lon {lon}")]
    InvalidCoordinates { query: String, lat: f64, lon: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeQuery {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
}

impl GeocodeQuery {
    pub fn new(city: impl Into<String>, state: Option<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state,
            country: country.into(),
        }
    }
}

impl std::fmt::Display for GeocodeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Some(state) => write!(f, "{}, {}, {}", self.city, state, self.country),
            None => write!(f, "{}, {}", self.city, self.country),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, e.g. `Europe/London`
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "displayAddress")]
    pub display_address: String,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, query: &GeocodeQuery) -> Result<GeocodeResult, GeocodeError>;
}

/// Tries the primary service and falls back to a second geocoder on any
/// failure.
pub struct ChainedGeocoder<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Geocoder, F: Geocoder> ChainedGeocoder<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: Geocoder, F: Geocoder> Geocoder for ChainedGeocoder<P, F> {
    async fn lookup(&self, query: &GeocodeQuery) -> Result<GeocodeResult, GeocodeError> {
        match self.primary.lookup(query).await {
            Ok(result) => Ok(result),
            Err(e) => {
                log::warn!("Primary geocoder failed for {}: {}; trying fallback", query, e);
                self.fallback.lookup(query).await
            }
        }
    }
}
