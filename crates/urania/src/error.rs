use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::geocoding::GeocodeError;

/// Terminal failures of a chart request.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid time '{0}': expected HH:MM (24h)")]
    InvalidTime(String),
    #[error("Invalid location: lat {lat}, lon {lon}")]
    InvalidLocation { lat: f64, lon: f64 },
    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error("Local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Rejected rule overrides.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Unknown ayanamsa preset '{0}'")]
    UnknownAyanamsa(String),
    #[error("Orb for {aspect} must be non-negative, got {value}")]
    NegativeOrb { aspect: String, value: f64 },
    #[error("Harmonic {0} must be at least 1")]
    InvalidHarmonic(u32),
}
