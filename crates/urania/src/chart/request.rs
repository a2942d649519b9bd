use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aspects::OrbStrictness;
use crate::ephemeris::{GeoLocation, ObserverMode};
use crate::error::ChartError;
use crate::geocoding::GeocodeResult;

lazy_static::lazy_static! {
    static ref DATE_SHAPE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref TIME_SHAPE: Regex = Regex::new(r"^\d{2}:\d{2}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    #[default]
    Tropical,
    Sidereal,
}

impl ZodiacMode {
    pub fn parse(value: &str) -> Option<ZodiacMode> {
        match value.trim().to_lowercase().as_str() {
            "tropical" | "western" => Some(ZodiacMode::Tropical),
            "sidereal" | "vedic" => Some(ZodiacMode::Sidereal),
            _ => None,
        }
    }

    pub fn is_sidereal(self) -> bool {
        self == ZodiacMode::Sidereal
    }
}

impl fmt::Display for ZodiacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZodiacMode::Tropical => f.write_str("tropical"),
            ZodiacMode::Sidereal => f.write_str("sidereal"),
        }
    }
}

/// Where the chart is cast, already resolved to coordinates and a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "displayAddress", skip_serializing_if = "Option::is_none")]
    pub display_address: Option<String>,
}

impl ResolvedLocation {
    pub fn new(latitude: f64, longitude: f64, time_zone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            time_zone: time_zone.into(),
            display_address: None,
        }
    }

    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

impl From<GeocodeResult> for ResolvedLocation {
    fn from(result: GeocodeResult) -> Self {
        Self {
            latitude: result.latitude,
            longitude: result.longitude,
            time_zone: result.time_zone,
            display_address: Some(result.display_address),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub observer: ObserverMode,
    pub include_nodes: bool,
    pub include_minor_aspects: bool,
    pub include_fixed_stars: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            observer: ObserverMode::Geocentric,
            include_nodes: true,
            include_minor_aspects: false,
            include_fixed_stars: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Local date, `YYYY-MM-DD`
    pub date: String,
    /// Local wall-clock time, `HH:MM`
    pub time: String,
    pub location: ResolvedLocation,
    /// House system code such as `placidus` or `W`
    #[serde(rename = "houseSystem")]
    pub house_system: String,
    pub zodiac: ZodiacMode,
    pub strictness: OrbStrictness,
    #[serde(default)]
    pub options: ChartOptions,
}

/// Birth moment after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInstant {
    pub local: NaiveDateTime,
    pub utc: DateTime<Utc>,
}

impl ChartRequest {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        location: ResolvedLocation,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location,
            house_system: "placidus".to_string(),
            zodiac: ZodiacMode::Tropical,
            strictness: OrbStrictness::Standard,
            options: ChartOptions::default(),
        }
    }

    pub fn with_house_system(mut self, code: impl Into<String>) -> Self {
        self.house_system = code.into();
        self
    }

    pub fn with_zodiac(mut self, zodiac: ZodiacMode) -> Self {
        self.zodiac = zodiac;
        self
    }

    pub fn with_strictness(mut self, strictness: OrbStrictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate date, time and location and convert the local time to UTC.
    ///
    /// A wall-clock time skipped by a DST change is rejected; a repeated
    /// one resolves to its earlier occurrence.
    pub fn resolve_instant(&self) -> Result<ResolvedInstant, ChartError> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;

        let location = self.location.geo();
        if !location.is_valid() {
            return Err(ChartError::InvalidLocation {
                lat: self.location.latitude,
                lon: self.location.longitude,
            });
        }

        let tz: Tz = self
            .location
            .time_zone
            .parse()
            .map_err(|_| ChartError::UnknownTimeZone(self.location.time_zone.clone()))?;

        let local = date.and_time(time);
        let zoned = match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                return Err(ChartError::NonexistentLocalTime {
                    local: local.to_string(),
                    zone: self.location.time_zone.clone(),
                })
            }
        };

        Ok(ResolvedInstant {
            local,
            utc: zoned.with_timezone(&Utc),
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ChartError> {
    if !DATE_SHAPE.is_match(value) {
        return Err(ChartError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ChartError::InvalidDate(value.to_string()))
}

fn parse_time(value: &str) -> Result<NaiveTime, ChartError> {
    if !TIME_SHAPE.is_match(value) {
        return Err(ChartError::InvalidTime(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ChartError::InvalidTime(value.to_string()))
}
