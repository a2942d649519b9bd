use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::ephemeris::parallax::apply_topocentric;
use crate::ephemeris::time::{julian_day, local_sidereal_time, mean_obliquity};
use crate::ephemeris::types::{Body, Observer, ObserverMode, RawPosition};
use crate::position::angle::{
    ecliptic_to_declination, ecliptic_to_right_ascension, normalize_degrees,
};

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at {instant}: {message}")]
    CalculationFailed {
        body: Body,
        instant: DateTime<Utc>,
        message: String,
    },
    #[error("Body {0} is not available from this ephemeris")]
    UnsupportedBody(Body),
}

/// Source of raw body positions.
///
/// Implementations apply diurnal parallax themselves when the observer asks
/// for topocentric positions.
pub trait EphemerisProvider: Send + Sync {
    fn position(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        observer: &Observer,
    ) -> Result<RawPosition, EphemerisError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StaticBody {
    longitude: f64,
    latitude: f64,
    speed: f64,
    distance_au: f64,
}

/// Deterministic provider moving each body linearly from an epoch.
///
/// Used by tests, benches and the CLI's `--offline` mode.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    epoch: DateTime<Utc>,
    bodies: BTreeMap<Body, StaticBody>,
}

impl StaticEphemeris {
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            bodies: BTreeMap::new(),
        }
    }

    /// Add a body at `longitude` on the epoch, moving `speed` degrees per day.
    pub fn with_body(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        let distance_au = if body == Body::Moon { 0.00257 } else { 1.0 };
        self.bodies.insert(
            body,
            StaticBody {
                longitude,
                latitude: 0.0,
                speed,
                distance_au,
            },
        );
        self
    }

    /// Set the ecliptic latitude of an already added body.
    pub fn with_latitude(mut self, body: Body, latitude: f64) -> Self {
        if let Some(entry) = self.bodies.get_mut(&body) {
            entry.latitude = latitude;
        }
        self
    }

    /// Rough mean positions at J2000 with mean daily motions.
    pub fn mean_j2000() -> Self {
        use chrono::TimeZone;
        let epoch = Utc
            .with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(epoch)
            .with_body(Body::Sun, 280.46, 0.985647)
            .with_body(Body::Moon, 218.32, 13.176396)
            .with_body(Body::Mercury, 252.25, 1.383)
            .with_body(Body::Venus, 181.98, 1.2)
            .with_body(Body::Mars, 355.43, 0.524)
            .with_body(Body::Jupiter, 34.35, 0.083)
            .with_body(Body::Saturn, 50.08, 0.033)
            .with_body(Body::Uranus, 314.06, 0.0117)
            .with_body(Body::Neptune, 304.35, 0.006)
            .with_body(Body::Pluto, 251.46, 0.004)
            .with_body(Body::Chiron, 251.0, 0.02)
    }

    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.bodies.keys().copied()
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn position(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        observer: &Observer,
    ) -> Result<RawPosition, EphemerisError> {
        let entry = self
            .bodies
            .get(&body)
            .ok_or(EphemerisError::UnsupportedBody(body))?;

        let elapsed_days =
            (instant - self.epoch).num_milliseconds() as f64 / 86_400_000.0;
        let longitude = normalize_degrees(entry.longitude + entry.speed * elapsed_days);
        let jd = julian_day(instant);
        let obliquity = mean_obliquity(jd);

        let geocentric = RawPosition {
            ecliptic_longitude: longitude,
            right_ascension: ecliptic_to_right_ascension(longitude, entry.latitude, obliquity),
            declination: ecliptic_to_declination(longitude, entry.latitude, obliquity),
        };

        match observer.mode {
            ObserverMode::Geocentric => Ok(geocentric),
            ObserverMode::Topocentric => Ok(apply_topocentric(
                geocentric,
                entry.distance_au,
                observer.location,
                local_sidereal_time(jd, observer.location.lon),
                obliquity,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::types::GeoLocation;
    use chrono::{Duration, TimeZone};

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_static_linear_motion() {
        let eph = StaticEphemeris::new(epoch()).with_body(Body::Moon, 350.0, 13.0);
        let observer = Observer::geocentric(GeoLocation::new(0.0, 0.0));
        let pos = eph
            .position(Body::Moon, epoch() + Duration::days(1), &observer)
            .unwrap();
        assert!((pos.ecliptic_longitude - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_static_unknown_body() {
        let eph = StaticEphemeris::new(epoch());
        let observer = Observer::geocentric(GeoLocation::new(0.0, 0.0));
        let err = eph.position(Body::Pluto, epoch(), &observer).unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedBody(Body::Pluto)));
    }

    #[test]
    fn test_topocentric_differs_for_moon() {
        let eph = StaticEphemeris::new(epoch()).with_body(Body::Moon, 120.0, 13.0);
        let location = GeoLocation::new(40.0, -74.0);
        let geo = eph
            .position(Body::Moon, epoch(), &Observer::geocentric(location))
            .unwrap();
        let topo = eph
            .position(Body::Moon, epoch(), &Observer::topocentric(location))
            .unwrap();
        assert!((geo.ecliptic_longitude - topo.ecliptic_longitude).abs() > 1e-4);
    }
}
