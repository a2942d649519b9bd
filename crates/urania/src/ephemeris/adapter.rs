use chrono::{DateTime, Utc};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::calc_ut;

use crate::ephemeris::parallax::apply_topocentric;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::time::{julian_day, local_sidereal_time, mean_obliquity};
use crate::ephemeris::types::{Body, Observer, ObserverMode, RawPosition};
use crate::position::angle::normalize_degrees;

// Swiss Ephemeris body ids. Nodes are computed in closed form by the
// position engine, so only the sampled planets are mapped here.
const BODY_IDS: &[(Body, u32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
    (Body::Chiron, 15),
];

const FLG_SWIEPH: u32 = 2;
const FLG_EQUATORIAL: u32 = 2048;

pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris backed provider.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then the system default.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Install the Swiss Ephemeris data files or point SWISS_EPHEMERIS_PATH at them.".to_string(),
            });
        }

        log::debug!("using swiss ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn body_id(body: Body, instant: DateTime<Utc>) -> Result<u32, EphemerisError> {
        BODY_IDS
            .iter()
            .find(|(candidate, _)| *candidate == body)
            .map(|(_, id)| *id)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                instant,
                message: format!("No Swiss Ephemeris id for {}", body),
            })
    }

    fn calc(
        body: Body,
        instant: DateTime<Utc>,
        jd: f64,
        id: u32,
        flags: u32,
    ) -> Result<[f64; 3], EphemerisError> {
        let result = calc_ut(jd, id, flags).map_err(|e| EphemerisError::CalculationFailed {
            body,
            instant,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;
        let out = result.out.to_vec();
        if out.len() < 3 {
            return Err(EphemerisError::CalculationFailed {
                body,
                instant,
                message: format!("Swiss Ephemeris returned {} values", out.len()),
            });
        }
        Ok([out[0], out[1], out[2]])
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        observer: &Observer,
    ) -> Result<RawPosition, EphemerisError> {
        let id = Self::body_id(body, instant)?;
        let jd = julian_day(instant);

        // out = [lon, lat, distance, ...] / [ra, dec, distance, ...]
        let ecliptic = Self::calc(body, instant, jd, id, FLG_SWIEPH)?;
        let equatorial = Self::calc(body, instant, jd, id, FLG_SWIEPH | FLG_EQUATORIAL)?;

        let geocentric = RawPosition {
            ecliptic_longitude: normalize_degrees(ecliptic[0]),
            right_ascension: normalize_degrees(equatorial[0]),
            declination: equatorial[1],
        };

        match observer.mode {
            ObserverMode::Geocentric => Ok(geocentric),
            ObserverMode::Topocentric => Ok(apply_topocentric(
                geocentric,
                ecliptic[2],
                observer.location,
                local_sidereal_time(jd, observer.location.lon),
                mean_obliquity(jd),
            )),
        }
    }
}
