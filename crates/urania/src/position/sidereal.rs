//! Ayanamsa models for converting tropical longitudes to sidereal ones.

use serde::{Deserialize, Serialize};

use crate::ephemeris::time::julian_centuries;
use crate::position::angle::normalize_degrees;

/// Ayanamsa as a polynomial in Julian centuries since J2000.0:
/// `base + linear·T + quadratic·T²` degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AyanamsaModel {
    pub name: String,
    /// Value at J2000.0, in degrees
    pub base: f64,
    /// Degrees per century
    pub linear: f64,
    /// Degrees per century squared
    pub quadratic: f64,
}

// General precession in longitude (IAU 2006), converted from arc seconds.
const PRECESSION_LINEAR: f64 = 5028.796195 / 3600.0;
const PRECESSION_QUADRATIC: f64 = 1.1054348 / 3600.0;

impl AyanamsaModel {
    pub fn lahiri() -> Self {
        Self {
            name: "lahiri".to_string(),
            base: 23.853,
            linear: PRECESSION_LINEAR,
            quadratic: PRECESSION_QUADRATIC,
        }
    }

    pub fn fagan_bradley() -> Self {
        Self {
            name: "fagan_bradley".to_string(),
            base: 24.736,
            linear: PRECESSION_LINEAR,
            quadratic: PRECESSION_QUADRATIC,
        }
    }

    /// Look up a preset by name; accepts the usual aliases.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().replace(&['-', ' '][..], "_").as_str() {
            "lahiri" | "chitrapaksha" => Some(Self::lahiri()),
            "fagan_bradley" | "fagan" => Some(Self::fagan_bradley()),
            _ => None,
        }
    }

    /// Ayanamsa in degrees at the given Julian day.
    pub fn value_at(&self, jd: f64) -> f64 {
        let t = julian_centuries(jd);
        self.base + self.linear * t + self.quadratic * t * t
    }

    /// Sidereal longitude for a tropical one at the given Julian day.
    pub fn apply(&self, tropical: f64, jd: f64) -> f64 {
        to_sidereal(tropical, self.value_at(jd))
    }
}

impl Default for AyanamsaModel {
    fn default() -> Self {
        Self::lahiri()
    }
}

/// `(tropical − ayanamsa) mod 360`
pub fn to_sidereal(tropical: f64, ayanamsa: f64) -> f64 {
    normalize_degrees(tropical - ayanamsa)
}
