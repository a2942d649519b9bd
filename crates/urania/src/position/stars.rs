//! Fixed stars with a J2000 ecliptic position and uniform precession.

use serde::{Deserialize, Serialize};

use crate::ephemeris::time::J2000_JD;
use crate::position::angle::{ecliptic_to_declination, normalize_degrees};

/// Precession in longitude, arc seconds per year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStar {
    pub name: String,
    /// Tropical ecliptic longitude at J2000.0
    pub longitude_j2000: f64,
    /// Ecliptic latitude at J2000.0
    pub latitude_j2000: f64,
}

impl FixedStar {
    pub fn new(name: impl Into<String>, longitude_j2000: f64, latitude_j2000: f64) -> Self {
        Self {
            name: name.into(),
            longitude_j2000,
            latitude_j2000,
        }
    }

    /// Tropical longitude precessed to the given Julian day.
    pub fn longitude_at(&self, jd: f64) -> f64 {
        let years = (jd - J2000_JD) / 365.25;
        normalize_degrees(self.longitude_j2000 + years * PRECESSION_ARCSEC_PER_YEAR / 3600.0)
    }

    pub fn declination_at(&self, jd: f64, obliquity: f64) -> f64 {
        ecliptic_to_declination(self.longitude_at(jd), self.latitude_j2000, obliquity)
    }
}

/// The default catalogue of bright stars.
pub fn default_catalogue() -> Vec<FixedStar> {
    vec![
        FixedStar::new("Regulus", 149.8292, 0.4648),
        FixedStar::new("Spica", 203.8411, -2.0548),
        FixedStar::new("Aldebaran", 69.7881, -5.4677),
        FixedStar::new("Antares", 249.7588, -4.5686),
        FixedStar::new("Algol", 56.1672, 22.4267),
        FixedStar::new("Sirius", 104.0838, -39.6053),
        FixedStar::new("Fomalhaut", 333.8686, -21.1366),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precession_over_a_century() {
        let regulus = FixedStar::new("Regulus", 149.8292, 0.4648);
        let moved = regulus.longitude_at(J2000_JD + 36525.0) - regulus.longitude_j2000;
        assert!((moved - 50.29 * 100.0 / 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalogue_names() {
        let names: Vec<String> = default_catalogue().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Regulus", "Spica", "Aldebaran", "Antares", "Algol", "Sirius", "Fomalhaut"]
        );
    }

    #[test]
    fn test_sirius_is_southern() {
        let sirius = &default_catalogue()[5];
        assert!(sirius.declination_at(J2000_JD, 23.4393) < -15.0);
    }
}
