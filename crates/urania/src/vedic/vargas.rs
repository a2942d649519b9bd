//! Divisional charts. Only the navamsa (D9) is computed.

use serde::{Deserialize, Serialize};

use crate::houses::whole_sign_house;
use crate::position::angle::normalize_degrees;
use crate::position::{CelestialPoint, ZodiacPosition};

/// Arc minutes in one navamsa (3°20').
const NAVAMSA_MINUTES: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VargaPlacement {
    pub name: String,
    #[serde(flatten)]
    pub zodiac: ZodiacPosition,
    /// Whole-sign house counted from the divisional ascendant
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VargaChart {
    pub label: String,
    pub division: u8,
    pub ascendant: ZodiacPosition,
    pub placements: Vec<VargaPlacement>,
}

/// Navamsa longitude: sign from `floor(minutes / 200) mod 12`, degree from
/// the remainder rescaled to 0-30°.
pub fn navamsa_longitude(longitude: f64) -> f64 {
    let total_minutes = normalize_degrees(longitude) * 60.0;
    let pada = (total_minutes / NAVAMSA_MINUTES).floor();
    let sign = pada.rem_euclid(12.0);
    let remainder = total_minutes - pada * NAVAMSA_MINUTES;
    let degree = remainder / NAVAMSA_MINUTES * 30.0;
    normalize_degrees(sign * 30.0 + degree)
}

/// Build the D9 chart. Houses are recounted from the D9 ascendant.
pub fn navamsa_chart(points: &[CelestialPoint], ascendant: f64) -> VargaChart {
    let d9_ascendant = navamsa_longitude(ascendant);
    let placements = points
        .iter()
        .filter(|point| point.is_body())
        .map(|point| {
            let lon = navamsa_longitude(point.longitude());
            VargaPlacement {
                name: point.name().to_string(),
                zodiac: ZodiacPosition::from_longitude(lon),
                house: whole_sign_house(d9_ascendant, lon),
            }
        })
        .collect();

    VargaChart {
        label: "Navamsa".to_string(),
        division: 9,
        ascendant: ZodiacPosition::from_longitude(d9_ascendant),
        placements,
    }
}
