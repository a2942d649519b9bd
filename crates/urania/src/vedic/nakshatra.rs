//! Nakshatra utilities for sidereal charts.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::{Deserialize, Serialize};

use crate::ephemeris::Body;
use crate::position::angle::normalize_degrees;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (display name, lord); lords repeat every nine mansions
const NAKSHATRA_ORDER: &[(&str, Body)] = &[
    ("Ashwini", Body::SouthNode),
    ("Bharani", Body::Venus),
    ("Krittika", Body::Sun),
    ("Rohini", Body::Moon),
    ("Mrigashira", Body::Mars),
    ("Ardra", Body::NorthNode),
    ("Punarvasu", Body::Jupiter),
    ("Pushya", Body::Saturn),
    ("Ashlesha", Body::Mercury),
    ("Magha", Body::SouthNode),
    ("Purva Phalguni", Body::Venus),
    ("Uttara Phalguni", Body::Sun),
    ("Hasta", Body::Moon),
    ("Chitra", Body::Mars),
    ("Swati", Body::NorthNode),
    ("Vishakha", Body::Jupiter),
    ("Anuradha", Body::Saturn),
    ("Jyeshtha", Body::Mercury),
    ("Mula", Body::SouthNode),
    ("Purva Ashadha", Body::Venus),
    ("Uttara Ashadha", Body::Sun),
    ("Shravana", Body::Moon),
    ("Dhanishta", Body::Mars),
    ("Shatabhisha", Body::NorthNode),
    ("Purva Bhadrapada", Body::Jupiter),
    ("Uttara Bhadrapada", Body::Saturn),
    ("Revati", Body::Mercury),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nakshatra {
    pub index: usize,
    pub name: String,
    pub lord: Body,
    pub start: f64,
    pub end: f64,
}

/// Where a longitude falls inside its nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    #[serde(flatten)]
    pub nakshatra: Nakshatra,
    /// Degrees past the start of the nakshatra
    pub offset: f64,
    /// Fraction of the nakshatra already traversed, in [0, 1)
    pub progress: f64,
    /// 1-4
    pub pada: u8,
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<Nakshatra> = NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(index, (name, lord))| Nakshatra {
            index,
            name: name.to_string(),
            lord: *lord,
            start: index as f64 * NAKSHATRA_SEGMENT_SIZE,
            end: (index + 1) as f64 * NAKSHATRA_SEGMENT_SIZE,
        })
        .collect();
}

pub fn nakshatra_table() -> &'static [Nakshatra] {
    &NAKSHATRA_TABLE
}

/// Nakshatra, pada and progress for a sidereal longitude.
pub fn nakshatra_for_longitude(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let index = ((lon / NAKSHATRA_SEGMENT_SIZE) as usize).min(NAKSHATRA_TABLE.len() - 1);
    let entry = &NAKSHATRA_TABLE[index];

    let offset = (lon - entry.start).max(0.0);
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;

    NakshatraPlacement {
        nakshatra: entry.clone(),
        offset,
        progress: (offset / NAKSHATRA_SEGMENT_SIZE).min(1.0 - f64::EPSILON),
        pada,
    }
}

/// Label such as `"Rohini 2"` used on chart points.
pub fn nakshatra_label(longitude: f64) -> String {
    let placement = nakshatra_for_longitude(longitude);
    format!("{} {}", placement.nakshatra.name, placement.pada)
}
