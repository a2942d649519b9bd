//! Harmonic sub-charts and midpoints.

use serde::{Deserialize, Serialize};

use crate::position::angle::{normalize_degrees, shorter_arc_midpoint};
use crate::position::{CelestialPoint, ZodiacPosition};

/// Pairs whose midpoints are reported.
pub const MIDPOINT_PAIRS: [(&str, &str); 4] = [
    ("Sun", "Moon"),
    ("Sun", "Ascendant"),
    ("Moon", "Ascendant"),
    ("Venus", "Mars"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicPoint {
    pub name: String,
    #[serde(flatten)]
    pub zodiac: ZodiacPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicChart {
    pub harmonic: u32,
    pub points: Vec<HarmonicPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Midpoint {
    pub first: String,
    pub second: String,
    #[serde(flatten)]
    pub zodiac: ZodiacPosition,
}

pub fn harmonic_longitude(longitude: f64, harmonic: u32) -> f64 {
    normalize_degrees(longitude * harmonic as f64)
}

pub fn harmonic_chart(points: &[CelestialPoint], harmonic: u32) -> HarmonicChart {
    HarmonicChart {
        harmonic,
        points: points
            .iter()
            .map(|point| HarmonicPoint {
                name: point.name().to_string(),
                zodiac: ZodiacPosition::from_longitude(harmonic_longitude(point.longitude(), harmonic)),
            })
            .collect(),
    }
}

/// Midpoints of the fixed pairs; a pair with a missing point is skipped.
pub fn midpoints(points: &[CelestialPoint]) -> Vec<Midpoint> {
    let find = |name: &str| points.iter().find(|p| p.name() == name).map(|p| p.longitude());
    MIDPOINT_PAIRS
        .iter()
        .filter_map(|(a, b)| {
            let lon = shorter_arc_midpoint(find(a)?, find(b)?);
            Some(Midpoint {
                first: a.to_string(),
                second: b.to_string(),
                zodiac: ZodiacPosition::from_longitude(lon),
            })
        })
        .collect()
}
