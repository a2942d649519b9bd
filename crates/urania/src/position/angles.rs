//! Chart angles from local sidereal time, latitude and obliquity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::angle::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartAngle {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
    Vertex,
    EastPoint,
}

impl ChartAngle {
    pub const ALL: [ChartAngle; 6] = [
        ChartAngle::Ascendant,
        ChartAngle::Midheaven,
        ChartAngle::Descendant,
        ChartAngle::ImumCoeli,
        ChartAngle::Vertex,
        ChartAngle::EastPoint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartAngle::Ascendant => "Ascendant",
            ChartAngle::Midheaven => "Midheaven",
            ChartAngle::Descendant => "Descendant",
            ChartAngle::ImumCoeli => "Imum Coeli",
            ChartAngle::Vertex => "Vertex",
            ChartAngle::EastPoint => "East Point",
        }
    }
}

impl fmt::Display for ChartAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longitudes of the six chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
    pub vertex: f64,
    pub east_point: f64,
}

impl AngleSet {
    /// Compute all angles. Inputs in degrees; latitude north positive.
    pub fn compute(lst: f64, latitude: f64, obliquity: f64) -> Self {
        let ascendant = ascendant(lst, latitude, obliquity);
        let midheaven = midheaven(lst, obliquity);
        Self {
            ascendant,
            midheaven,
            descendant: normalize_degrees(ascendant + 180.0),
            imum_coeli: normalize_degrees(midheaven + 180.0),
            vertex: vertex(lst, latitude, obliquity),
            east_point: ascendant_at(lst, 0.0, obliquity),
        }
    }

    pub fn get(&self, angle: ChartAngle) -> f64 {
        match angle {
            ChartAngle::Ascendant => self.ascendant,
            ChartAngle::Midheaven => self.midheaven,
            ChartAngle::Descendant => self.descendant,
            ChartAngle::ImumCoeli => self.imum_coeli,
            ChartAngle::Vertex => self.vertex,
            ChartAngle::EastPoint => self.east_point,
        }
    }

    /// Apply `f` to every angle.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            ascendant: f(self.ascendant),
            midheaven: f(self.midheaven),
            descendant: f(self.descendant),
            imum_coeli: f(self.imum_coeli),
            vertex: f(self.vertex),
            east_point: f(self.east_point),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartAngle, f64)> + '_ {
        ChartAngle::ALL.iter().map(move |angle| (*angle, self.get(*angle)))
    }
}

fn ascendant_at(ramc: f64, latitude: f64, obliquity: f64) -> f64 {
    let (r, phi, eps) = (
        ramc.to_radians(),
        latitude.to_radians(),
        obliquity.to_radians(),
    );
    let y = r.cos();
    let x = -(r.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Rising point of the ecliptic on the eastern horizon.
pub fn ascendant(lst: f64, latitude: f64, obliquity: f64) -> f64 {
    ascendant_at(lst, latitude, obliquity)
}

/// Culminating point of the ecliptic.
pub fn midheaven(lst: f64, obliquity: f64) -> f64 {
    let (r, eps) = (lst.to_radians(), obliquity.to_radians());
    normalize_degrees(r.sin().atan2(r.cos() * eps.cos()).to_degrees())
}

/// Western intersection of the ecliptic with the prime vertical.
pub fn vertex(lst: f64, latitude: f64, obliquity: f64) -> f64 {
    let (r, phi, eps) = (
        lst.to_radians(),
        latitude.to_radians(),
        obliquity.to_radians(),
    );
    let tan_phi = phi.tan();
    // on the equator the prime vertical is the meridian plane
    if tan_phi.abs() < 1e-12 {
        return normalize_degrees(midheaven(lst, obliquity) + 180.0);
    }
    let y = -r.cos();
    let x = r.sin() * eps.cos() - eps.sin() / tan_phi;
    normalize_degrees(y.atan2(x).to_degrees())
}
