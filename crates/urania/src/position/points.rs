use serde::{Deserialize, Serialize};

use crate::position::dms::ZodiacPosition;
use crate::zodiac::Sign;

/// Data every chart point carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    #[serde(flatten)]
    pub zodiac: ZodiacPosition,
    /// Equatorial declination in degrees
    pub declination: f64,
    /// House number 1-12
    pub house: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
}

impl Placement {
    pub fn new(name: impl Into<String>, longitude: f64, declination: f64, house: u8) -> Self {
        Self {
            name: name.into(),
            zodiac: ZodiacPosition::from_longitude(longitude),
            declination,
            house,
            nakshatra: None,
        }
    }
}

/// A placement with a signed daily speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingPoint {
    #[serde(flatten)]
    pub placement: Placement,
    /// Degrees per day; negative when retrograde
    pub speed: f64,
}

impl MovingPoint {
    pub fn new(placement: Placement, speed: f64) -> Self {
        Self { placement, speed }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Any point placed on a chart.
///
/// Only planets and nodes move; angles, auxiliary points and fixed stars
/// carry no speed at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CelestialPoint {
    Planet(MovingPoint),
    Node(MovingPoint),
    Angle(Placement),
    AuxiliaryPoint(Placement),
    FixedStar(Placement),
}

impl CelestialPoint {
    pub fn placement(&self) -> &Placement {
        match self {
            CelestialPoint::Planet(p) | CelestialPoint::Node(p) => &p.placement,
            CelestialPoint::Angle(p)
            | CelestialPoint::AuxiliaryPoint(p)
            | CelestialPoint::FixedStar(p) => p,
        }
    }

    pub(crate) fn placement_mut(&mut self) -> &mut Placement {
        match self {
            CelestialPoint::Planet(p) | CelestialPoint::Node(p) => &mut p.placement,
            CelestialPoint::Angle(p)
            | CelestialPoint::AuxiliaryPoint(p)
            | CelestialPoint::FixedStar(p) => p,
        }
    }

    pub fn name(&self) -> &str {
        &self.placement().name
    }

    pub fn longitude(&self) -> f64 {
        self.placement().zodiac.longitude
    }

    pub fn sign(&self) -> Sign {
        self.placement().zodiac.sign
    }

    pub fn zodiac(&self) -> &ZodiacPosition {
        &self.placement().zodiac
    }

    pub fn declination(&self) -> f64 {
        self.placement().declination
    }

    pub fn house(&self) -> u8 {
        self.placement().house
    }

    pub fn nakshatra(&self) -> Option<&str> {
        self.placement().nakshatra.as_deref()
    }

    /// Daily speed; `None` for points that do not move.
    pub fn speed(&self) -> Option<f64> {
        match self {
            CelestialPoint::Planet(p) | CelestialPoint::Node(p) => Some(p.speed),
            _ => None,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed().map(|s| s < 0.0).unwrap_or(false)
    }

    /// Planets and nodes take part in aspects; the rest do not.
    pub fn is_body(&self) -> bool {
        matches!(self, CelestialPoint::Planet(_) | CelestialPoint::Node(_))
    }
}
