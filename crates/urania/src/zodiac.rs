//! Zodiac signs, elements, and sign rulership.
//!
//! Each sign spans exactly 30 degrees of ecliptic longitude starting at 0° Aries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::Body;
use crate::position::angle::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    /// Sign containing the given longitude (any finite value).
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / 30.0).floor() as usize)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Longitude of 0° of this sign.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// The sign `steps` places forward (negative steps go backward).
    pub fn offset(self, steps: i32) -> Sign {
        let idx = (self.index() as i32 + steps).rem_euclid(12);
        Self::from_index(idx as usize)
    }

    /// Forward count of signs from `self` to `other`, in 0..12.
    pub fn distance_to(self, other: Sign) -> usize {
        (other.index() + 12 - self.index()) % 12
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.write_str(name)
    }
}

/// Ruling planet for each of the twelve signs, indexed from Aries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignRulership {
    rulers: [Body; 12],
}

impl SignRulership {
    pub fn new(rulers: [Body; 12]) -> Self {
        Self { rulers }
    }

    /// Traditional rulerships (seven visible planets only).
    pub fn traditional() -> Self {
        Self::new([
            Body::Mars,    // Aries
            Body::Venus,   // Taurus
            Body::Mercury, // Gemini
            Body::Moon,    // Cancer
            Body::Sun,     // Leo
            Body::Mercury, // Virgo
            Body::Venus,   // Libra
            Body::Mars,    // Scorpio
            Body::Jupiter, // Sagittarius
            Body::Saturn,  // Capricorn
            Body::Saturn,  // Aquarius
            Body::Jupiter, // Pisces
        ])
    }

    /// Modern rulerships with the outer planets on Scorpio, Aquarius and Pisces.
    pub fn modern() -> Self {
        let mut rulers = Self::traditional().rulers;
        rulers[Sign::Scorpio.index()] = Body::Pluto;
        rulers[Sign::Aquarius.index()] = Body::Uranus;
        rulers[Sign::Pisces.index()] = Body::Neptune;
        Self::new(rulers)
    }

    pub fn ruler(&self, sign: Sign) -> Body {
        self.rulers[sign.index()]
    }

    pub fn ruler_of_longitude(&self, longitude: f64) -> Body {
        self.ruler(Sign::from_longitude(longitude))
    }

    /// Signs ruled by `body` under this table.
    pub fn signs_ruled_by(&self, body: Body) -> Vec<Sign> {
        Sign::ALL
            .iter()
            .copied()
            .filter(|sign| self.ruler(*sign) == body)
            .collect()
    }
}

impl Default for SignRulership {
    fn default() -> Self {
        Self::traditional()
    }
}
