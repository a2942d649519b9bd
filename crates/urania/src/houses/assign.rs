use serde::{Deserialize, Serialize};

use crate::houses::systems::HouseSystem;
use crate::position::angle::normalize_degrees;
use crate::position::ZodiacPosition;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1-12
    pub index: u8,
    /// Longitude where the house begins
    pub longitude: f64,
}

/// Cusps for one chart together with the system that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseTable {
    pub system: HouseSystem,
    /// True when a quadrant system was approximated by trisection
    pub approximated: bool,
    cusps: [f64; 12],
}

impl HouseTable {
    pub fn compute(system: HouseSystem, ascendant: f64, midheaven: f64) -> Self {
        Self {
            system,
            approximated: system.is_approximated(),
            cusps: system.cusps(ascendant, midheaven),
        }
    }

    /// Build from explicit cusp longitudes, cusp 1 first.
    pub fn from_cusps(system: HouseSystem, cusps: [f64; 12]) -> Self {
        Self {
            system,
            approximated: system.is_approximated(),
            cusps: cusps.map(normalize_degrees),
        }
    }

    pub fn cusp(&self, house: u8) -> Option<f64> {
        match house {
            1..=12 => Some(self.cusps[house as usize - 1]),
            _ => None,
        }
    }

    pub fn cusps(&self) -> Vec<HouseCusp> {
        self.cusps
            .iter()
            .enumerate()
            .map(|(i, lon)| HouseCusp {
                index: i as u8 + 1,
                longitude: *lon,
            })
            .collect()
    }

    /// House (1-12) containing the longitude.
    pub fn house_of(&self, longitude: f64) -> u8 {
        house_of(&self.cusps, longitude)
    }

    /// House of a decomposed position, read from its rounded sign, degree,
    /// minute and second so the house always agrees with the reported sign.
    pub fn house_of_position(&self, position: &ZodiacPosition) -> u8 {
        self.house_of(position.to_longitude())
    }
}

/// Find the arc `cusp[i] ≤ L < cusp[i+1]` holding `longitude`.
///
/// An arc whose end is numerically below its start wraps through 0°, and
/// matches when `L ≥ cusp[i] || L < cusp[i+1]`.
pub fn house_of(cusps: &[f64; 12], longitude: f64) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if end > start {
            lon >= start && lon < end
        } else if end < start {
            lon >= start || lon < end
        } else {
            // zero-width arc
            false
        };
        if inside {
            return i as u8 + 1;
        }
    }
    // degenerate tables (all cusps equal) put everything in house 1
    1
}

/// Whole Sign shortcut: `((sign(p) − sign(asc) + 12) mod 12) + 1`.
///
/// Signs are taken after rounding to the arc second, as `ZodiacPosition`
/// reports them.
pub fn whole_sign_house(ascendant: f64, longitude: f64) -> u8 {
    let asc_sign = ZodiacPosition::from_longitude(ascendant).sign.index();
    let sign = ZodiacPosition::from_longitude(longitude).sign.index();
    (((sign + 12 - asc_sign) % 12) + 1) as u8
}
