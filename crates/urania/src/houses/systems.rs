//! House division systems.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::angle::{arc_forward, normalize_degrees};
use crate::position::ZodiacPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// House 1 is the whole sign holding the ascendant.
    WholeSign,
    /// 30° houses from the exact ascendant.
    Equal,
    /// Quadrant trisection between the four angles.
    Porphyry,
    Placidus,
    Koch,
    Regiomontanus,
    Campanus,
}

impl HouseSystem {
    /// Parse a one-letter code or a system name.
    ///
    /// Unrecognised input degrades to [`HouseSystem::Equal`].
    pub fn from_code(code: &str) -> HouseSystem {
        let normalized = code.trim().to_lowercase().replace(&['-', ' '][..], "_");
        match normalized.as_str() {
            "w" | "whole_sign" | "wholesign" | "whole" => HouseSystem::WholeSign,
            "e" | "a" | "equal" => HouseSystem::Equal,
            "o" | "porphyry" | "sripati" => HouseSystem::Porphyry,
            "p" | "placidus" => HouseSystem::Placidus,
            "k" | "koch" => HouseSystem::Koch,
            "r" | "regiomontanus" => HouseSystem::Regiomontanus,
            "c" | "campanus" => HouseSystem::Campanus,
            _ => {
                log::warn!("unknown house system {:?}, using equal houses", code);
                HouseSystem::Equal
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::WholeSign => "Whole Sign",
            HouseSystem::Equal => "Equal",
            HouseSystem::Porphyry => "Porphyry",
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Koch => "Koch",
            HouseSystem::Regiomontanus => "Regiomontanus",
            HouseSystem::Campanus => "Campanus",
        }
    }

    /// Quadrant systems other than Porphyry are computed by Porphyry
    /// trisection and flagged as approximated.
    pub fn is_approximated(self) -> bool {
        matches!(
            self,
            HouseSystem::Placidus
                | HouseSystem::Koch
                | HouseSystem::Regiomontanus
                | HouseSystem::Campanus
        )
    }

    /// Twelve cusp longitudes, cusp 1 first.
    pub fn cusps(self, ascendant: f64, midheaven: f64) -> [f64; 12] {
        match self {
            HouseSystem::WholeSign => whole_sign_cusps(ascendant),
            HouseSystem::Equal => equal_cusps(ascendant),
            _ => porphyry_cusps(ascendant, midheaven),
        }
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Placidus
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cusp 1 is 0° of the ascendant's sign, as rounded by `ZodiacPosition`.
pub fn whole_sign_cusps(ascendant: f64) -> [f64; 12] {
    let first = ZodiacPosition::from_longitude(ascendant).sign.start_longitude();
    std::array::from_fn(|i| normalize_degrees(first + 30.0 * i as f64))
}

pub fn equal_cusps(ascendant: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_degrees(ascendant + 30.0 * i as f64))
}

/// Trisect each of the four quadrants between Asc, IC, Desc and MC.
pub fn porphyry_cusps(ascendant: f64, midheaven: f64) -> [f64; 12] {
    let asc = normalize_degrees(ascendant);
    let mc = normalize_degrees(midheaven);
    let desc = normalize_degrees(asc + 180.0);
    let ic = normalize_degrees(mc + 180.0);

    let mut cusps = [0.0; 12];
    // quadrant starts: cusp 1, 4, 7, 10
    for (quadrant, (start, end)) in [(asc, ic), (ic, desc), (desc, mc), (mc, asc)]
        .into_iter()
        .enumerate()
    {
        let arc = arc_forward(start, end);
        let base = quadrant * 3;
        cusps[base] = start;
        cusps[base + 1] = normalize_degrees(start + arc / 3.0);
        cusps[base + 2] = normalize_degrees(start + 2.0 * arc / 3.0);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::angle::angular_separation;

    #[test]
    fn test_from_code() {
        assert_eq!(HouseSystem::from_code("W"), HouseSystem::WholeSign);
        assert_eq!(HouseSystem::from_code("whole-sign"), HouseSystem::WholeSign);
        assert_eq!(HouseSystem::from_code("placidus"), HouseSystem::Placidus);
        assert_eq!(HouseSystem::from_code("K"), HouseSystem::Koch);
        assert_eq!(HouseSystem::from_code("X"), HouseSystem::Equal);
        assert_eq!(HouseSystem::from_code(""), HouseSystem::Equal);
    }

    #[test]
    fn test_whole_sign_cusps() {
        let cusps = whole_sign_cusps(47.3);
        assert_eq!(cusps[0], 30.0);
        assert_eq!(cusps[1], 60.0);
        assert_eq!(cusps[11], 0.0);
    }

    #[test]
    fn test_equal_cusps_wrap() {
        let cusps = equal_cusps(350.0);
        assert!((cusps[1] - 20.0).abs() < 1e-9);
        assert!((cusps[11] - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_porphyry_keeps_angles() {
        let cusps = porphyry_cusps(100.0, 10.0);
        assert!(angular_separation(cusps[0], 100.0) < 1e-9);
        assert!(angular_separation(cusps[3], 190.0) < 1e-9);
        assert!(angular_separation(cusps[6], 280.0) < 1e-9);
        assert!(angular_separation(cusps[9], 10.0) < 1e-9);
        // Asc -> IC is 90°, so 30° steps
        assert!(angular_separation(cusps[1], 130.0) < 1e-9);
        assert!(angular_separation(cusps[2], 160.0) < 1e-9);
    }

    #[test]
    fn test_porphyry_arcs_cover_circle() {
        let cusps = porphyry_cusps(200.0, 115.0);
        let total: f64 = (0..12)
            .map(|i| arc_forward(cusps[i], cusps[(i + 1) % 12]))
            .sum();
        assert!((total - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_approximated_flag() {
        assert!(HouseSystem::Placidus.is_approximated());
        assert!(!HouseSystem::Porphyry.is_approximated());
        assert!(!HouseSystem::WholeSign.is_approximated());
    }
}
