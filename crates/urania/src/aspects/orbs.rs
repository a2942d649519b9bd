//! Orb presets and strictness tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aspects::types::AspectType;

/// Fixed orb for declination aspects.
pub const DECLINATION_ORB: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbStrictness {
    Strict,
    #[default]
    Standard,
    Wide,
}

impl OrbStrictness {
    pub fn parse(value: &str) -> Option<OrbStrictness> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Some(OrbStrictness::Strict),
            "standard" => Some(OrbStrictness::Standard),
            "wide" => Some(OrbStrictness::Wide),
            _ => None,
        }
    }
}

impl fmt::Display for OrbStrictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbStrictness::Strict => "strict",
            OrbStrictness::Standard => "standard",
            OrbStrictness::Wide => "wide",
        };
        f.write_str(name)
    }
}

/// Base orbs per aspect type plus a bonus when a luminary takes part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbPreset {
    pub conjunction: f64,
    pub opposition: f64,
    pub trine: f64,
    pub square: f64,
    pub sextile: f64,
    pub quincunx: f64,
    pub quintile: f64,
    pub luminary_bonus: f64,
}

impl OrbPreset {
    pub fn base_orb(&self, aspect_type: AspectType) -> f64 {
        match aspect_type {
            AspectType::Conjunction => self.conjunction,
            AspectType::Opposition => self.opposition,
            AspectType::Trine => self.trine,
            AspectType::Square => self.square,
            AspectType::Sextile => self.sextile,
            AspectType::Quincunx => self.quincunx,
            AspectType::Quintile => self.quintile,
            AspectType::Parallel | AspectType::ContraParallel => DECLINATION_ORB,
        }
    }

    /// Orb limit for a pair; the bonus applies when either side is the Sun or Moon.
    pub fn limit(&self, aspect_type: AspectType, involves_luminary: bool) -> f64 {
        let bonus = if involves_luminary && !aspect_type.is_declination() {
            self.luminary_bonus
        } else {
            0.0
        };
        self.base_orb(aspect_type) + bonus
    }
}

/// The three strictness tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    pub strict: OrbPreset,
    pub standard: OrbPreset,
    pub wide: OrbPreset,
}

impl OrbTable {
    pub fn preset(&self, strictness: OrbStrictness) -> &OrbPreset {
        match strictness {
            OrbStrictness::Strict => &self.strict,
            OrbStrictness::Standard => &self.standard,
            OrbStrictness::Wide => &self.wide,
        }
    }

    pub fn preset_mut(&mut self, strictness: OrbStrictness) -> &mut OrbPreset {
        match strictness {
            OrbStrictness::Strict => &mut self.strict,
            OrbStrictness::Standard => &mut self.standard,
            OrbStrictness::Wide => &mut self.wide,
        }
    }

    /// Largest limit any tier allows, used to bound the search.
    pub fn search_limit(&self, aspect_type: AspectType, involves_luminary: bool) -> f64 {
        [&self.strict, &self.standard, &self.wide]
            .iter()
            .map(|preset| preset.limit(aspect_type, involves_luminary))
            .fold(0.0, f64::max)
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            strict: OrbPreset {
                conjunction: 6.0,
                opposition: 6.0,
                trine: 5.0,
                square: 5.0,
                sextile: 3.0,
                quincunx: 2.0,
                quintile: 1.0,
                luminary_bonus: 0.0,
            },
            standard: OrbPreset {
                conjunction: 8.0,
                opposition: 8.0,
                trine: 7.0,
                square: 7.0,
                sextile: 5.0,
                quincunx: 3.0,
                quintile: 2.0,
                luminary_bonus: 2.0,
            },
            wide: OrbPreset {
                conjunction: 10.0,
                opposition: 10.0,
                trine: 9.0,
                square: 9.0,
                sextile: 6.0,
                quincunx: 4.0,
                quintile: 2.5,
                luminary_bonus: 3.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminary_bonus() {
        let table = OrbTable::default();
        let standard = table.preset(OrbStrictness::Standard);
        assert_eq!(standard.limit(AspectType::Conjunction, false), 8.0);
        assert_eq!(standard.limit(AspectType::Conjunction, true), 10.0);
        assert_eq!(standard.limit(AspectType::Parallel, true), DECLINATION_ORB);
    }

    #[test]
    fn test_search_limit_is_wide() {
        let table = OrbTable::default();
        assert_eq!(table.search_limit(AspectType::Trine, true), 12.0);
        assert_eq!(table.search_limit(AspectType::Quintile, false), 2.5);
    }

    #[test]
    fn test_parse_strictness() {
        assert_eq!(OrbStrictness::parse("Strict"), Some(OrbStrictness::Strict));
        assert_eq!(OrbStrictness::parse("loose"), None);
        assert_eq!(OrbStrictness::default(), OrbStrictness::Standard);
    }
}
