//! Planetary dignity classification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ephemeris::Body;
use crate::position::CelestialPoint;
use crate::vedic::rules::VedicRules;
use crate::zodiac::Sign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Friend,
    Enemy,
    Neutral,
}

impl Dignity {
    /// Exalted or in its own sign.
    pub fn is_strong(self) -> bool {
        matches!(self, Dignity::Exalted | Dignity::OwnSign)
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dignity::Exalted => "Exalted",
            Dignity::Debilitated => "Debilitated",
            Dignity::OwnSign => "Own Sign",
            Dignity::Friend => "Friend",
            Dignity::Enemy => "Enemy",
            Dignity::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// Classify one planet in one sign.
///
/// Exaltation and debilitation win over own sign; otherwise the sign's
/// ruler decides through the natural friendship table.
pub fn classify(planet: Body, sign: Sign, rules: &VedicRules) -> Dignity {
    if rules.exaltation.get(&planet) == Some(&sign) {
        return Dignity::Exalted;
    }
    if rules.debilitation.get(&planet) == Some(&sign) {
        return Dignity::Debilitated;
    }
    if rules
        .own_signs
        .get(&planet)
        .map(|signs| signs.contains(&sign))
        .unwrap_or(false)
    {
        return Dignity::OwnSign;
    }

    let ruler = rules.rulers.ruler(sign);
    if rules.is_friend(planet, ruler) {
        Dignity::Friend
    } else if rules.is_enemy(planet, ruler) {
        Dignity::Enemy
    } else {
        Dignity::Neutral
    }
}

/// Dignity of every planet and node, keyed by point name.
pub fn dignities(points: &[CelestialPoint], rules: &VedicRules) -> BTreeMap<String, Dignity> {
    points
        .iter()
        .filter(|point| point.is_body())
        .filter_map(|point| {
            let body = Body::from_name(point.name())?;
            Some((point.name().to_string(), classify(body, point.sign(), rules)))
        })
        .collect()
}
