//! Injected rule tables for the sidereal extension.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::Body;
use crate::zodiac::{Sign, SignRulership};

/// Lord and length in years of one Vimshottari period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaLord {
    pub lord: Body,
    pub years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaRules {
    /// Lords in cycle order
    pub sequence: Vec<DashaLord>,
    /// Days in a dasha year
    pub year_days: f64,
}

impl DashaRules {
    pub fn total_years(&self) -> f64 {
        self.sequence.iter().map(|entry| entry.years).sum()
    }

    pub fn position_of(&self, lord: Body) -> Option<usize> {
        self.sequence.iter().position(|entry| entry.lord == lord)
    }
}

impl Default for DashaRules {
    fn default() -> Self {
        let sequence = [
            (Body::SouthNode, 7.0),
            (Body::Venus, 20.0),
            (Body::Sun, 6.0),
            (Body::Moon, 10.0),
            (Body::Mars, 7.0),
            (Body::NorthNode, 18.0),
            (Body::Jupiter, 16.0),
            (Body::Saturn, 19.0),
            (Body::Mercury, 17.0),
        ]
        .into_iter()
        .map(|(lord, years)| DashaLord { lord, years })
        .collect();
        Self {
            sequence,
            year_days: 365.25,
        }
    }
}

/// Dignity and friendship tables keyed by planet.
///
/// Nodes have no entries, so they classify as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicRules {
    pub exaltation: BTreeMap<Body, Sign>,
    pub debilitation: BTreeMap<Body, Sign>,
    pub own_signs: BTreeMap<Body, Vec<Sign>>,
    pub friends: BTreeMap<Body, Vec<Body>>,
    pub enemies: BTreeMap<Body, Vec<Body>>,
    /// Sign lords used for dignity and house lordship
    pub rulers: SignRulership,
    pub dasha: DashaRules,
}

impl VedicRules {
    pub fn is_friend(&self, planet: Body, other: Body) -> bool {
        self.friends
            .get(&planet)
            .map(|list| list.contains(&other))
            .unwrap_or(false)
    }

    pub fn is_enemy(&self, planet: Body, other: Body) -> bool {
        self.enemies
            .get(&planet)
            .map(|list| list.contains(&other))
            .unwrap_or(false)
    }
}

impl Default for VedicRules {
    fn default() -> Self {
        use Body::*;

        let exaltation: BTreeMap<Body, Sign> = [
            (Sun, Sign::Aries),
            (Moon, Sign::Taurus),
            (Mars, Sign::Capricorn),
            (Mercury, Sign::Virgo),
            (Jupiter, Sign::Cancer),
            (Venus, Sign::Pisces),
            (Saturn, Sign::Libra),
        ]
        .into_iter()
        .collect();
        let debilitation = exaltation
            .iter()
            .map(|(body, sign)| (*body, sign.offset(6)))
            .collect();

        let own_signs = [
            (Sun, vec![Sign::Leo]),
            (Moon, vec![Sign::Cancer]),
            (Mars, vec![Sign::Aries, Sign::Scorpio]),
            (Mercury, vec![Sign::Gemini, Sign::Virgo]),
            (Jupiter, vec![Sign::Sagittarius, Sign::Pisces]),
            (Venus, vec![Sign::Taurus, Sign::Libra]),
            (Saturn, vec![Sign::Capricorn, Sign::Aquarius]),
        ]
        .into_iter()
        .collect();

        // natural friendships
        let friends = [
            (Sun, vec![Moon, Mars, Jupiter]),
            (Moon, vec![Sun, Mercury]),
            (Mars, vec![Sun, Moon, Jupiter]),
            (Mercury, vec![Sun, Venus]),
            (Jupiter, vec![Sun, Moon, Mars]),
            (Venus, vec![Mercury, Saturn]),
            (Saturn, vec![Mercury, Venus]),
        ]
        .into_iter()
        .collect();
        let enemies = [
            (Sun, vec![Venus, Saturn]),
            (Moon, vec![]),
            (Mars, vec![Mercury]),
            (Mercury, vec![Moon]),
            (Jupiter, vec![Mercury, Venus]),
            (Venus, vec![Sun, Moon]),
            (Saturn, vec![Sun, Moon, Mars]),
        ]
        .into_iter()
        .collect();

        Self {
            exaltation,
            debilitation,
            own_signs,
            friends,
            enemies,
            rulers: SignRulership::traditional(),
            dasha: DashaRules::default(),
        }
    }
}
