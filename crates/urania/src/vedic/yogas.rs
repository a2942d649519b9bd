//! Yoga detection for sidereal charts.
//!
//! Yogas are planetary combinations read from house lordship, dignity and
//! relative placement. House lords come from the sign on each cusp.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ephemeris::Body;
use crate::houses::HouseTable;
use crate::position::CelestialPoint;
use crate::vedic::dignity::{classify, Dignity};
use crate::vedic::rules::VedicRules;
use crate::zodiac::Sign;

const KENDRAS: [u8; 4] = [1, 4, 7, 10];
const TRIKONAS: [u8; 3] = [1, 5, 9];
const WEALTH_HOUSES: [u8; 2] = [2, 11];
const FORTUNE_HOUSES: [u8; 2] = [5, 9];

// Panchamahapurusha names by planet
const MAHAPURUSHA: [(Body, &str); 5] = [
    (Body::Mars, "Ruchaka"),
    (Body::Mercury, "Bhadra"),
    (Body::Jupiter, "Hamsa"),
    (Body::Venus, "Malavya"),
    (Body::Saturn, "Sasa"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YogaIntensity {
    Mild,
    Moderate,
    Strong,
}

impl fmt::Display for YogaIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            YogaIntensity::Mild => "mild",
            YogaIntensity::Moderate => "moderate",
            YogaIntensity::Strong => "strong",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: String,
    pub description: String,
    pub effect: String,
    pub intensity: YogaIntensity,
    pub planets: Vec<String>,
}

fn is_kendra(house: u8) -> bool {
    KENDRAS.contains(&house)
}

fn is_trikona(house: u8) -> bool {
    TRIKONAS.contains(&house)
}

/// Classical planets present in the chart, with their sign and house.
struct Placements {
    by_body: BTreeMap<Body, (Sign, u8)>,
}

impl Placements {
    fn new(points: &[CelestialPoint]) -> Self {
        let by_body = points
            .iter()
            .filter(|point| point.is_body())
            .filter_map(|point| {
                let body = Body::from_name(point.name())?;
                Some((body, (point.sign(), point.house())))
            })
            .collect();
        Self { by_body }
    }

    fn sign(&self, body: Body) -> Option<Sign> {
        self.by_body.get(&body).map(|(sign, _)| *sign)
    }

    fn house(&self, body: Body) -> Option<u8> {
        self.by_body.get(&body).map(|(_, house)| *house)
    }
}

/// Lord of each house, from the sign on its cusp.
fn house_lords(houses: &HouseTable, rules: &VedicRules) -> BTreeMap<u8, Body> {
    (1..=12u8)
        .filter_map(|house| {
            let cusp = houses.cusp(house)?;
            Some((house, rules.rulers.ruler_of_longitude(cusp)))
        })
        .collect()
}

/// Find every pair of distinct lords, one from each house group, sitting in
/// the same house.
fn lord_conjunctions(
    first: &[u8],
    second: &[u8],
    lords: &BTreeMap<u8, Body>,
    placements: &Placements,
) -> Vec<(Body, Body, u8)> {
    let mut seen = BTreeSet::new();
    let mut found = Vec::new();
    for a in first {
        for b in second {
            let (Some(&lord_a), Some(&lord_b)) = (lords.get(a), lords.get(b)) else {
                continue;
            };
            if lord_a == lord_b {
                continue;
            }
            let (Some(house_a), Some(house_b)) =
                (placements.house(lord_a), placements.house(lord_b))
            else {
                continue;
            };
            if house_a != house_b {
                continue;
            }
            let key = (lord_a.min(lord_b), lord_a.max(lord_b));
            if seen.insert(key) {
                found.push((key.0, key.1, house_a));
            }
        }
    }
    found
}

fn raja_yogas(lords: &BTreeMap<u8, Body>, placements: &Placements) -> Vec<Yoga> {
    lord_conjunctions(&KENDRAS, &TRIKONAS, lords, placements)
        .into_iter()
        .map(|(a, b, house)| Yoga {
            name: "Raja Yoga".to_string(),
            description: format!(
                "{} and {} join as kendra and trikona lords in house {}",
                a.vedic_name(),
                b.vedic_name(),
                house
            ),
            effect: "Authority, status and recognition".to_string(),
            intensity: if is_kendra(house) || is_trikona(house) {
                YogaIntensity::Strong
            } else {
                YogaIntensity::Moderate
            },
            planets: vec![a.vedic_name().to_string(), b.vedic_name().to_string()],
        })
        .collect()
}

fn dhana_yogas(lords: &BTreeMap<u8, Body>, placements: &Placements) -> Vec<Yoga> {
    lord_conjunctions(&WEALTH_HOUSES, &FORTUNE_HOUSES, lords, placements)
        .into_iter()
        .map(|(a, b, house)| Yoga {
            name: "Dhana Yoga".to_string(),
            description: format!(
                "{} and {} join as wealth and fortune lords in house {}",
                a.vedic_name(),
                b.vedic_name(),
                house
            ),
            effect: "Accumulation of wealth".to_string(),
            intensity: if WEALTH_HOUSES.contains(&house) || FORTUNE_HOUSES.contains(&house) {
                YogaIntensity::Strong
            } else {
                YogaIntensity::Moderate
            },
            planets: vec![a.vedic_name().to_string(), b.vedic_name().to_string()],
        })
        .collect()
}

fn mahapurusha_yogas(placements: &Placements, rules: &VedicRules) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for (body, name) in MAHAPURUSHA {
        let (Some(sign), Some(house)) = (placements.sign(body), placements.house(body)) else {
            continue;
        };
        if !is_kendra(house) {
            continue;
        }
        let dignity = classify(body, sign, rules);
        if !dignity.is_strong() {
            continue;
        }
        yogas.push(Yoga {
            name: format!("{} Yoga", name),
            description: format!(
                "{} is {} in {} and occupies kendra house {}",
                body.vedic_name(),
                dignity.to_string().to_lowercase(),
                sign,
                house
            ),
            effect: "Pancha Mahapurusha: eminence through the planet's nature".to_string(),
            intensity: if dignity == Dignity::Exalted {
                YogaIntensity::Strong
            } else {
                YogaIntensity::Moderate
            },
            planets: vec![body.vedic_name().to_string()],
        });
    }
    yogas
}

fn gajakesari_yoga(placements: &Placements, rules: &VedicRules) -> Option<Yoga> {
    let moon = placements.sign(Body::Moon)?;
    let jupiter = placements.sign(Body::Jupiter)?;
    if moon.distance_to(jupiter) % 3 != 0 {
        return None;
    }
    let dignity = classify(Body::Jupiter, jupiter, rules);
    let intensity = if dignity.is_strong() {
        YogaIntensity::Strong
    } else if dignity == Dignity::Debilitated {
        YogaIntensity::Mild
    } else {
        YogaIntensity::Moderate
    };
    Some(Yoga {
        name: "Gajakesari Yoga".to_string(),
        description: format!("Jupiter in {} is in a kendra from the Moon in {}", jupiter, moon),
        effect: "Wisdom, reputation and lasting prosperity".to_string(),
        intensity,
        planets: vec!["Jupiter".to_string(), "Moon".to_string()],
    })
}

fn budhaditya_yoga(placements: &Placements) -> Option<Yoga> {
    let sun = placements.house(Body::Sun)?;
    let mercury = placements.house(Body::Mercury)?;
    if sun != mercury {
        return None;
    }
    Some(Yoga {
        name: "Budhaditya Yoga".to_string(),
        description: format!("Sun and Mercury together in house {}", sun),
        effect: "Intelligence and skill in communication".to_string(),
        intensity: if is_kendra(sun) || is_trikona(sun) {
            YogaIntensity::Strong
        } else {
            YogaIntensity::Mild
        },
        planets: vec!["Sun".to_string(), "Mercury".to_string()],
    })
}

/// Identify yogas from sidereal points and the chart's house cusps.
pub fn identify_yogas(
    points: &[CelestialPoint],
    houses: &HouseTable,
    rules: &VedicRules,
) -> Vec<Yoga> {
    let placements = Placements::new(points);
    if placements.by_body.is_empty() {
        return Vec::new();
    }
    let lords = house_lords(houses, rules);

    let mut yogas = raja_yogas(&lords, &placements);
    yogas.extend(dhana_yogas(&lords, &placements));
    yogas.extend(mahapurusha_yogas(&placements, rules));
    yogas.extend(gajakesari_yoga(&placements, rules));
    yogas.extend(budhaditya_yoga(&placements));
    yogas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::{whole_sign_house, HouseSystem};
    use crate::position::{MovingPoint, Placement};

    fn planet(name: &str, lon: f64, asc: f64) -> CelestialPoint {
        CelestialPoint::Planet(MovingPoint::new(
            Placement::new(name, lon, 0.0, whole_sign_house(asc, lon)),
            1.0,
        ))
    }

    fn houses(asc: f64) -> HouseTable {
        HouseTable::compute(HouseSystem::WholeSign, asc, asc + 270.0)
    }

    fn names(yogas: &[Yoga]) -> Vec<&str> {
        yogas.iter().map(|y| y.name.as_str()).collect()
    }

    #[test]
    fn test_empty_chart() {
        assert!(identify_yogas(&[], &houses(0.0), &VedicRules::default()).is_empty());
    }

    #[test]
    fn test_raja_yoga() {
        // Aries rising: Moon lords the 4th, Sun lords the 5th
        let points = vec![planet("Sun", 95.0, 0.0), planet("Moon", 100.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        let raja: Vec<_> = yogas.iter().filter(|y| y.name == "Raja Yoga").collect();
        assert_eq!(raja.len(), 1);
        assert_eq!(raja[0].intensity, YogaIntensity::Strong);
        assert!(raja[0].planets.contains(&"Sun".to_string()));
    }

    #[test]
    fn test_dhana_yoga() {
        // Aries rising: Venus lords the 2nd, Jupiter the 9th; both in the 11th
        let points = vec![planet("Venus", 305.0, 0.0), planet("Jupiter", 310.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        let dhana: Vec<_> = yogas.iter().filter(|y| y.name == "Dhana Yoga").collect();
        assert_eq!(dhana.len(), 1);
        assert_eq!(dhana[0].intensity, YogaIntensity::Strong);
    }

    #[test]
    fn test_mahapurusha_requires_kendra() {
        // Mars exalted in Capricorn, 10th from Aries
        let points = vec![planet("Mars", 280.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        let ruchaka = yogas.iter().find(|y| y.name == "Ruchaka Yoga").unwrap();
        assert_eq!(ruchaka.intensity, YogaIntensity::Strong);

        // same Mars with Taurus rising falls in the 9th
        let points = vec![planet("Mars", 280.0, 30.0)];
        let yogas = identify_yogas(&points, &houses(30.0), &VedicRules::default());
        assert!(!names(&yogas).contains(&"Ruchaka Yoga"));
    }

    #[test]
    fn test_own_sign_mahapurusha_is_moderate() {
        // Saturn in Aquarius with Taurus rising: 10th house
        let points = vec![planet("Saturn", 310.0, 30.0)];
        let yogas = identify_yogas(&points, &houses(30.0), &VedicRules::default());
        let sasa = yogas.iter().find(|y| y.name == "Sasa Yoga").unwrap();
        assert_eq!(sasa.intensity, YogaIntensity::Moderate);
    }

    #[test]
    fn test_gajakesari() {
        // Moon in Aries, Jupiter in Cancer (4th from the Moon, exalted)
        let points = vec![planet("Moon", 10.0, 0.0), planet("Jupiter", 95.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        let gk = yogas.iter().find(|y| y.name == "Gajakesari Yoga").unwrap();
        assert_eq!(gk.intensity, YogaIntensity::Strong);

        // Jupiter in Taurus is not in a kendra from the Moon
        let points = vec![planet("Moon", 10.0, 0.0), planet("Jupiter", 40.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        assert!(!names(&yogas).contains(&"Gajakesari Yoga"));
    }

    #[test]
    fn test_budhaditya() {
        let points = vec![planet("Sun", 62.0, 0.0), planet("Mercury", 75.0, 0.0)];
        let yogas = identify_yogas(&points, &houses(0.0), &VedicRules::default());
        let b = yogas.iter().find(|y| y.name == "Budhaditya Yoga").unwrap();
        // 3rd house is neither kendra nor trikona
        assert_eq!(b.intensity, YogaIntensity::Mild);
    }
}
