//! Graha drishti: the directional house aspects cast by each planet.

use serde::{Deserialize, Serialize};

use crate::ephemeris::Body;
use crate::position::CelestialPoint;

/// Counted inclusively: the 7th house is six signs on.
const FULL_ASPECT: u8 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drishti {
    pub planet: String,
    #[serde(rename = "fromHouse")]
    pub from_house: u8,
    #[serde(rename = "targetHouse")]
    pub target_house: u8,
    /// Which house from the planet is aspected (3rd, 4th, 5th, 7th ...)
    #[serde(rename = "aspectNumber")]
    pub aspect_number: u8,
    /// Bodies occupying the target house
    pub occupants: Vec<String>,
}

/// Houses counted from the planet that it aspects.
pub fn aspect_numbers(planet: Body) -> Vec<u8> {
    let mut numbers = match planet {
        Body::Mars => vec![4, 8],
        Body::Jupiter => vec![5, 9],
        Body::Saturn => vec![3, 10],
        _ => Vec::new(),
    };
    numbers.push(FULL_ASPECT);
    numbers.sort_unstable();
    numbers
}

/// House reached by counting `number` houses inclusively from `from`.
///
/// Out-of-range houses wrap like any other count, so house 0 reads as 12.
pub fn count_houses(from: u8, number: u8) -> u8 {
    (from as i32 - 1 + number as i32 - 1).rem_euclid(12) as u8 + 1
}

/// Drishti of the seven classical planets.
pub fn graha_drishti(points: &[CelestialPoint]) -> Vec<Drishti> {
    let bodies: Vec<&CelestialPoint> = points.iter().filter(|point| point.is_body()).collect();

    let mut aspects = Vec::new();
    for point in &bodies {
        let Some(planet) = Body::from_name(point.name()) else {
            continue;
        };
        if !Body::CLASSICAL.contains(&planet) {
            continue;
        }
        let from_house = point.house();
        for number in aspect_numbers(planet) {
            let target_house = count_houses(from_house, number);
            let occupants = bodies
                .iter()
                .filter(|other| other.house() == target_house && other.name() != point.name())
                .map(|other| other.name().to_string())
                .collect();
            aspects.push(Drishti {
                planet: planet.vedic_name().to_string(),
                from_house,
                target_house,
                aspect_number: number,
                occupants,
            });
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{MovingPoint, Placement};

    fn planet(name: &str, house: u8) -> CelestialPoint {
        CelestialPoint::Planet(MovingPoint::new(
            Placement::new(name, (house as f64 - 1.0) * 30.0 + 5.0, 0.0, house),
            1.0,
        ))
    }

    #[test]
    fn test_count_houses_wraps() {
        assert_eq!(count_houses(1, 7), 7);
        assert_eq!(count_houses(8, 7), 2);
        assert_eq!(count_houses(12, 3), 2);
        assert_eq!(count_houses(3, 1), 3);
    }

    #[test]
    fn test_count_houses_from_house_zero() {
        assert_eq!(count_houses(0, 7), 6);
        assert_eq!(count_houses(0, 1), 12);
        assert_eq!(count_houses(12, 7), 6);
        assert_eq!(graha_drishti(&[planet("Sun", 0)])[0].target_house, 6);
    }

    #[test]
    fn test_special_aspects() {
        assert_eq!(aspect_numbers(Body::Sun), vec![7]);
        assert_eq!(aspect_numbers(Body::Mars), vec![4, 7, 8]);
        assert_eq!(aspect_numbers(Body::Jupiter), vec![5, 7, 9]);
        assert_eq!(aspect_numbers(Body::Saturn), vec![3, 7, 10]);
    }

    #[test]
    fn test_drishti_occupants() {
        let points = vec![planet("Jupiter", 1), planet("Moon", 5), planet("Venus", 7)];
        let drishti = graha_drishti(&points);
        let jupiter: Vec<_> = drishti.iter().filter(|d| d.planet == "Jupiter").collect();
        assert_eq!(jupiter.len(), 3);
        let fifth = jupiter.iter().find(|d| d.aspect_number == 5).unwrap();
        assert_eq!(fifth.target_house, 5);
        assert_eq!(fifth.occupants, vec!["Moon".to_string()]);
        let seventh = jupiter.iter().find(|d| d.aspect_number == 7).unwrap();
        assert_eq!(seventh.occupants, vec!["Venus".to_string()]);
    }

    #[test]
    fn test_outer_planets_skipped() {
        let points = vec![planet("Uranus", 1), planet("North Node", 2)];
        assert!(graha_drishti(&points).is_empty());
    }
}
