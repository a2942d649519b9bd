mod common;

use common::{node, planet, planet_dec};
use urania::aspects::{
    declination_aspects, sidereal_aspects, AspectCalculator, AspectSettings, AspectType,
    OrbStrictness, OrbTable,
};

fn settings(strictness: OrbStrictness) -> AspectSettings {
    AspectSettings {
        strictness,
        include_nodes: true,
    }
}

#[test]
fn test_sun_moon_nine_degrees_by_strictness() {
    let orbs = OrbTable::default();
    let calculator = AspectCalculator::new(&orbs);
    // Moon 9° behind the Sun and catching up
    let points = vec![planet("Sun", 0.0, 1.0), planet("Moon", 351.0, 13.0)];

    let strict = calculator.compute(&points, &settings(OrbStrictness::Strict));
    assert_eq!(strict.len(), 1);
    assert_eq!(strict[0].aspect_type, AspectType::Conjunction);
    assert!(strict[0].ghost);
    assert!(strict[0].applying);

    let standard = calculator.compute(&points, &settings(OrbStrictness::Standard));
    assert_eq!(standard.len(), 1);
    assert!(!standard[0].ghost);
    assert!((standard[0].orb - 9.0).abs() < 1e-9);
    assert_eq!(standard[0].orb_limit, 10.0);
}

#[test]
fn test_separating_outside_active_is_dropped() {
    let orbs = OrbTable::default();
    let calculator = AspectCalculator::new(&orbs);
    // Moon 9° ahead and pulling away
    let points = vec![planet("Sun", 0.0, 1.0), planet("Moon", 9.0, 13.0)];
    assert!(calculator
        .compute(&points, &settings(OrbStrictness::Strict))
        .is_empty());
}

#[test]
fn test_orb_and_ghost_invariants() {
    let orbs = OrbTable::default();
    let calculator = AspectCalculator::new(&orbs);
    let longitudes = [3.0, 47.5, 95.2, 121.0, 178.8, 200.1, 242.4, 268.0, 301.7, 359.5];
    let names = [
        "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    ];
    let points: Vec<_> = names
        .iter()
        .zip(longitudes)
        .enumerate()
        .map(|(i, (name, lon))| planet(name, lon, if i % 3 == 0 { -0.5 } else { 1.0 + i as f64 }))
        .collect();

    for strictness in [OrbStrictness::Strict, OrbStrictness::Standard, OrbStrictness::Wide] {
        for aspect in calculator.compute(&points, &settings(strictness)) {
            assert!(aspect.orb >= 0.0);
            if aspect.ghost {
                assert!(aspect.applying);
                assert!(aspect.orb > aspect.orb_limit);
            } else {
                assert!(aspect.orb <= aspect.orb_limit);
            }
        }
    }
}

#[test]
fn test_nodes_optional() {
    let orbs = OrbTable::default();
    let calculator = AspectCalculator::new(&orbs);
    let points = vec![planet("Venus", 10.0, 1.0), node("North Node", 12.0)];
    assert_eq!(calculator.compute(&points, &settings(OrbStrictness::Standard)).len(), 1);
    let without = AspectSettings {
        strictness: OrbStrictness::Standard,
        include_nodes: false,
    };
    assert!(calculator.compute(&points, &without).is_empty());
}

#[test]
fn test_minor_aspects_detected() {
    let orbs = OrbTable::default();
    let calculator = AspectCalculator::new(&orbs);
    let points = vec![planet("Venus", 0.0, 1.0), planet("Saturn", 151.0, 0.03)];
    let aspects = calculator.compute(&points, &settings(OrbStrictness::Standard));
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, AspectType::Quincunx);
    assert!(aspects[0].aspect_type.is_minor());
}

#[test]
fn test_declination_aspects() {
    let points = vec![
        planet_dec("Sun", 10.0, 12.0),
        planet_dec("Mars", 200.0, 12.6),
        planet_dec("Venus", 300.0, -12.05),
    ];
    let aspects = declination_aspects(&points, true);
    assert!(aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::Parallel && a.connects("Sun", "Mars")));
    assert!(aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::ContraParallel && a.connects("Sun", "Venus")));
    // |12.6 - 12.05| is outside the contra-parallel tolerance
    assert!(!aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::ContraParallel && a.connects("Mars", "Venus")));
    assert!(aspects.iter().all(|a| a.orb_limit == 1.0));
}

#[test]
fn test_sidereal_aspects_by_sign() {
    let points = vec![
        planet("Sun", 1.0, 1.0),
        planet("Moon", 29.0, 13.0),
        planet("Mars", 185.0, 0.5),
        planet("Jupiter", 35.0, 0.1),
    ];
    let aspects = sidereal_aspects(&points, true);
    assert!(aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::Conjunction && a.connects("Sun", "Moon")));
    assert!(aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::Opposition && a.connects("Sun", "Mars")));
    assert!(aspects
        .iter()
        .any(|a| a.aspect_type == AspectType::Opposition && a.connects("Moon", "Mars")));
    // Jupiter in Taurus makes neither
    assert!(!aspects.iter().any(|a| a.involves("Jupiter")));
}
