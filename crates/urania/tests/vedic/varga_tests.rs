use urania::position::{CelestialPoint, MovingPoint, Placement};
use urania::vedic::{navamsa_chart, navamsa_longitude};
use urania::zodiac::Sign;

fn planet(name: &str, lon: f64, house: u8) -> CelestialPoint {
    CelestialPoint::Planet(MovingPoint::new(Placement::new(name, lon, 0.0, house), 1.0))
}

#[test]
fn test_navamsa_sign_sequence() {
    // fire signs start from Aries, earth from Capricorn, air from Libra, water from Cancer
    assert_eq!(Sign::from_longitude(navamsa_longitude(120.1)), Sign::Aries);
    assert_eq!(Sign::from_longitude(navamsa_longitude(150.1)), Sign::Capricorn);
    assert_eq!(Sign::from_longitude(navamsa_longitude(180.1)), Sign::Libra);
    assert_eq!(Sign::from_longitude(navamsa_longitude(90.1)), Sign::Cancer);
    // last navamsa of Pisces is Pisces
    assert_eq!(Sign::from_longitude(navamsa_longitude(359.9)), Sign::Pisces);
}

#[test]
fn test_houses_recomputed_from_d9_ascendant() {
    // D1 house 1 for both, but the D9 places them apart
    let points = vec![planet("Sun", 100.0, 1), planet("Moon", 112.0, 1)];
    let chart = navamsa_chart(&points, 95.0);
    let sun = &chart.placements[0];
    let moon = &chart.placements[1];
    assert_ne!(sun.house, moon.house);
    assert_eq!(chart.ascendant.sign, Sign::from_longitude(navamsa_longitude(95.0)));
}

#[test]
fn test_only_bodies_included() {
    let points = vec![
        planet("Sun", 10.0, 1),
        CelestialPoint::Angle(Placement::new("Ascendant", 5.0, 0.0, 1)),
    ];
    let chart = navamsa_chart(&points, 5.0);
    assert_eq!(chart.placements.len(), 1);
}
