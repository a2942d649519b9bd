use urania::houses::{whole_sign_house, HouseSystem, HouseTable};
use urania::position::{CelestialPoint, MovingPoint, Placement};
use urania::vedic::{identify_yogas, VedicRules, YogaIntensity};

fn chart(asc: f64, planets: &[(&str, f64)]) -> (Vec<CelestialPoint>, HouseTable) {
    let points = planets
        .iter()
        .map(|(name, lon)| {
            CelestialPoint::Planet(MovingPoint::new(
                Placement::new(*name, *lon, 0.0, whole_sign_house(asc, *lon)),
                1.0,
            ))
        })
        .collect();
    (points, HouseTable::compute(HouseSystem::WholeSign, asc, asc + 270.0))
}

#[test]
fn test_hamsa_yoga_for_exalted_jupiter_in_kendra() {
    // Aries rising, Jupiter exalted in Cancer in the 4th
    let (points, houses) = chart(5.0, &[("Jupiter", 95.0)]);
    let yogas = identify_yogas(&points, &houses, &VedicRules::default());
    let hamsa = yogas.iter().find(|y| y.name == "Hamsa Yoga").unwrap();
    assert_eq!(hamsa.intensity, YogaIntensity::Strong);
    assert_eq!(hamsa.planets, vec!["Jupiter".to_string()]);
}

#[test]
fn test_malavya_in_own_sign() {
    // Cancer rising, Venus in Libra in the 4th
    let (points, houses) = chart(95.0, &[("Venus", 190.0)]);
    let yogas = identify_yogas(&points, &houses, &VedicRules::default());
    let malavya = yogas.iter().find(|y| y.name == "Malavya Yoga").unwrap();
    assert_eq!(malavya.intensity, YogaIntensity::Moderate);
}

#[test]
fn test_gajakesari_with_debilitated_jupiter_is_mild() {
    // Moon in Cancer, Jupiter in Capricorn (7th from the Moon, debilitated)
    let (points, houses) = chart(5.0, &[("Moon", 100.0), ("Jupiter", 280.0)]);
    let yogas = identify_yogas(&points, &houses, &VedicRules::default());
    let gk = yogas.iter().find(|y| y.name == "Gajakesari Yoga").unwrap();
    assert_eq!(gk.intensity, YogaIntensity::Mild);
}

#[test]
fn test_every_yoga_is_described() {
    let (points, houses) = chart(
        5.0,
        &[
            ("Sun", 95.0),
            ("Moon", 100.0),
            ("Mercury", 110.0),
            ("Jupiter", 97.0),
            ("Venus", 305.0),
        ],
    );
    let yogas = identify_yogas(&points, &houses, &VedicRules::default());
    assert!(!yogas.is_empty());
    for yoga in &yogas {
        assert!(!yoga.description.is_empty());
        assert!(!yoga.effect.is_empty());
        assert!(!yoga.planets.is_empty());
    }
}
