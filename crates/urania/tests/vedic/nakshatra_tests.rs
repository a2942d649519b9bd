use urania::ephemeris::Body;
use urania::vedic::{nakshatra_for_longitude, nakshatra_label};

#[test]
fn test_rohini_lorded_by_moon() {
    let placement = nakshatra_for_longitude(46.0);
    assert_eq!(placement.nakshatra.name, "Rohini");
    assert_eq!(placement.nakshatra.lord, Body::Moon);
    assert_eq!(placement.pada, 2);
}

#[test]
fn test_wraps_negative_longitude() {
    assert_eq!(nakshatra_for_longitude(-1.0).nakshatra.name, "Revati");
    assert_eq!(nakshatra_for_longitude(360.0).nakshatra.name, "Ashwini");
}

#[test]
fn test_labels() {
    assert_eq!(nakshatra_label(0.0), "Ashwini 1");
    assert_eq!(nakshatra_label(359.0), "Revati 4");
}

#[test]
fn test_progress_in_range() {
    for step in 0..720 {
        let placement = nakshatra_for_longitude(step as f64 * 0.5);
        assert!((0.0..1.0).contains(&placement.progress));
        assert!((1..=4).contains(&placement.pada));
    }
}
