//! Daily motion and the mean lunar nodes.

use chrono::{DateTime, Duration, Utc};

use crate::ephemeris::time::julian_centuries;
use crate::ephemeris::{Body, EphemerisError, EphemerisProvider, Observer, RawPosition};
use crate::position::angle::{normalize_degrees, signed_delta};

/// Sampling step for finite-difference speeds.
pub const SPEED_SAMPLE_SECONDS: i64 = 60;

/// Position at `instant` plus the signed speed in degrees per day.
pub fn sample_with_speed(
    provider: &dyn EphemerisProvider,
    body: Body,
    instant: DateTime<Utc>,
    observer: &Observer,
) -> Result<(RawPosition, f64), EphemerisError> {
    let now = provider.position(body, instant, observer)?;
    let later = provider.position(
        body,
        instant + Duration::seconds(SPEED_SAMPLE_SECONDS),
        observer,
    )?;
    let speed = daily_speed(now.ecliptic_longitude, later.ecliptic_longitude);
    Ok((now, speed))
}

/// Scale a wrapped one-minute delta to degrees per day.
pub fn daily_speed(before: f64, after: f64) -> f64 {
    signed_delta(before, after) * (86_400.0 / SPEED_SAMPLE_SECONDS as f64)
}

/// Daily motion of the mean node (always retrograde).
pub const MEAN_NODE_SPEED: f64 = -1934.136261 / 36525.0;

/// Mean longitude of the ascending lunar node at a Julian day.
pub fn mean_north_node(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_degrees(
        125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0,
    )
}

/// The south node is exactly opposite the north node.
pub fn south_node_of(north: f64) -> f64 {
    normalize_degrees(north + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::J2000_JD;
    use crate::ephemeris::{GeoLocation, StaticEphemeris};
    use crate::position::angle::angular_separation;
    use chrono::TimeZone;

    #[test]
    fn test_daily_speed_wraps() {
        let speed = daily_speed(359.99, 0.01);
        assert!((speed - 0.02 * 1440.0).abs() < 1e-6);
        let retro = daily_speed(0.01, 359.99);
        assert!(retro < 0.0);
    }

    #[test]
    fn test_sample_with_speed_matches_static_motion() {
        let epoch = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let eph = StaticEphemeris::new(epoch).with_body(Body::Mercury, 100.0, -1.2);
        let observer = Observer::geocentric(GeoLocation::new(0.0, 0.0));
        let (pos, speed) = sample_with_speed(&eph, Body::Mercury, epoch, &observer).unwrap();
        assert!((pos.ecliptic_longitude - 100.0).abs() < 1e-9);
        assert!((speed + 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_mean_node_at_j2000() {
        assert!((mean_north_node(J2000_JD) - 125.04452).abs() < 1e-9);
    }

    #[test]
    fn test_nodes_are_opposite() {
        for jd in [J2000_JD, J2000_JD + 1234.5, J2000_JD - 9000.0] {
            let north = mean_north_node(jd);
            let south = south_node_of(north);
            assert!((angular_separation(north, south) - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mean_node_speed_is_retrograde() {
        assert!(MEAN_NODE_SPEED < 0.0);
        assert!((MEAN_NODE_SPEED + 0.05295).abs() < 1e-4);
    }
}
