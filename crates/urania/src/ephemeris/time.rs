//! Julian day, sidereal time and obliquity helpers.

use chrono::{DateTime, Utc};

use crate::position::angle::normalize_degrees;

/// Julian day of the Unix epoch.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;
/// Julian day of J2000.0.
pub const J2000_JD: f64 = 2451545.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Convert a UTC instant to a Julian day.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let millis = instant.timestamp_millis() as f64;
    millis / 86_400_000.0 + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees (IAU 1982).
pub fn greenwich_mean_sidereal_time(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let gmst = 280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(gmst)
}

/// Local sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(jd) + longitude)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.439291111 - 0.0130041667 * t - 1.639e-7 * t * t + 5.036e-7 * t * t * t
}
