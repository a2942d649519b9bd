//! Total angle arithmetic on the ecliptic circle.
//!
//! Every function here accepts any finite input (negative values, 360, multiples
//! of 360) and returns a value in the documented range.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Signed shortest arc from `from` to `to`, in (-180, 180].
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Forward arc from `a` to `b`, in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_degrees(b - a)
}

/// Midpoint on the shorter arc between two longitudes.
pub fn shorter_arc_midpoint(lon1: f64, lon2: f64) -> f64 {
    normalize_degrees(lon1 + signed_delta(lon1, lon2) / 2.0)
}

/// Declination of an ecliptic point from its longitude and latitude.
pub fn ecliptic_to_declination(longitude: f64, latitude: f64, obliquity: f64) -> f64 {
    let (lambda, beta, eps) = (
        longitude.to_radians(),
        latitude.to_radians(),
        obliquity.to_radians(),
    );
    let sin_dec = beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin();
    sin_dec.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Right ascension of an ecliptic point, in [0, 360).
pub fn ecliptic_to_right_ascension(longitude: f64, latitude: f64, obliquity: f64) -> f64 {
    let (lambda, beta, eps) = (
        longitude.to_radians(),
        latitude.to_radians(),
        obliquity.to_radians(),
    );
    let y = lambda.sin() * eps.cos() - beta.tan() * eps.sin();
    let x = lambda.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Ecliptic longitude of an equatorial position, in [0, 360).
pub fn equatorial_to_longitude(right_ascension: f64, declination: f64, obliquity: f64) -> f64 {
    let (alpha, delta, eps) = (
        right_ascension.to_radians(),
        declination.to_radians(),
        obliquity.to_radians(),
    );
    let y = alpha.sin() * eps.cos() + delta.tan() * eps.sin();
    let x = alpha.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}
