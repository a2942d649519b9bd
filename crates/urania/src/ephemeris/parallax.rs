//! Diurnal parallax correction for topocentric positions.

use crate::ephemeris::types::{GeoLocation, RawPosition};
use crate::position::angle::{equatorial_to_longitude, normalize_degrees};

/// Equatorial horizontal parallax of a body at one astronomical unit, in degrees.
const SOLAR_PARALLAX_DEG: f64 = 8.794 / 3600.0;
/// Polar to equatorial radius ratio of the reference ellipsoid.
const EARTH_AXIS_RATIO: f64 = 0.99664719;

/// Shift a geocentric position to the observer's place on the Earth's surface.
///
/// `distance_au` is the geocentric distance of the body, `lst` the local
/// sidereal time in degrees.
pub fn apply_topocentric(
    geocentric: RawPosition,
    distance_au: f64,
    location: GeoLocation,
    lst: f64,
    obliquity: f64,
) -> RawPosition {
    if !(distance_au.is_finite() && distance_au > 0.0) {
        return geocentric;
    }

    let phi = location.lat.to_radians();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let rho_sin = EARTH_AXIS_RATIO * u.sin();
    let rho_cos = u.cos();

    let sin_pi = SOLAR_PARALLAX_DEG.to_radians().sin() / distance_au;
    let alpha = geocentric.right_ascension.to_radians();
    let delta = geocentric.declination.to_radians();
    let hour_angle = (lst - geocentric.right_ascension).to_radians();

    let denominator = delta.cos() - rho_cos * sin_pi * hour_angle.cos();
    let delta_alpha = (-rho_cos * sin_pi * hour_angle.sin()).atan2(denominator);
    let topo_dec = ((delta.sin() - rho_sin * sin_pi) * delta_alpha.cos()).atan2(denominator);

    let right_ascension = normalize_degrees((alpha + delta_alpha).to_degrees());
    let declination = topo_dec.to_degrees();

    RawPosition {
        ecliptic_longitude: equatorial_to_longitude(right_ascension, declination, obliquity),
        right_ascension,
        declination,
    }
}
