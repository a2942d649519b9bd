//! Whole-sign aspects used by sidereal charts.

use crate::aspects::calculator::{is_aspect_applying, participants};
use crate::aspects::types::{Aspect, AspectType};
use crate::position::angle::angular_separation;
use crate::position::CelestialPoint;

/// Sign-based aspects span a whole sign.
pub const SIGN_ORB: f64 = 30.0;

/// Conjunction for a shared sign, Opposition for signs seven apart counting
/// inclusively.
pub fn sidereal_aspects(points: &[CelestialPoint], include_nodes: bool) -> Vec<Aspect> {
    let bodies = participants(points, include_nodes);
    let mut aspects = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = (bodies[i], bodies[j]);
            let aspect_type = match a.sign().distance_to(b.sign()) {
                0 => AspectType::Conjunction,
                6 => AspectType::Opposition,
                _ => continue,
            };
            let exact = if aspect_type == AspectType::Conjunction {
                0.0
            } else {
                180.0
            };
            let orb = (angular_separation(a.longitude(), b.longitude()) - exact).abs();
            aspects.push(Aspect {
                first: a.name().to_string(),
                second: b.name().to_string(),
                aspect_type,
                orb,
                orb_limit: SIGN_ORB,
                applying: is_aspect_applying(
                    a.longitude(),
                    b.longitude(),
                    a.speed().unwrap_or(0.0),
                    b.speed().unwrap_or(0.0),
                    exact,
                ),
                ghost: false,
            });
        }
    }
    aspects
}
