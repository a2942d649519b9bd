//! Parallels and contra-parallels of declination.

use crate::aspects::calculator::participants;
use crate::aspects::orbs::DECLINATION_ORB;
use crate::aspects::types::{Aspect, AspectType};
use crate::position::CelestialPoint;

const PARALLEL_THRESHOLD: f64 = 1.0;
const CONTRA_PARALLEL_THRESHOLD: f64 = 0.1;

/// Declination aspects between every pair of moving points.
pub fn declination_aspects(points: &[CelestialPoint], include_nodes: bool) -> Vec<Aspect> {
    let bodies = participants(points, include_nodes);
    let mut aspects = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = (bodies[i], bodies[j]);
            let (d1, d2) = (a.declination(), b.declination());

            let parallel_orb = (d1 - d2).abs();
            if parallel_orb < PARALLEL_THRESHOLD {
                aspects.push(declination_aspect(a, b, AspectType::Parallel, parallel_orb));
            }

            let opposite_sides = (d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0);
            let contra_orb = (d1.abs() - d2.abs()).abs();
            if opposite_sides && contra_orb < CONTRA_PARALLEL_THRESHOLD {
                aspects.push(declination_aspect(
                    a,
                    b,
                    AspectType::ContraParallel,
                    contra_orb,
                ));
            }
        }
    }
    aspects
}

fn declination_aspect(
    first: &CelestialPoint,
    second: &CelestialPoint,
    aspect_type: AspectType,
    orb: f64,
) -> Aspect {
    Aspect {
        first: first.name().to_string(),
        second: second.name().to_string(),
        aspect_type,
        orb,
        orb_limit: DECLINATION_ORB,
        applying: false,
        ghost: false,
    }
}
