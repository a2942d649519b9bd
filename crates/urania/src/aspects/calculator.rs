use crate::aspects::orbs::{OrbStrictness, OrbTable};
use crate::aspects::types::{Aspect, AspectType};
use crate::ephemeris::Body;
use crate::position::angle::{angular_separation, normalize_degrees};
use crate::position::CelestialPoint;

/// Settings for aspect calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectSettings {
    pub strictness: OrbStrictness,
    /// Whether the lunar nodes take part
    pub include_nodes: bool,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            strictness: OrbStrictness::Standard,
            include_nodes: true,
        }
    }
}

/// Geometric aspect calculator over an injected orb table.
pub struct AspectCalculator<'a> {
    orbs: &'a OrbTable,
}

impl<'a> AspectCalculator<'a> {
    pub fn new(orbs: &'a OrbTable) -> Self {
        Self { orbs }
    }

    /// Aspects between every unordered pair of moving points.
    ///
    /// Minor aspects are included; callers decide whether to show them.
    pub fn compute(&self, points: &[CelestialPoint], settings: &AspectSettings) -> Vec<Aspect> {
        let bodies = participants(points, settings.include_nodes);
        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if let Some(aspect) =
                    self.calculate_aspect(bodies[i], bodies[j], settings.strictness)
                {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Classify one pair, or `None` when no aspect survives the ghost policy.
    pub fn calculate_aspect(
        &self,
        first: &CelestialPoint,
        second: &CelestialPoint,
        strictness: OrbStrictness,
    ) -> Option<Aspect> {
        let separation = angular_separation(first.longitude(), second.longitude());
        let luminary = is_luminary(first.name()) || is_luminary(second.name());

        // candidates inside the widest allowed orb, closest first
        let mut candidates: Vec<(AspectType, f64, f64)> = AspectType::GEOMETRIC
            .iter()
            .filter_map(|aspect_type| {
                let exact = aspect_type.exact_angle()?;
                let orb = (separation - exact).abs();
                (orb <= self.orbs.search_limit(*aspect_type, luminary))
                    .then_some((*aspect_type, exact, orb))
            })
            .collect();
        candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut ghost = None;
        for (aspect_type, exact, orb) in candidates {
            let active_limit = self.orbs.preset(strictness).limit(aspect_type, luminary);
            let applying = is_aspect_applying(
                first.longitude(),
                second.longitude(),
                first.speed().unwrap_or(0.0),
                second.speed().unwrap_or(0.0),
                exact,
            );
            let aspect = Aspect {
                first: first.name().to_string(),
                second: second.name().to_string(),
                aspect_type,
                orb,
                orb_limit: active_limit,
                applying,
                ghost: orb > active_limit,
            };
            if !aspect.ghost {
                return Some(aspect);
            }
            // separating candidates outside the active orb are dropped
            if applying && ghost.is_none() {
                ghost = Some(aspect);
            }
        }
        ghost
    }
}

/// Planets, plus nodes when requested.
pub fn participants(points: &[CelestialPoint], include_nodes: bool) -> Vec<&CelestialPoint> {
    points
        .iter()
        .filter(|point| match point {
            CelestialPoint::Planet(_) => true,
            CelestialPoint::Node(_) => include_nodes,
            _ => false,
        })
        .collect()
}

pub fn is_luminary(name: &str) -> bool {
    Body::from_name(name).map(Body::is_luminary).unwrap_or(false)
}

/// Applying when one day of motion brings the pair closer to exact.
pub fn is_aspect_applying(lon1: f64, lon2: f64, speed1: f64, speed2: f64, exact: f64) -> bool {
    let current = (angular_separation(lon1, lon2) - exact).abs();
    let projected_sep = angular_separation(
        normalize_degrees(lon1 + speed1),
        normalize_degrees(lon2 + speed2),
    );
    (projected_sep - exact).abs() < current
}
