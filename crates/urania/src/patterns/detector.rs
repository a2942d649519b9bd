//! Pattern detection over the aspect graph.
//!
//! Every rule is an exhaustive search; results are deduplicated by pattern id
//! and returned sorted by type, then id.

use std::collections::{BTreeMap, HashMap};

use crate::aspects::{Aspect, AspectType};
use crate::patterns::graph::AspectGraph;
use crate::patterns::types::{Pattern, PatternType};
use crate::position::CelestialPoint;
use crate::zodiac::{Element, Sign};

/// Minimum size of a stellium.
pub const STELLIUM_MIN: usize = 3;

pub struct PatternDetector<'a> {
    graph: AspectGraph<'a>,
    signs: HashMap<&'a str, Sign>,
    found: BTreeMap<(PatternType, String), Pattern>,
}

impl<'a> PatternDetector<'a> {
    pub fn new(points: &'a [CelestialPoint], aspects: &'a [Aspect]) -> Self {
        Self {
            graph: AspectGraph::new(aspects),
            signs: points.iter().map(|p| (p.name(), p.sign())).collect(),
            found: BTreeMap::new(),
        }
    }

    /// Run every rule.
    pub fn detect(mut self) -> Vec<Pattern> {
        self.stelliums();
        self.grand_trines_and_kites();
        self.t_squares();
        self.grand_crosses_and_mystic_rectangles();
        self.yods();
        self.pentagrams();
        self.parallel_clusters();
        self.contra_parallels();
        log::debug!("detected {} patterns", self.found.len());
        self.found.into_values().collect()
    }

    fn push(&mut self, pattern: Pattern) {
        self.found
            .entry((pattern.pattern_type, pattern.id.clone()))
            .or_insert(pattern);
    }

    fn edge(&self, a: &str, b: &str, aspect_type: AspectType) -> Option<Aspect> {
        self.graph.edge(a, b, aspect_type).cloned()
    }

    fn sign_of(&self, name: &str) -> Option<Sign> {
        self.signs.get(name).copied()
    }

    fn stelliums(&mut self) {
        for sign in Sign::ALL {
            let components = self.graph.connected_components(|a| {
                a.aspect_type == AspectType::Conjunction
                    && self.sign_of(&a.first) == Some(sign)
                    && self.sign_of(&a.second) == Some(sign)
            });
            for members in components {
                if members.len() < STELLIUM_MIN {
                    continue;
                }
                let aspects = self.edges_within(&members, AspectType::Conjunction);
                let description = format!(
                    "{} points gathered in {}: {}",
                    members.len(),
                    sign,
                    members.join(", ")
                );
                let pattern = Pattern::new(PatternType::Stellium, members, aspects, description)
                    .with_element(Some(sign.element()));
                self.push(pattern);
            }
        }
    }

    fn grand_trines_and_kites(&mut self) {
        let trines = self
            .graph
            .cycles_of_length(3, |a| a.aspect_type == AspectType::Trine);
        for trine in trines {
            let aspects = self.edges_within(&trine, AspectType::Trine);
            let element = self.shared_element(&trine);
            let description = match element {
                Some(element) => format!("{} Grand Trine: {}", element, trine.join(", ")),
                None => format!("Grand Trine: {}", trine.join(", ")),
            };
            self.push(
                Pattern::new(PatternType::GrandTrine, trine.clone(), aspects.clone(), description)
                    .with_element(element),
            );
            self.kites_on(&trine, &aspects, element);
        }
    }

    /// A fourth point opposing one trine member and sextile to the other two.
    fn kites_on(&mut self, trine: &[String], trine_aspects: &[Aspect], element: Option<Element>) {
        let candidates: Vec<String> = self
            .graph
            .node_names()
            .iter()
            .filter(|name| !trine.contains(name))
            .cloned()
            .collect();
        for tail in candidates {
            for (i, opposed) in trine.iter().enumerate() {
                let Some(opposition) = self.edge(&tail, opposed, AspectType::Opposition) else {
                    continue;
                };
                let wings: Vec<&String> = trine
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, name)| name)
                    .collect();
                let sextiles: Vec<Aspect> = wings
                    .iter()
                    .filter_map(|wing| self.edge(&tail, wing, AspectType::Sextile))
                    .collect();
                if sextiles.len() < 2 {
                    continue;
                }
                let mut aspects = trine_aspects.to_vec();
                aspects.push(opposition);
                aspects.extend(sextiles);
                let mut participants = trine.to_vec();
                participants.push(tail.clone());
                let description = format!(
                    "Kite on the Grand Trine {}, tail {} opposite {}",
                    trine.join(", "),
                    tail,
                    opposed
                );
                self.push(
                    Pattern::new(PatternType::Kite, participants, aspects, description)
                        .with_element(element),
                );
            }
        }
    }

    fn t_squares(&mut self) {
        let oppositions: Vec<Aspect> = self
            .graph
            .edges(|a| a.aspect_type == AspectType::Opposition)
            .into_iter()
            .cloned()
            .collect();
        for opposition in oppositions {
            let (a, b) = (&opposition.first, &opposition.second);
            let apexes: Vec<String> = self
                .graph
                .neighbors(a, |e| e.aspect_type == AspectType::Square)
                .into_iter()
                .filter(|c| *c != b.as_str())
                .map(str::to_string)
                .collect();
            for apex in apexes {
                let (Some(sq_a), Some(sq_b)) = (
                    self.edge(&apex, a, AspectType::Square),
                    self.edge(&apex, b, AspectType::Square),
                ) else {
                    continue;
                };
                let description =
                    format!("T-Square: {} opposite {}, apex {}", a, b, apex);
                self.push(Pattern::new(
                    PatternType::TSquare,
                    vec![a.clone(), b.clone(), apex.clone()],
                    vec![opposition.clone(), sq_a, sq_b],
                    description,
                ));
            }
        }
    }

    fn grand_crosses_and_mystic_rectangles(&mut self) {
        let oppositions: Vec<Aspect> = self
            .graph
            .edges(|a| a.aspect_type == AspectType::Opposition)
            .into_iter()
            .cloned()
            .collect();
        for i in 0..oppositions.len() {
            for j in (i + 1)..oppositions.len() {
                let (first, second) = (&oppositions[i], &oppositions[j]);
                let shares_point = first.involves(&second.first) || first.involves(&second.second);
                if shares_point {
                    continue;
                }
                let pairs = [
                    (&first.first, &second.first),
                    (&first.first, &second.second),
                    (&first.second, &second.first),
                    (&first.second, &second.second),
                ];
                let participants = vec![
                    first.first.clone(),
                    second.first.clone(),
                    first.second.clone(),
                    second.second.clone(),
                ];

                let squares: Vec<Aspect> = pairs
                    .iter()
                    .filter_map(|(x, y)| self.edge(x, y, AspectType::Square))
                    .collect();
                if squares.len() == 4 {
                    let mut aspects = vec![first.clone(), second.clone()];
                    aspects.extend(squares);
                    let description = format!(
                        "Grand Cross: {} / {} and {} / {}",
                        first.first, first.second, second.first, second.second
                    );
                    self.push(Pattern::new(
                        PatternType::GrandCross,
                        participants.clone(),
                        aspects,
                        description,
                    ));
                    continue;
                }

                let sextiles: Vec<Aspect> = pairs
                    .iter()
                    .filter_map(|(x, y)| self.edge(x, y, AspectType::Sextile))
                    .collect();
                let trines: Vec<Aspect> = pairs
                    .iter()
                    .filter_map(|(x, y)| self.edge(x, y, AspectType::Trine))
                    .collect();
                if sextiles.len() == 2 && trines.len() == 2 {
                    let mut aspects = vec![first.clone(), second.clone()];
                    aspects.extend(sextiles);
                    aspects.extend(trines);
                    let description = format!(
                        "Mystic Rectangle: {} / {} and {} / {}",
                        first.first, first.second, second.first, second.second
                    );
                    self.push(Pattern::new(
                        PatternType::MysticRectangle,
                        participants,
                        aspects,
                        description,
                    ));
                }
            }
        }
    }

    fn yods(&mut self) {
        let sextiles: Vec<Aspect> = self
            .graph
            .edges(|a| a.aspect_type == AspectType::Sextile)
            .into_iter()
            .cloned()
            .collect();
        for base in sextiles {
            let (b, c) = (&base.first, &base.second);
            let apexes: Vec<String> = self
                .graph
                .neighbors(b, |e| e.aspect_type == AspectType::Quincunx)
                .into_iter()
                .filter(|a| *a != c.as_str())
                .map(str::to_string)
                .collect();
            for apex in apexes {
                let (Some(q_b), Some(q_c)) = (
                    self.edge(&apex, b, AspectType::Quincunx),
                    self.edge(&apex, c, AspectType::Quincunx),
                ) else {
                    continue;
                };
                let description = format!("Yod: {} and {} point to {}", b, c, apex);
                self.push(Pattern::new(
                    PatternType::Yod,
                    vec![b.clone(), c.clone(), apex.clone()],
                    vec![base.clone(), q_b, q_c],
                    description,
                ));
            }
        }
    }

    fn pentagrams(&mut self) {
        let cycles = self
            .graph
            .cycles_of_length(5, |a| a.aspect_type == AspectType::Quintile);
        for cycle in cycles {
            let aspects = self.edges_within(&cycle, AspectType::Quintile);
            let description = format!("Pentagram: {}", cycle.join(", "));
            self.push(Pattern::new(PatternType::Pentagram, cycle, aspects, description));
        }
    }

    fn parallel_clusters(&mut self) {
        let components = self
            .graph
            .connected_components(|a| a.aspect_type == AspectType::Parallel);
        for members in components {
            let aspects = self.edges_within(&members, AspectType::Parallel);
            let description = format!("Parallel of declination: {}", members.join(", "));
            self.push(Pattern::new(
                PatternType::ParallelCluster,
                members,
                aspects,
                description,
            ));
        }
    }

    fn contra_parallels(&mut self) {
        let edges: Vec<Aspect> = self
            .graph
            .edges(|a| a.aspect_type == AspectType::ContraParallel)
            .into_iter()
            .cloned()
            .collect();
        for edge in edges {
            let description = format!("{} contra-parallel {}", edge.first, edge.second);
            self.push(Pattern::new(
                PatternType::ContraParallel,
                vec![edge.first.clone(), edge.second.clone()],
                vec![edge],
                description,
            ));
        }
    }

    /// All edges of one type among a set of points.
    fn edges_within(&self, members: &[String], aspect_type: AspectType) -> Vec<Aspect> {
        let mut out = Vec::new();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                if let Some(aspect) = self.edge(&members[i], &members[j], aspect_type) {
                    out.push(aspect);
                }
            }
        }
        out
    }

    fn shared_element(&self, members: &[String]) -> Option<Element> {
        let mut elements = members
            .iter()
            .map(|name| self.sign_of(name).map(Sign::element));
        let first = elements.next()??;
        elements
            .all(|element| element == Some(first))
            .then_some(first)
    }
}

/// Convenience wrapper over [`PatternDetector`].
pub fn detect_patterns(points: &[CelestialPoint], aspects: &[Aspect]) -> Vec<Pattern> {
    PatternDetector::new(points, aspects).detect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::{AspectCalculator, AspectSettings, OrbTable};
    use crate::position::{MovingPoint, Placement};

    fn planet(name: &str, lon: f64) -> CelestialPoint {
        CelestialPoint::Planet(MovingPoint::new(Placement::new(name, lon, 0.0, 1), 0.5))
    }

    fn run(points: &[CelestialPoint]) -> Vec<Pattern> {
        let orbs = OrbTable::default();
        let aspects = AspectCalculator::new(&orbs).compute(points, &AspectSettings::default());
        detect_patterns(points, &aspects)
    }

    fn of_type(patterns: &[Pattern], pattern_type: PatternType) -> Vec<&Pattern> {
        patterns
            .iter()
            .filter(|p| p.pattern_type == pattern_type)
            .collect()
    }

    #[test]
    fn test_fire_grand_trine() {
        let points = vec![planet("Sun", 0.0), planet("Moon", 122.0), planet("Mars", 241.0)];
        let patterns = run(&points);
        let trines = of_type(&patterns, PatternType::GrandTrine);
        assert_eq!(trines.len(), 1);
        assert_eq!(trines[0].element, Some(Element::Fire));
        assert_eq!(trines[0].id, "grand_trine:Mars,Moon,Sun");
        assert_eq!(trines[0].aspects.len(), 3);
    }

    #[test]
    fn test_stellium_needs_same_sign() {
        let points = vec![
            planet("Sun", 31.0),
            planet("Mercury", 35.0),
            planet("Venus", 40.0),
            planet("Mars", 28.0),
        ];
        let patterns = run(&points);
        let stelliums = of_type(&patterns, PatternType::Stellium);
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].participants, vec!["Mercury", "Sun", "Venus"]);
    }

    #[test]
    fn test_t_square() {
        let points = vec![planet("Sun", 10.0), planet("Saturn", 190.0), planet("Mars", 100.0)];
        let patterns = run(&points);
        let t_squares = of_type(&patterns, PatternType::TSquare);
        assert_eq!(t_squares.len(), 1);
        assert_eq!(t_squares[0].aspects.len(), 3);
    }

    #[test]
    fn test_grand_cross_not_reported_as_mystic_rectangle() {
        let points = vec![
            planet("Sun", 10.0),
            planet("Moon", 100.0),
            planet("Mars", 190.0),
            planet("Saturn", 280.0),
        ];
        let patterns = run(&points);
        assert_eq!(of_type(&patterns, PatternType::GrandCross).len(), 1);
        assert!(of_type(&patterns, PatternType::MysticRectangle).is_empty());
        // each opposition carries two T-squares
        assert_eq!(of_type(&patterns, PatternType::TSquare).len(), 4);
    }

    #[test]
    fn test_mystic_rectangle() {
        let points = vec![
            planet("Sun", 0.0),
            planet("Moon", 60.0),
            planet("Mars", 180.0),
            planet("Saturn", 240.0),
        ];
        let patterns = run(&points);
        assert_eq!(of_type(&patterns, PatternType::MysticRectangle).len(), 1);
    }

    #[test]
    fn test_yod() {
        let points = vec![planet("Venus", 0.0), planet("Mars", 60.0), planet("Pluto", 210.0)];
        let patterns = run(&points);
        let yods = of_type(&patterns, PatternType::Yod);
        assert_eq!(yods.len(), 1);
        assert!(yods[0].description.contains("Pluto"));
    }

    #[test]
    fn test_kite() {
        let points = vec![
            planet("Sun", 0.0),
            planet("Moon", 120.0),
            planet("Mars", 240.0),
            planet("Saturn", 180.0),
        ];
        let patterns = run(&points);
        let kites = of_type(&patterns, PatternType::Kite);
        assert_eq!(kites.len(), 1);
        assert_eq!(kites[0].participants.len(), 4);
        assert_eq!(kites[0].element, Some(Element::Fire));
    }

    #[test]
    fn test_pentagram() {
        let points: Vec<CelestialPoint> = ["Sun", "Venus", "Mars", "Jupiter", "Saturn"]
            .iter()
            .enumerate()
            .map(|(i, name)| planet(name, i as f64 * 72.0))
            .collect();
        let patterns = run(&points);
        assert_eq!(of_type(&patterns, PatternType::Pentagram).len(), 1);
    }

    #[test]
    fn test_declination_patterns() {
        let points = vec![
            CelestialPoint::Planet(MovingPoint::new(Placement::new("Sun", 0.0, 10.0, 1), 1.0)),
            CelestialPoint::Planet(MovingPoint::new(Placement::new("Moon", 100.0, 10.5, 1), 13.0)),
            CelestialPoint::Planet(MovingPoint::new(Placement::new("Mars", 200.0, -10.45, 1), 0.5)),
        ];
        let aspects = crate::aspects::declination_aspects(&points, true);
        let patterns = detect_patterns(&points, &aspects);
        let clusters = of_type(&patterns, PatternType::ParallelCluster);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].participants, vec!["Moon", "Sun"]);
        let contra = of_type(&patterns, PatternType::ContraParallel);
        assert_eq!(contra.len(), 1);
        assert_eq!(contra[0].id, "contra_parallel:Mars,Moon");
    }

    #[test]
    fn test_detection_is_deterministic() {
        let points = vec![
            planet("Sun", 0.0),
            planet("Moon", 120.0),
            planet("Mars", 240.0),
            planet("Saturn", 180.0),
            planet("Venus", 60.0),
        ];
        let first: Vec<String> = run(&points).into_iter().map(|p| p.id).collect();
        let second: Vec<String> = run(&points).into_iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        let mut unique = first.clone();
        unique.dedup();
        assert_eq!(unique.len(), first.len());
    }
}
