use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
    Quintile,
    Parallel,
    ContraParallel,
}

impl AspectType {
    /// Angle-based aspects, majors first.
    pub const GEOMETRIC: [AspectType; 7] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
        AspectType::Quincunx,
        AspectType::Quintile,
    ];

    /// Exact separation for angle-based aspects.
    pub fn exact_angle(self) -> Option<f64> {
        match self {
            AspectType::Conjunction => Some(0.0),
            AspectType::Sextile => Some(60.0),
            AspectType::Square => Some(90.0),
            AspectType::Trine => Some(120.0),
            AspectType::Opposition => Some(180.0),
            AspectType::Quincunx => Some(150.0),
            AspectType::Quintile => Some(72.0),
            AspectType::Parallel | AspectType::ContraParallel => None,
        }
    }

    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectType::Conjunction
                | AspectType::Sextile
                | AspectType::Square
                | AspectType::Trine
                | AspectType::Opposition
        )
    }

    pub fn is_minor(self) -> bool {
        matches!(self, AspectType::Quincunx | AspectType::Quintile)
    }

    pub fn is_declination(self) -> bool {
        matches!(self, AspectType::Parallel | AspectType::ContraParallel)
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
            AspectType::Quincunx => "Quincunx",
            AspectType::Quintile => "Quintile",
            AspectType::Parallel => "Parallel",
            AspectType::ContraParallel => "Contra-Parallel",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two named points.
///
/// The pair is unordered; `first` and `second` keep the order the points
/// were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: String,
    pub second: String,
    pub aspect_type: AspectType,
    /// Deviation from exact, always ≥ 0
    pub orb: f64,
    /// Limit the orb was judged against
    pub orb_limit: f64,
    pub applying: bool,
    /// In range of the wide tier only, and still forming
    pub ghost: bool,
}

impl Aspect {
    pub fn involves(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The other participant, if `name` is one of them.
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Aspect {
        Aspect {
            first: "Sun".to_string(),
            second: "Moon".to_string(),
            aspect_type: AspectType::Trine,
            orb: 1.5,
            orb_limit: 9.0,
            applying: true,
            ghost: false,
        }
    }

    #[test]
    fn test_exact_angles() {
        assert_eq!(AspectType::Quintile.exact_angle(), Some(72.0));
        assert_eq!(AspectType::Quincunx.exact_angle(), Some(150.0));
        assert_eq!(AspectType::Parallel.exact_angle(), None);
    }

    #[test]
    fn test_pair_helpers() {
        let aspect = sample();
        assert!(aspect.involves("Moon"));
        assert_eq!(aspect.other("Sun"), Some("Moon"));
        assert_eq!(aspect.other("Mars"), None);
        assert!(aspect.connects("Moon", "Sun"));
    }

    #[test]
    fn test_serialized_type_names() {
        let json = serde_json::to_value(AspectType::ContraParallel).unwrap();
        assert_eq!(json, "contra_parallel");
        assert_eq!(AspectType::ContraParallel.to_string(), "Contra-Parallel");
    }
}
