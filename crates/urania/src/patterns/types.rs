use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aspects::Aspect;
use crate::zodiac::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Stellium,
    GrandTrine,
    TSquare,
    GrandCross,
    Yod,
    Kite,
    MysticRectangle,
    Pentagram,
    ParallelCluster,
    ContraParallel,
}

impl PatternType {
    /// Short tag used in pattern ids.
    pub fn tag(self) -> &'static str {
        match self {
            PatternType::Stellium => "stellium",
            PatternType::GrandTrine => "grand_trine",
            PatternType::TSquare => "t_square",
            PatternType::GrandCross => "grand_cross",
            PatternType::Yod => "yod",
            PatternType::Kite => "kite",
            PatternType::MysticRectangle => "mystic_rectangle",
            PatternType::Pentagram => "pentagram",
            PatternType::ParallelCluster => "parallel_cluster",
            PatternType::ContraParallel => "contra_parallel",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternType::Stellium => "Stellium",
            PatternType::GrandTrine => "Grand Trine",
            PatternType::TSquare => "T-Square",
            PatternType::GrandCross => "Grand Cross",
            PatternType::Yod => "Yod",
            PatternType::Kite => "Kite",
            PatternType::MysticRectangle => "Mystic Rectangle",
            PatternType::Pentagram => "Pentagram",
            PatternType::ParallelCluster => "Parallel Cluster",
            PatternType::ContraParallel => "Contra-Parallel",
        }
    }

    pub fn tier(self) -> PatternTier {
        match self {
            PatternType::Stellium
            | PatternType::GrandTrine
            | PatternType::TSquare
            | PatternType::GrandCross => PatternTier::Basic,
            _ => PatternTier::Expert,
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternTier {
    Basic,
    Expert,
}

/// A named configuration of several points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// `type:sorted-names`, stable across runs
    pub id: String,
    pub pattern_type: PatternType,
    pub participants: Vec<String>,
    pub aspects: Vec<Aspect>,
    /// True when any constituent aspect is a ghost
    pub ghost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    pub description: String,
    pub tier: PatternTier,
}

impl Pattern {
    pub fn new(
        pattern_type: PatternType,
        participants: Vec<String>,
        aspects: Vec<Aspect>,
        description: String,
    ) -> Self {
        let mut participants_unique = Vec::with_capacity(participants.len());
        for name in participants {
            if !participants_unique.contains(&name) {
                participants_unique.push(name);
            }
        }
        let ghost = aspects.iter().any(|a| a.ghost);
        Self {
            id: pattern_id(pattern_type, &participants_unique),
            pattern_type,
            participants: participants_unique,
            aspects,
            ghost,
            element: None,
            description,
            tier: pattern_type.tier(),
        }
    }

    pub fn with_element(mut self, element: Option<Element>) -> Self {
        self.element = element;
        self
    }
}

/// Canonical id: the type tag plus the sorted participant names.
pub fn pattern_id(pattern_type: PatternType, participants: &[String]) -> String {
    let mut names: Vec<&str> = participants.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();
    format!("{}:{}", pattern_type.tag(), names.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectType;

    #[test]
    fn test_pattern_id_is_order_independent() {
        let a = pattern_id(
            PatternType::GrandTrine,
            &["Sun".to_string(), "Moon".to_string(), "Mars".to_string()],
        );
        let b = pattern_id(
            PatternType::GrandTrine,
            &["Mars".to_string(), "Sun".to_string(), "Moon".to_string()],
        );
        assert_eq!(a, b);
        assert_eq!(a, "grand_trine:Mars,Moon,Sun");
    }

    #[test]
    fn test_ghost_inherited() {
        let aspect = Aspect {
            first: "Sun".to_string(),
            second: "Mars".to_string(),
            aspect_type: AspectType::Opposition,
            orb: 9.0,
            orb_limit: 8.0,
            applying: true,
            ghost: true,
        };
        let pattern = Pattern::new(
            PatternType::ContraParallel,
            vec!["Sun".to_string(), "Mars".to_string(), "Sun".to_string()],
            vec![aspect],
            String::new(),
        );
        assert!(pattern.ghost);
        assert_eq!(pattern.participants, vec!["Sun", "Mars"]);
        assert_eq!(pattern.tier, PatternTier::Expert);
    }
}
