//! Rule tables injected into every chart computation.

use serde::{Deserialize, Serialize};

use crate::aspects::{AspectType, OrbStrictness, OrbTable};
use crate::error::RulesError;
use crate::position::stars::default_catalogue;
use crate::position::{AyanamsaModel, FixedStar};
use crate::vedic::VedicRules;
use crate::zodiac::SignRulership;

/// Immutable rule set shared by every chart computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRules {
    pub orbs: OrbTable,
    pub ayanamsa: AyanamsaModel,
    /// Western sign rulers
    pub rulers: SignRulership,
    pub vedic: VedicRules,
    /// Harmonic numbers for derived sub-charts
    pub harmonics: Vec<u32>,
    pub fixed_stars: Vec<FixedStar>,
}

lazy_static::lazy_static! {
    static ref DEFAULT_RULES: ChartRules = ChartRules {
        orbs: OrbTable::default(),
        ayanamsa: AyanamsaModel::lahiri(),
        rulers: SignRulership::traditional(),
        vedic: VedicRules::default(),
        harmonics: vec![5, 7, 9],
        fixed_stars: default_catalogue(),
    };
}

impl ChartRules {
    /// Shared default rule set, built once.
    pub fn standard() -> &'static ChartRules {
        &DEFAULT_RULES
    }

    pub fn with_ayanamsa_preset(mut self, name: &str) -> Result<Self, RulesError> {
        self.ayanamsa =
            AyanamsaModel::preset(name).ok_or_else(|| RulesError::UnknownAyanamsa(name.to_string()))?;
        Ok(self)
    }

    /// Reject negative orbs and zero harmonics.
    pub fn validate(&self) -> Result<(), RulesError> {
        for strictness in [OrbStrictness::Strict, OrbStrictness::Standard, OrbStrictness::Wide] {
            let preset = self.orbs.preset(strictness);
            for aspect in AspectType::GEOMETRIC {
                let value = preset.base_orb(aspect);
                if value < 0.0 || !value.is_finite() {
                    return Err(RulesError::NegativeOrb {
                        aspect: format!("{} ({})", aspect, strictness),
                        value,
                    });
                }
            }
            if preset.luminary_bonus < 0.0 {
                return Err(RulesError::NegativeOrb {
                    aspect: format!("luminary bonus ({})", strictness),
                    value: preset.luminary_bonus,
                });
            }
        }
        if let Some(&zero) = self.harmonics.iter().find(|&&n| n == 0) {
            return Err(RulesError::InvalidHarmonic(zero));
        }
        Ok(())
    }
}

impl Default for ChartRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ChartRules::standard().validate().is_ok());
        assert_eq!(ChartRules::default().harmonics, vec![5, 7, 9]);
        assert_eq!(ChartRules::default().fixed_stars.len(), 7);
    }

    #[test]
    fn test_negative_orb_rejected() {
        let mut rules = ChartRules::default();
        rules.orbs.preset_mut(OrbStrictness::Wide).trine = -1.0;
        assert!(matches!(rules.validate(), Err(RulesError::NegativeOrb { .. })));
    }

    #[test]
    fn test_ayanamsa_preset() {
        let rules = ChartRules::default().with_ayanamsa_preset("fagan-bradley").unwrap();
        assert_eq!(rules.ayanamsa, AyanamsaModel::fagan_bradley());
        assert!(ChartRules::default().with_ayanamsa_preset("nope").is_err());
    }
}
