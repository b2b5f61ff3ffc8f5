//! Test variants: which questions feed each dimension, and the constants
//! derived from how many there are.
//!
//! One engine serves every variant. All numeric ranges come from `k`, the
//! number of questions per dimension:
//!
//! - score range `[k, 5k]`
//! - threshold `3k` (midpoint; a score equal to it classifies to the left pole)
//! - maximum distance from threshold `2k`

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::confidence::ConfidenceTiers;
use crate::consistency::DIVERGENCE_THRESHOLD;
use crate::error::ConfigError;
use crate::questions::{feline, oejts};
use crate::types::{
    Dimension, DimensionMap, PoleTable, QuestionId, FELINE_POLES, MAX_ANSWER, MIN_ANSWER,
    OEJTS_POLES,
};

/// Which dimensions a variant administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    Single(Dimension),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantConfig {
    pub name: String,
    /// Ordered question IDs per dimension. Order matters for consistency checks.
    pub questions: DimensionMap<Vec<QuestionId>>,
    pub poles: PoleTable,
    pub confidence_tiers: ConfidenceTiers,
    /// Adjacent answers this far apart (or further) are flagged as contradictory.
    pub divergence_threshold: u32,
    pub scope: Scope,
    /// Whether the mapping owns the whole ID space `1..=N` (false for subsets
    /// of a larger bank, such as the quick test).
    pub contiguous_ids: bool,
}

impl VariantConfig {
    /// The 32-question OEJTS test.
    pub fn full() -> Self {
        Self {
            name: "full".to_string(),
            questions: oejts::dimension_questions(),
            poles: OEJTS_POLES,
            confidence_tiers: ConfidenceTiers::FULL_SCALE,
            divergence_threshold: DIVERGENCE_THRESHOLD,
            scope: Scope::All,
            contiguous_ids: true,
        }
    }

    /// Two questions per dimension, drawn from the full bank.
    ///
    /// Confidence tiers are rescaled to the smaller range; the full-scale
    /// tiers would leave `strong` unreachable (max distance here is 4). Use
    /// [`VariantConfig::quick_reference`] for the unscaled 12/6/2 tiers.
    pub fn quick() -> Self {
        let questions = oejts::quick_test_question_ids();
        let k = questions.ei.len();
        Self {
            name: "quick".to_string(),
            questions,
            poles: OEJTS_POLES,
            confidence_tiers: ConfidenceTiers::rescaled(max_distance_for(k)),
            divergence_threshold: DIVERGENCE_THRESHOLD,
            scope: Scope::All,
            contiguous_ids: false,
        }
    }

    /// The quick test with the full-scale 12/6/2 tiers applied verbatim, as
    /// the published quick scorer does. `strong` and `moderate` cannot occur.
    pub fn quick_reference() -> Self {
        Self {
            name: "quick-reference".to_string(),
            confidence_tiers: ConfidenceTiers::FULL_SCALE,
            ..Self::quick()
        }
    }

    /// A single dimension of the full test, administered on its own.
    pub fn dimension(dimension: Dimension) -> Self {
        Self {
            name: format!("dimension-{}", dimension.as_str().to_ascii_lowercase()),
            scope: Scope::Single(dimension),
            ..Self::full()
        }
    }

    /// The 16-question cat temperament test.
    pub fn feline() -> Self {
        let questions = feline::dimension_questions();
        let k = questions.ei.len();
        Self {
            name: "feline".to_string(),
            questions,
            poles: FELINE_POLES,
            confidence_tiers: ConfidenceTiers::rescaled(max_distance_for(k)),
            divergence_threshold: DIVERGENCE_THRESHOLD,
            scope: Scope::All,
            contiguous_ids: true,
        }
    }

    /// Every built-in variant, single-dimension ones included.
    pub fn builtins() -> Vec<Self> {
        let mut out = vec![Self::full(), Self::quick(), Self::feline()];
        out.extend(Dimension::ALL.into_iter().map(Self::dimension));
        out
    }

    /// Look up a built-in by name (`full`, `quick`, `feline`, `dimension-ei`, ...).
    pub fn by_name(name: &str) -> Result<Self, ConfigError> {
        let lowered = name.trim().to_ascii_lowercase();
        Self::builtins()
            .into_iter()
            .find(|v| v.name == lowered)
            .ok_or_else(|| ConfigError::UnknownVariant(name.to_string()))
    }

    /// Questions per dimension (`k`).
    pub fn per_dimension(&self) -> usize {
        self.questions[self.dimensions()[0]].len()
    }

    pub fn dimensions(&self) -> Vec<Dimension> {
        match self.scope {
            Scope::All => Dimension::ALL.to_vec(),
            Scope::Single(d) => vec![d],
        }
    }

    /// Number of answers a complete sitting of this variant contains.
    pub fn total_questions(&self) -> usize {
        self.dimensions()
            .iter()
            .map(|d| self.questions[*d].len())
            .sum()
    }

    pub fn score_min(&self) -> i64 {
        self.k() * i64::from(MIN_ANSWER)
    }

    pub fn score_max(&self) -> i64 {
        self.k() * i64::from(MAX_ANSWER)
    }

    pub fn threshold(&self) -> i64 {
        (self.score_min() + self.score_max()) / 2
    }

    /// Largest possible distance from the threshold (half the score range).
    pub fn max_distance(&self) -> u32 {
        u32::try_from((self.threshold() - self.score_min()).unsigned_abs()).unwrap_or(u32::MAX)
    }

    /// Whether `id` is administered by this variant.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.dimensions()
            .iter()
            .any(|d| self.questions[*d].contains(&id))
    }

    fn k(&self) -> i64 {
        i64::try_from(self.per_dimension()).unwrap_or(i64::from(u32::MAX))
    }

    /// Check the structural invariants every variant must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.questions.ei.len();
        let mut seen: HashSet<QuestionId> = HashSet::new();
        for (dimension, ids) in self.questions.iter() {
            if ids.is_empty() {
                return Err(ConfigError::EmptyDimension { dimension });
            }
            if ids.len() != k {
                return Err(ConfigError::UnequalCardinality {
                    dimension,
                    expected: k,
                    found: ids.len(),
                });
            }
            for id in ids {
                if !seen.insert(*id) {
                    return Err(ConfigError::DuplicateQuestion { id: *id });
                }
            }
        }

        if self.contiguous_ids {
            let total = seen.len();
            let mut missing: Vec<QuestionId> = (1..=total as QuestionId)
                .filter(|id| !seen.contains(id))
                .collect();
            missing.sort_unstable();
            if !missing.is_empty() {
                return Err(ConfigError::IdSpaceGap { total, missing });
            }
        }

        let tiers = self.confidence_tiers;
        if !(tiers.strong >= tiers.moderate && tiers.moderate >= tiers.slight && tiers.slight >= 1)
        {
            return Err(ConfigError::InvalidTiers {
                strong: tiers.strong,
                moderate: tiers.moderate,
                slight: tiers.slight,
            });
        }

        if self.divergence_threshold == 0 {
            return Err(ConfigError::InvalidDivergence);
        }

        let mut letters: HashSet<char> = HashSet::new();
        for (dimension, pair) in self.poles.iter() {
            let distinct = letters.insert(pair.left) && letters.insert(pair.right);
            if !distinct || !pair.left.is_alphabetic() || !pair.right.is_alphabetic() {
                return Err(ConfigError::InvalidPoles { dimension });
            }
        }

        Ok(())
    }
}

fn max_distance_for(k: usize) -> u32 {
    let k = u32::try_from(k).unwrap_or(u32::MAX / 4);
    k * (MAX_ANSWER - MIN_ANSWER).unsigned_abs() / 2
}

// ---------------------------------------------------------------------
//  JSON variant definitions
// ---------------------------------------------------------------------

/// On-disk form of a custom variant. Omitted fields take the full test's
/// defaults; omitted tiers are rescaled to the variant's range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: Option<String>,
    pub questions: DimensionMap<Vec<QuestionId>>,
    #[serde(default)]
    pub poles: Option<PoleTable>,
    #[serde(default)]
    pub confidence_tiers: Option<ConfidenceTiers>,
    #[serde(default)]
    pub divergence_threshold: Option<u32>,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default = "default_contiguous")]
    pub contiguous_ids: bool,
}

fn default_contiguous() -> bool {
    true
}

pub fn variant_from_spec(spec: VariantSpec) -> Result<VariantConfig, ConfigError> {
    let k = spec.questions.ei.len();
    let config = VariantConfig {
        name: spec.name.unwrap_or_else(|| "custom".to_string()),
        questions: spec.questions,
        poles: spec.poles.unwrap_or(OEJTS_POLES),
        confidence_tiers: spec
            .confidence_tiers
            .unwrap_or_else(|| ConfidenceTiers::rescaled(max_distance_for(k))),
        divergence_threshold: spec.divergence_threshold.unwrap_or(DIVERGENCE_THRESHOLD),
        scope: spec.scope.unwrap_or(Scope::All),
        contiguous_ids: spec.contiguous_ids,
    };
    config.validate()?;
    Ok(config)
}

pub fn load_variant_from_path(path: impl AsRef<Path>) -> Result<VariantConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: VariantSpec = serde_json::from_str(&raw)?;
    let config = variant_from_spec(spec)?;
    info!(
        variant = %config.name,
        per_dimension = config.per_dimension(),
        path = %path.display(),
        "loaded variant config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_pass_validation() {
        for variant in VariantConfig::builtins() {
            variant
                .validate()
                .unwrap_or_else(|e| panic!("{} invalid: {e}", variant.name));
        }
    }

    #[test]
    fn derived_ranges_follow_k() {
        let full = VariantConfig::full();
        assert_eq!(full.per_dimension(), 8);
        assert_eq!(full.total_questions(), 32);
        assert_eq!((full.score_min(), full.score_max(), full.threshold()), (8, 40, 24));
        assert_eq!(full.max_distance(), 16);

        let quick = VariantConfig::quick();
        assert_eq!(quick.per_dimension(), 2);
        assert_eq!(quick.total_questions(), 8);
        assert_eq!((quick.score_min(), quick.score_max(), quick.threshold()), (2, 10, 6));
        assert_eq!(quick.max_distance(), 4);

        let feline = VariantConfig::feline();
        assert_eq!(feline.total_questions(), 16);
        assert_eq!((feline.score_min(), feline.score_max(), feline.threshold()), (4, 20, 12));
    }

    #[test]
    fn single_dimension_variant_reuses_full_ranges() {
        let sn = VariantConfig::dimension(Dimension::SN);
        assert_eq!(sn.name, "dimension-sn");
        assert_eq!(sn.total_questions(), 8);
        assert_eq!(sn.threshold(), 24);
        assert_eq!(sn.confidence_tiers, ConfidenceTiers::FULL_SCALE);
        assert!(sn.contains(4));
        assert!(!sn.contains(3));
    }

    #[test]
    fn by_name_finds_builtins() {
        assert_eq!(VariantConfig::by_name("Quick").unwrap().name, "quick");
        assert_eq!(
            VariantConfig::by_name("dimension-jp").unwrap().scope,
            Scope::Single(Dimension::JP)
        );
        assert!(matches!(
            VariantConfig::by_name("long"),
            Err(ConfigError::UnknownVariant(_))
        ));
    }

    #[test]
    fn rescaled_tiers_per_builtin() {
        assert_eq!(
            VariantConfig::quick().confidence_tiers,
            ConfidenceTiers { strong: 3, moderate: 2, slight: 1 }
        );
        assert_eq!(
            VariantConfig::feline().confidence_tiers,
            ConfidenceTiers { strong: 6, moderate: 3, slight: 1 }
        );
    }

    #[test]
    fn quick_reference_keeps_full_scale_tiers() {
        let reference = VariantConfig::quick_reference();
        assert_eq!(reference.confidence_tiers, ConfidenceTiers::FULL_SCALE);
        assert_eq!(reference.questions, VariantConfig::quick().questions);
        assert_eq!(reference.threshold(), 6);
        reference.validate().unwrap();
        assert!(VariantConfig::builtins().iter().all(|v| v.name != reference.name));
    }

    #[test]
    fn validate_rejects_overlap_and_gaps() {
        let mut overlap = VariantConfig::full();
        overlap.questions.sn[0] = 3;
        assert!(matches!(
            overlap.validate(),
            Err(ConfigError::DuplicateQuestion { id: 3 })
        ));

        let mut uneven = VariantConfig::full();
        uneven.questions.jp.pop();
        assert!(matches!(
            uneven.validate(),
            Err(ConfigError::UnequalCardinality { dimension: Dimension::JP, .. })
        ));

        let mut gap = VariantConfig::full();
        gap.questions.ei[0] = 33;
        match gap.validate() {
            Err(ConfigError::IdSpaceGap { total, missing }) => {
                assert_eq!(total, 32);
                assert_eq!(missing, vec![3]);
            }
            other => panic!("expected gap error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_bad_tiers_and_poles() {
        let mut tiers = VariantConfig::full();
        tiers.confidence_tiers.slight = 0;
        assert!(matches!(tiers.validate(), Err(ConfigError::InvalidTiers { .. })));

        let mut poles = VariantConfig::full();
        poles.poles.jp.right = 'E';
        assert!(matches!(
            poles.validate(),
            Err(ConfigError::InvalidPoles { dimension: Dimension::JP })
        ));
    }

    #[test]
    fn variant_spec_defaults_fill_in_missing_fields() {
        let spec: VariantSpec = serde_json::from_str(
            r#"{"questions": {"EI": [1, 2], "SN": [3, 4], "TF": [5, 6], "JP": [7, 8]}}"#,
        )
        .unwrap();
        let config = variant_from_spec(spec).unwrap();
        assert_eq!(config.name, "custom");
        assert_eq!(config.poles, OEJTS_POLES);
        assert_eq!(config.threshold(), 6);
        assert_eq!(config.confidence_tiers, ConfidenceTiers::rescaled(4));
        assert_eq!(config.divergence_threshold, DIVERGENCE_THRESHOLD);
    }
}
