//! Confidence diagnostics: how decisively each score leans to one pole.

use serde::{Deserialize, Serialize};

use crate::types::{Dimension, DimensionMap, DimensionScores};
use crate::variant::VariantConfig;

/// Ordered from least to most decisive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Balanced,
    Slight,
    Moderate,
    Strong,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::Balanced => "balanced",
            ConfidenceLevel::Slight => "slight",
            ConfidenceLevel::Moderate => "moderate",
            ConfidenceLevel::Strong => "strong",
        }
    }
}

/// Minimum distance from threshold for each tier (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceTiers {
    pub strong: u32,
    pub moderate: u32,
    pub slight: u32,
}

impl ConfidenceTiers {
    /// Tiers for the 8-questions-per-dimension scale (max distance 16).
    pub const FULL_SCALE: Self = Self {
        strong: 12,
        moderate: 6,
        slight: 2,
    };

    const FULL_SCALE_MAX_DISTANCE: u64 = 16;

    /// Full-scale tiers scaled to `max_distance`, rounding each boundary up.
    pub fn rescaled(max_distance: u32) -> Self {
        let scale = |tier: u32| -> u32 {
            let scaled = (u64::from(tier) * u64::from(max_distance))
                .div_ceil(Self::FULL_SCALE_MAX_DISTANCE)
                .max(1);
            u32::try_from(scaled).unwrap_or(u32::MAX)
        };
        Self {
            strong: scale(Self::FULL_SCALE.strong),
            moderate: scale(Self::FULL_SCALE.moderate),
            slight: scale(Self::FULL_SCALE.slight),
        }
    }
}

impl Default for ConfidenceTiers {
    fn default() -> Self {
        Self::FULL_SCALE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionConfidence {
    pub dimension: Dimension,
    pub level: ConfidenceLevel,
    /// `|score - threshold|`.
    pub distance: u64,
    /// Distance as a share of the maximum possible distance, 0-100 for
    /// in-range answers.
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestConfidence {
    pub dimensions: DimensionMap<DimensionConfidence>,
    /// Mean decisiveness across all four dimensions, 0 (all neutral) to 100.
    pub clarity_index: i64,
}

pub fn confidence_level(distance: u64, tiers: &ConfidenceTiers) -> ConfidenceLevel {
    if distance >= u64::from(tiers.strong) {
        ConfidenceLevel::Strong
    } else if distance >= u64::from(tiers.moderate) {
        ConfidenceLevel::Moderate
    } else if distance >= u64::from(tiers.slight) {
        ConfidenceLevel::Slight
    } else {
        ConfidenceLevel::Balanced
    }
}

/// Human-readable summary of a tier, e.g. "Strong I preference".
pub fn confidence_label(level: ConfidenceLevel, letter: char) -> String {
    match level {
        ConfidenceLevel::Strong => format!("Strong {letter} preference"),
        ConfidenceLevel::Moderate => format!("Moderate {letter} preference"),
        ConfidenceLevel::Slight => format!("Slight {letter} preference"),
        ConfidenceLevel::Balanced => "Balanced on this dimension".to_string(),
    }
}

pub fn dimension_confidence(
    config: &VariantConfig,
    score: i64,
    dimension: Dimension,
) -> DimensionConfidence {
    let distance = (score - config.threshold()).unsigned_abs();
    DimensionConfidence {
        dimension,
        level: confidence_level(distance, &config.confidence_tiers),
        distance,
        percentage: percent_of(distance, u64::from(config.max_distance())),
    }
}

pub fn test_confidence(config: &VariantConfig, scores: &DimensionScores) -> TestConfidence {
    let dimensions = scores.map(|d, score| dimension_confidence(config, *score, d));
    let total = dimensions
        .values()
        .fold(0u64, |acc, c| acc.saturating_add(c.distance));
    let max_total = u64::from(config.max_distance()) * Dimension::ALL.len() as u64;
    TestConfidence {
        dimensions,
        clarity_index: percent_of(total, max_total),
    }
}

fn percent_of(part: u64, whole: u64) -> i64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_boundaries_are_inclusive() {
        let tiers = ConfidenceTiers::FULL_SCALE;
        let cases = [
            (0, ConfidenceLevel::Balanced),
            (1, ConfidenceLevel::Balanced),
            (2, ConfidenceLevel::Slight),
            (5, ConfidenceLevel::Slight),
            (6, ConfidenceLevel::Moderate),
            (11, ConfidenceLevel::Moderate),
            (12, ConfidenceLevel::Strong),
            (16, ConfidenceLevel::Strong),
        ];
        for (distance, expected) in cases {
            assert_eq!(confidence_level(distance, &tiers), expected, "distance {distance}");
        }
    }

    #[test]
    fn rescaling_full_scale_is_identity() {
        assert_eq!(ConfidenceTiers::rescaled(16), ConfidenceTiers::FULL_SCALE);
    }

    #[test]
    fn dimension_confidence_on_full_scale() {
        let config = VariantConfig::full();

        let extreme = dimension_confidence(&config, 8, Dimension::EI);
        assert_eq!(extreme.level, ConfidenceLevel::Strong);
        assert_eq!(extreme.distance, 16);
        assert_eq!(extreme.percentage, 100);

        let neutral = dimension_confidence(&config, 24, Dimension::SN);
        assert_eq!(neutral.level, ConfidenceLevel::Balanced);
        assert_eq!((neutral.distance, neutral.percentage), (0, 0));

        let mid = dimension_confidence(&config, 32, Dimension::TF);
        assert_eq!(mid.level, ConfidenceLevel::Moderate);
        assert_eq!((mid.distance, mid.percentage), (8, 50));

        let near = dimension_confidence(&config, 27, Dimension::JP);
        assert_eq!(near.level, ConfidenceLevel::Slight);
        assert_eq!(near.distance, 3);
    }

    #[test]
    fn confidence_is_symmetric_around_threshold() {
        let config = VariantConfig::full();
        let high = dimension_confidence(&config, 36, Dimension::EI);
        let low = dimension_confidence(&config, 12, Dimension::EI);
        assert_eq!(high.level, low.level);
        assert_eq!(high.distance, low.distance);
    }

    #[test]
    fn clarity_index_spans_zero_to_hundred() {
        let config = VariantConfig::full();
        let extreme = test_confidence(&config, &DimensionMap::from_fn(|_| 8));
        assert_eq!(extreme.clarity_index, 100);

        let neutral = test_confidence(&config, &DimensionMap::from_fn(|_| 24));
        assert_eq!(neutral.clarity_index, 0);

        let mixed = DimensionMap { ei: 20, sn: 28, tf: 16, jp: 32 };
        // distances 4 + 4 + 8 + 8 = 24 of 64
        assert_eq!(test_confidence(&config, &mixed).clarity_index, 38);
    }

    #[test]
    fn per_dimension_levels_in_test_confidence() {
        let config = VariantConfig::full();
        let scores = DimensionMap { ei: 8, sn: 24, tf: 32, jp: 40 };
        let result = test_confidence(&config, &scores);
        assert_eq!(result.dimensions.ei.level, ConfidenceLevel::Strong);
        assert_eq!(result.dimensions.sn.level, ConfidenceLevel::Balanced);
        assert_eq!(result.dimensions.tf.level, ConfidenceLevel::Moderate);
        assert_eq!(result.dimensions.jp.level, ConfidenceLevel::Strong);
    }

    #[test]
    fn quick_variant_can_reach_strong_with_rescaled_tiers() {
        let config = VariantConfig::quick();
        assert_eq!(dimension_confidence(&config, 2, Dimension::EI).level, ConfidenceLevel::Strong);
        assert_eq!(dimension_confidence(&config, 8, Dimension::EI).level, ConfidenceLevel::Moderate);
        assert_eq!(dimension_confidence(&config, 7, Dimension::EI).level, ConfidenceLevel::Slight);
        assert_eq!(dimension_confidence(&config, 6, Dimension::EI).level, ConfidenceLevel::Balanced);

        // Full-scale tiers applied verbatim make `strong` unreachable.
        assert_eq!(confidence_level(4, &ConfidenceTiers::FULL_SCALE), ConfidenceLevel::Slight);
    }

    #[test]
    fn labels() {
        assert_eq!(confidence_label(ConfidenceLevel::Strong, 'I'), "Strong I preference");
        assert_eq!(confidence_label(ConfidenceLevel::Strong, 'E'), "Strong E preference");
        assert_eq!(confidence_label(ConfidenceLevel::Moderate, 'N'), "Moderate N preference");
        assert_eq!(confidence_label(ConfidenceLevel::Slight, 'T'), "Slight T preference");
        assert_eq!(
            confidence_label(ConfidenceLevel::Balanced, 'J'),
            confidence_label(ConfidenceLevel::Balanced, 'P')
        );
        assert_eq!(
            confidence_label(ConfidenceLevel::Balanced, 'J'),
            "Balanced on this dimension"
        );
    }
}
