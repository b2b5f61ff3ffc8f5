//! Scoring engine: answers to dimension scores, type code and percentages.
//!
//! Every operation is total. Unanswered questions count as the neutral 3,
//! answers for questions outside the variant are ignored, and out-of-range
//! values are summed as given (validation belongs to whoever captures the
//! answers, see [`Answers::validate`]).

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::confidence::{self, DimensionConfidence, TestConfidence};
use crate::consistency::{self, DimensionConsistency, TestConsistency};
use crate::types::{Answers, Dimension, DimensionMap, DimensionScores, PoleTable};
use crate::variant::VariantConfig;

// ---------------------------------------------------------------------
//  Result types
// ---------------------------------------------------------------------

/// Four pole letters in canonical dimension order, e.g. `ENFP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeCode(String);

impl TypeCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TypeCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Left/right pole shares of one dimension. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PercentSplit {
    pub left: i64,
    pub right: i64,
}

/// Share per pole letter for all four dimensions.
///
/// Serializes as a flat letter-to-percent object (`{"E": 75, "I": 25, ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolePercentages {
    poles: PoleTable,
    splits: DimensionMap<PercentSplit>,
}

impl PolePercentages {
    pub fn split(&self, dimension: Dimension) -> PercentSplit {
        self.splits[dimension]
    }

    /// Percentage for a pole letter, or `None` if the letter is not in the table.
    pub fn get(&self, letter: char) -> Option<i64> {
        self.poles.iter().find_map(|(d, pair)| {
            if pair.left == letter {
                Some(self.splits[d].left)
            } else if pair.right == letter {
                Some(self.splits[d].right)
            } else {
                None
            }
        })
    }
}

impl Serialize for PolePercentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        for (d, pair) in self.poles.iter() {
            map.serialize_entry(&pair.left, &self.splits[d].left)?;
            map.serialize_entry(&pair.right, &self.splits[d].right)?;
        }
        map.end()
    }
}

/// Outcome of scoring one dimension on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionResult {
    pub dimension: Dimension,
    pub score: i64,
    pub preference: char,
    pub left_percent: i64,
    pub right_percent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub scores: DimensionScores,
    pub percentages: PolePercentages,
}

/// A result together with its quality diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub variant: String,
    pub complete: bool,
    pub result: TestResult,
    pub confidence: TestConfidence,
    pub consistency: TestConsistency,
}

// ---------------------------------------------------------------------
//  Scorer
// ---------------------------------------------------------------------

/// The scoring engine for one variant. Holds no state beyond its config.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: VariantConfig,
}

impl Scorer {
    pub fn new(config: VariantConfig) -> Self {
        Self { config }
    }

    pub fn full() -> Self {
        Self::new(VariantConfig::full())
    }

    pub fn quick() -> Self {
        Self::new(VariantConfig::quick())
    }

    pub fn dimension(dimension: Dimension) -> Self {
        Self::new(VariantConfig::dimension(dimension))
    }

    pub fn feline() -> Self {
        Self::new(VariantConfig::feline())
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Sum of a dimension's answers, neutral for anything unanswered.
    ///
    /// Summed in `i64` so that no `i32` answers can overflow the total.
    pub fn dimension_score(&self, answers: &Answers, dimension: Dimension) -> i64 {
        self.config.questions[dimension]
            .iter()
            .map(|id| i64::from(answers.answer_or_neutral(*id)))
            .sum()
    }

    pub fn scores(&self, answers: &Answers) -> DimensionScores {
        DimensionMap::from_fn(|d| self.dimension_score(answers, d))
    }

    /// Right pole strictly above the threshold, left pole otherwise (ties go left).
    pub fn preference(&self, score: i64, dimension: Dimension) -> char {
        let poles = self.config.poles[dimension];
        if score > self.config.threshold() {
            poles.right
        } else {
            poles.left
        }
    }

    pub fn classify(&self, scores: &DimensionScores) -> TypeCode {
        TypeCode(
            scores
                .iter()
                .map(|(d, score)| self.preference(*score, d))
                .collect(),
        )
    }

    /// Linear map of `[min, max]` onto 0-100 for the right pole; the left
    /// pole gets the remainder so the pair always sums to 100.
    pub fn split(&self, score: i64) -> PercentSplit {
        let min = self.config.score_min();
        let span = self.config.score_max() - min;
        let right = if span == 0 {
            0
        } else {
            ((score as f64 - min as f64) / span as f64 * 100.0).round() as i64
        };
        PercentSplit {
            left: 100 - right,
            right,
        }
    }

    pub fn percentages(&self, scores: &DimensionScores) -> PolePercentages {
        PolePercentages {
            poles: self.config.poles,
            splits: scores.map(|_, score| self.split(*score)),
        }
    }

    /// Count-only: true when the number of answers equals the variant's total,
    /// whichever IDs they belong to.
    pub fn is_complete(&self, answers: &Answers) -> bool {
        is_complete(answers, self.config.total_questions())
    }

    /// True when every question of `dimension` has an answer. Answers to
    /// other dimensions don't count.
    pub fn is_dimension_complete(&self, answers: &Answers, dimension: Dimension) -> bool {
        self.config.questions[dimension]
            .iter()
            .all(|id| answers.contains(*id))
    }

    pub fn dimension_result(&self, answers: &Answers, dimension: Dimension) -> DimensionResult {
        let score = self.dimension_score(answers, dimension);
        let split = self.split(score);
        DimensionResult {
            dimension,
            score,
            preference: self.preference(score, dimension),
            left_percent: split.left,
            right_percent: split.right,
        }
    }

    pub fn result(&self, answers: &Answers) -> TestResult {
        let scores = self.scores(answers);
        let type_code = self.classify(&scores);
        debug!(
            variant = %self.config.name,
            answered = answers.len(),
            type_code = %type_code,
            "scored answers"
        );
        TestResult {
            type_code,
            percentages: self.percentages(&scores),
            scores,
        }
    }

    pub fn dimension_confidence(&self, score: i64, dimension: Dimension) -> DimensionConfidence {
        confidence::dimension_confidence(&self.config, score, dimension)
    }

    pub fn test_confidence(&self, scores: &DimensionScores) -> TestConfidence {
        confidence::test_confidence(&self.config, scores)
    }

    pub fn dimension_consistency(
        &self,
        answers: &Answers,
        dimension: Dimension,
    ) -> DimensionConsistency {
        consistency::dimension_consistency(&self.config, answers, dimension)
    }

    pub fn test_consistency(&self, answers: &Answers) -> TestConsistency {
        consistency::test_consistency(&self.config, answers)
    }

    /// Result, confidence, consistency and completeness in one pass.
    pub fn assess(&self, answers: &Answers) -> Assessment {
        let result = self.result(answers);
        let confidence = self.test_confidence(&result.scores);
        let consistency = self.test_consistency(answers);
        Assessment {
            variant: self.config.name.clone(),
            complete: self.is_complete(answers),
            result,
            confidence,
            consistency,
        }
    }
}

/// Count-only completeness check against an explicit total.
pub fn is_complete(answers: &Answers, expected_total: usize) -> bool {
    answers.len() == expected_total
}
