//! Consistency diagnostics over raw answers.
//!
//! Within a dimension, neighbouring questions (in scoring order) measure the
//! same trait, so a respondent swinging from one end of the scale to the other
//! between them is likely answering carelessly. Only adjacent pairs are
//! compared, never all pairs.

use serde::Serialize;
use tracing::debug;

use crate::types::{Answers, Dimension, DimensionMap, QuestionId};
use crate::variant::VariantConfig;

/// Default divergence on the 1-5 scale at which a pair is flagged.
pub const DIVERGENCE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlaggedPair {
    pub first: QuestionId,
    pub second: QuestionId,
    pub first_answer: i32,
    pub second_answer: i32,
    pub difference: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionConsistency {
    pub dimension: Dimension,
    pub is_consistent: bool,
    pub flagged_pairs: Vec<FlaggedPair>,
    /// Population variance of the dimension's answers. Informational only.
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestConsistency {
    pub dimensions: DimensionMap<DimensionConsistency>,
    pub overall_consistent: bool,
    pub warnings: Vec<String>,
}

pub fn dimension_consistency(
    config: &VariantConfig,
    answers: &Answers,
    dimension: Dimension,
) -> DimensionConsistency {
    let ids = &config.questions[dimension];
    let values: Vec<i32> = ids.iter().map(|id| answers.answer_or_neutral(*id)).collect();

    let flagged_pairs: Vec<FlaggedPair> = ids
        .windows(2)
        .zip(values.windows(2))
        .filter_map(|(pair, vals)| {
            let difference = vals[0].abs_diff(vals[1]);
            (difference >= config.divergence_threshold).then_some(FlaggedPair {
                first: pair[0],
                second: pair[1],
                first_answer: vals[0],
                second_answer: vals[1],
                difference,
            })
        })
        .collect();

    if !flagged_pairs.is_empty() {
        debug!(
            dimension = %dimension,
            flagged = flagged_pairs.len(),
            "contradictory adjacent answers"
        );
    }

    DimensionConsistency {
        dimension,
        is_consistent: flagged_pairs.is_empty(),
        flagged_pairs,
        variance: population_variance(&values),
    }
}

pub fn test_consistency(config: &VariantConfig, answers: &Answers) -> TestConsistency {
    let dimensions = DimensionMap::from_fn(|d| dimension_consistency(config, answers, d));
    let warnings: Vec<String> = dimensions
        .values()
        .filter(|c| !c.is_consistent)
        .map(|c| inconsistency_warning(c, config.divergence_threshold))
        .collect();
    let overall_consistent = dimensions.values().all(|c| c.is_consistent);
    TestConsistency {
        overall_consistent,
        dimensions,
        warnings,
    }
}

/// Variance dividing by `n`. Empty input has zero variance.
pub fn population_variance(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|v| f64::from(*v)).sum::<f64>() / n;
    values
        .iter()
        .map(|v| {
            let d = f64::from(*v) - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

fn inconsistency_warning(c: &DimensionConsistency, threshold: u32) -> String {
    format!(
        "{} answers look contradictory: {} adjacent pair(s) differ by {} or more",
        c.dimension,
        c.flagged_pairs.len(),
        threshold
    )
}
