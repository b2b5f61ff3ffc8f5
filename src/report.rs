//! Report generation for a scored answer set.

use serde::Serialize;

use crate::confidence::{confidence_label, ConfidenceLevel};
use crate::consistency::FlaggedPair;
use crate::scoring::{Scorer, TypeCode};
use crate::types::{Answers, Dimension, DimensionScores};

#[derive(Debug, Clone, Serialize)]
pub struct ReportOptions {
    /// Echo the raw answers into the report.
    pub include_answers: bool,
    /// List individual contradictory pairs, not just the per-dimension verdict.
    pub include_flagged_pairs: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_answers: false,
            include_flagged_pairs: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub variant: String,
    /// blake3 over the answers in ascending ID order.
    pub answers_hash: String,
    pub answered: usize,
    pub expected: usize,
    pub complete: bool,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub scores: DimensionScores,
    pub clarity_index: i64,
    pub overall_consistent: bool,
    pub warnings: Vec<String>,
    pub dimensions: Vec<ReportDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Answers>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDimension {
    pub dimension: Dimension,
    pub score: i64,
    pub preference: char,
    pub left_pole: char,
    pub right_pole: char,
    pub left_percent: i64,
    pub right_percent: i64,
    pub confidence: ConfidenceLevel,
    pub confidence_percent: i64,
    pub label: String,
    pub consistent: bool,
    pub variance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_pairs: Option<Vec<FlaggedPair>>,
}

pub fn build_report(scorer: &Scorer, answers: &Answers, opts: &ReportOptions) -> TypeReport {
    let config = scorer.config();
    let assessment = scorer.assess(answers);

    let dimensions: Vec<ReportDimension> = config
        .dimensions()
        .into_iter()
        .map(|d| {
            let score = assessment.result.scores[d];
            let split = assessment.result.percentages.split(d);
            let poles = config.poles[d];
            let preference = scorer.preference(score, d);
            let confidence = assessment.confidence.dimensions[d];
            let consistency = &assessment.consistency.dimensions[d];
            ReportDimension {
                dimension: d,
                score,
                preference,
                left_pole: poles.left,
                right_pole: poles.right,
                left_percent: split.left,
                right_percent: split.right,
                confidence: confidence.level,
                confidence_percent: confidence.percentage,
                label: confidence_label(confidence.level, preference),
                consistent: consistency.is_consistent,
                variance: consistency.variance,
                flagged_pairs: opts
                    .include_flagged_pairs
                    .then(|| consistency.flagged_pairs.clone()),
            }
        })
        .collect();

    TypeReport {
        variant: assessment.variant,
        answers_hash: hash_answers(answers),
        answered: answers.len(),
        expected: config.total_questions(),
        complete: assessment.complete,
        type_code: assessment.result.type_code,
        scores: assessment.result.scores,
        clarity_index: assessment.confidence.clarity_index,
        overall_consistent: assessment.consistency.overall_consistent,
        warnings: assessment.consistency.warnings,
        dimensions,
        answers: opts.include_answers.then(|| answers.clone()),
    }
}

pub fn render_report_markdown(report: &TypeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Type Report: {}\n\n", report.type_code));
    out.push_str(&format!("- Variant: {}\n", report.variant));
    out.push_str(&format!("- Answers hash: `{}`\n", report.answers_hash));
    out.push_str(&format!(
        "- Answered: {}/{}{}\n",
        report.answered,
        report.expected,
        if report.complete { "" } else { " (incomplete)" }
    ));
    out.push_str(&format!("- Clarity index: {}\n", report.clarity_index));
    out.push_str(&format!(
        "- Consistent: {}\n",
        if report.overall_consistent { "yes" } else { "no" }
    ));

    out.push_str("\n## Dimensions\n\n");
    out.push_str("| Dimension | Score | Preference | Split | Confidence | Consistent |\n");
    out.push_str("|---|---|---|---|---|---|\n");
    for d in &report.dimensions {
        out.push_str(&format!(
            "| {} | {} | {} | {} {}% / {} {}% | {} ({}%) | {} |\n",
            d.dimension,
            d.score,
            d.preference,
            d.left_pole,
            d.left_percent,
            d.right_pole,
            d.right_percent,
            d.label,
            d.confidence_percent,
            if d.consistent { "yes" } else { "no" }
        ));
    }

    if !report.warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for warning in &report.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }

    let flagged: Vec<&ReportDimension> = report
        .dimensions
        .iter()
        .filter(|d| d.flagged_pairs.as_ref().is_some_and(|p| !p.is_empty()))
        .collect();
    if !flagged.is_empty() {
        out.push_str("\n## Contradictory Pairs\n\n");
        for d in flagged {
            for pair in d.flagged_pairs.iter().flatten() {
                out.push_str(&format!(
                    "- {}: Q{} = {} vs Q{} = {} (diff {})\n",
                    d.dimension,
                    pair.first,
                    pair.first_answer,
                    pair.second,
                    pair.second_answer,
                    pair.difference
                ));
            }
        }
    }

    out
}

/// Each answer contributes its ID and value as little-endian bytes, so the
/// fingerprint depends only on the map's contents.
fn hash_answers(answers: &Answers) -> String {
    let mut hasher = blake3::Hasher::new();
    for (id, value) in answers.iter() {
        hasher.update(&id.to_le_bytes());
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating_ei(scorer: &Scorer) -> Answers {
        let mut answers: Answers = (1..=32).map(|id| (id, 2)).collect();
        for (i, id) in scorer.config().questions.ei.iter().enumerate() {
            answers.insert(*id, if i % 2 == 0 { 1 } else { 5 });
        }
        answers
    }

    #[test]
    fn report_covers_every_dimension_of_the_variant() {
        let scorer = Scorer::full();
        let report = build_report(&scorer, &alternating_ei(&scorer), &ReportOptions::default());
        assert_eq!(report.dimensions.len(), 4);
        assert_eq!(report.answered, 32);
        assert!(report.complete);
        assert!(!report.overall_consistent);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.dimensions[0].flagged_pairs.as_ref().map(Vec::len), Some(7));
        assert!(report.answers.is_none());
    }

    #[test]
    fn single_dimension_report_lists_only_that_dimension() {
        let scorer = Scorer::dimension(Dimension::TF);
        let answers: Answers = scorer.config().questions.tf.iter().map(|id| (*id, 5)).collect();
        let report = build_report(&scorer, &answers, &ReportOptions::default());
        assert_eq!(report.dimensions.len(), 1);
        let tf = &report.dimensions[0];
        assert_eq!((tf.score, tf.preference), (40, 'T'));
        assert_eq!(tf.label, "Strong T preference");
        assert_eq!(report.expected, 8);
        assert!(report.complete);
    }

    #[test]
    fn hash_is_stable_and_order_independent() {
        let a: Answers = [(1, 3), (2, 4)].into_iter().collect();
        let b: Answers = [(2, 4), (1, 3)].into_iter().collect();
        assert_eq!(hash_answers(&a), hash_answers(&b));
        assert_ne!(hash_answers(&a), hash_answers(&Answers::new()));
        assert_eq!(hash_answers(&a).len(), 64);
    }

    #[test]
    fn hash_tracks_every_id_and_value() {
        let base: Answers = [(1, 3), (2, 4)].into_iter().collect();
        let changed_value: Answers = [(1, 3), (2, 5)].into_iter().collect();
        let changed_id: Answers = [(1, 3), (3, 4)].into_iter().collect();
        let extreme: Answers = [(1, i32::MIN), (2, i32::MAX)].into_iter().collect();
        let hashes = [
            hash_answers(&base),
            hash_answers(&changed_value),
            hash_answers(&changed_id),
            hash_answers(&extreme),
        ];
        for (i, a) in hashes.iter().enumerate() {
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn markdown_mentions_type_warnings_and_pairs() {
        let scorer = Scorer::full();
        let report = build_report(&scorer, &alternating_ei(&scorer), &ReportOptions::default());
        let md = render_report_markdown(&report);
        assert!(md.starts_with(&format!("# Type Report: {}", report.type_code)));
        assert!(md.contains("## Warnings"));
        assert!(md.contains("- EI: Q3 = 1 vs Q7 = 5 (diff 4)"));
    }

    #[test]
    fn options_toggle_optional_sections() {
        let scorer = Scorer::quick();
        let answers: Answers = [(3, 1)].into_iter().collect();
        let opts = ReportOptions {
            include_answers: true,
            include_flagged_pairs: false,
        };
        let report = build_report(&scorer, &answers, &opts);
        assert_eq!(report.answers.as_ref().and_then(|a| a.get(3)), Some(1));
        assert!(report.dimensions.iter().all(|d| d.flagged_pairs.is_none()));
        assert!(!report.complete);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["dimensions"][0].get("flagged_pairs").is_none());
    }
}
