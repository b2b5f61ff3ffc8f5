#![forbid(unsafe_code)]

//! # oejts
//!
//! Scoring for four-dimension (MBTI-style) typologies built from bipolar
//! Likert questions, after the Open Extended Jungian Type Scales.
//!
//! Answers go in as a map of question ID to a 1-5 value; out come dimension
//! scores, a four-letter type code, pole percentages, and quality diagnostics
//! (per-dimension confidence, a clarity index, and adjacent-answer
//! consistency checks). One engine serves every variant: the full 32-question
//! test, the 8-question quick test, single-dimension tests, and the 16-question
//! feline bank. All numeric ranges derive from the per-dimension question
//! count `k`.
//!
//! Scoring never fails. Unanswered questions count as neutral (3), foreign IDs
//! are ignored, and out-of-range values are scored as given; rejecting them is
//! the job of whatever captures the answers ([`Answers::validate`]).

pub mod confidence;
pub mod consistency;
pub mod error;
pub mod questions;
pub mod report;
pub mod scoring;
pub mod types;
pub mod variant;

pub use confidence::{confidence_label, confidence_level, ConfidenceLevel, ConfidenceTiers};
pub use consistency::{DimensionConsistency, FlaggedPair, TestConsistency, DIVERGENCE_THRESHOLD};
pub use error::{AnswerError, ConfigError};
pub use questions::{Locale, LocalizedText, QuestionBank, QuestionPair};
pub use report::{build_report, render_report_markdown, ReportOptions, TypeReport};
pub use scoring::{
    is_complete, Assessment, DimensionResult, PercentSplit, PolePercentages, Scorer, TestResult,
    TypeCode,
};
pub use types::{
    Answers, Dimension, DimensionMap, DimensionScores, PolePair, PoleTable, QuestionId,
    NEUTRAL_ANSWER,
};
pub use variant::{load_variant_from_path, variant_from_spec, Scope, VariantConfig, VariantSpec};
