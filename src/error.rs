//! Error types for variant configuration and answer validation.
//!
//! Scoring itself is infallible; these errors only surface when loading a
//! variant definition or when a caller asks for answers to be checked.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Dimension, QuestionId};

/// Problems with a variant definition (built-in or loaded from JSON).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read variant config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse variant config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown dimension: {0:?}")]
    UnknownDimension(String),

    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    #[error("unknown variant: {0:?}")]
    UnknownVariant(String),

    #[error("dimension {dimension} has no questions")]
    EmptyDimension { dimension: Dimension },

    #[error("dimension {dimension} has {found} questions, expected {expected}")]
    UnequalCardinality {
        dimension: Dimension,
        expected: usize,
        found: usize,
    },

    #[error("question {id} is mapped more than once")]
    DuplicateQuestion { id: QuestionId },

    #[error("question ids must cover 1..={total}; missing {missing:?}")]
    IdSpaceGap {
        total: usize,
        missing: Vec<QuestionId>,
    },

    #[error("invalid confidence tiers: need strong >= moderate >= slight >= 1 (got {strong}/{moderate}/{slight})")]
    InvalidTiers {
        strong: u32,
        moderate: u32,
        slight: u32,
    },

    #[error("divergence threshold must be >= 1")]
    InvalidDivergence,

    #[error("pole letters must be eight distinct letters (problem at {dimension})")]
    InvalidPoles { dimension: Dimension },
}

/// Answer-map problems the capturing layer is expected to reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("answer to question {question_id} is {value}, expected 1..=5")]
    OutOfRange { question_id: QuestionId, value: i32 },

    #[error("question {question_id} is not part of this variant")]
    UnknownQuestion { question_id: QuestionId },
}
