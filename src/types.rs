//! Core value types shared by the registry and the scoring engine.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnswerError, ConfigError};
use crate::variant::VariantConfig;

/// Question identifiers are positive integers, unique within a bank.
pub type QuestionId = u32;

/// Lowest valid answer on the Likert scale (fully left trait).
pub const MIN_ANSWER: i32 = 1;
/// Highest valid answer on the Likert scale (fully right trait).
pub const MAX_ANSWER: i32 = 5;
/// Value substituted for any unanswered question.
pub const NEUTRAL_ANSWER: i32 = 3;

// =============================================================================
// Dimensions
// =============================================================================

/// One of the four bipolar axes, in canonical type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    EI,
    SN,
    TF,
    JP,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::EI => "EI",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EI" => Ok(Dimension::EI),
            "SN" => Ok(Dimension::SN),
            "TF" => Ok(Dimension::TF),
            "JP" => Ok(Dimension::JP),
            _ => Err(ConfigError::UnknownDimension(s.to_string())),
        }
    }
}

/// One value per dimension. Serialized with the dimension tags as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionMap<T> {
    #[serde(rename = "EI")]
    pub ei: T,
    #[serde(rename = "SN")]
    pub sn: T,
    #[serde(rename = "TF")]
    pub tf: T,
    #[serde(rename = "JP")]
    pub jp: T,
}

impl<T> DimensionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            ei: f(Dimension::EI),
            sn: f(Dimension::SN),
            tf: f(Dimension::TF),
            jp: f(Dimension::JP),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().map(move |d| (d, &self[d]))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, v)| v)
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> DimensionMap<U> {
        DimensionMap::from_fn(|d| f(d, &self[d]))
    }
}

impl<T> Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::EI => &self.ei,
            Dimension::SN => &self.sn,
            Dimension::TF => &self.tf,
            Dimension::JP => &self.jp,
        }
    }
}

impl<T> IndexMut<Dimension> for DimensionMap<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::EI => &mut self.ei,
            Dimension::SN => &mut self.sn,
            Dimension::TF => &mut self.tf,
            Dimension::JP => &mut self.jp,
        }
    }
}

/// Raw score per dimension: the sum of that dimension's answers.
pub type DimensionScores = DimensionMap<i64>;

// =============================================================================
// Poles
// =============================================================================

/// Letters for the low-score (left) and high-score (right) ends of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolePair {
    pub left: char,
    pub right: char,
}

impl PolePair {
    pub const fn new(left: char, right: char) -> Self {
        Self { left, right }
    }

    pub fn contains(self, letter: char) -> bool {
        self.left == letter || self.right == letter
    }
}

pub type PoleTable = DimensionMap<PolePair>;

pub const OEJTS_POLES: PoleTable = DimensionMap {
    ei: PolePair::new('E', 'I'),
    sn: PolePair::new('S', 'N'),
    tf: PolePair::new('F', 'T'),
    jp: PolePair::new('J', 'P'),
};

pub const FELINE_POLES: PoleTable = DimensionMap {
    ei: PolePair::new('E', 'I'),
    sn: PolePair::new('S', 'N'),
    tf: PolePair::new('T', 'F'),
    jp: PolePair::new('J', 'P'),
};

// =============================================================================
// Answers
// =============================================================================

/// Answers keyed by question ID. A missing key means "unanswered".
///
/// Values are stored as given. Range checking is the capturing layer's job
/// (see [`Answers::validate`]); the engine scores whatever it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, i32>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: i32) -> Option<i32> {
        self.0.insert(id, value)
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<i32> {
        self.0.remove(&id)
    }

    pub fn get(&self, id: QuestionId) -> Option<i32> {
        self.0.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    /// The answer for `id`, or [`NEUTRAL_ANSWER`] when unanswered. Every
    /// aggregation goes through this accessor.
    pub fn answer_or_neutral(&self, id: QuestionId) -> i32 {
        self.get(id).unwrap_or(NEUTRAL_ANSWER)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i32)> + '_ {
        self.0.iter().map(|(id, v)| (*id, *v))
    }

    /// Check that every answer is on the 1-5 scale and belongs to a question
    /// the variant scores. Reports the first violation in ID order.
    pub fn validate(&self, config: &VariantConfig) -> Result<(), AnswerError> {
        for (question_id, value) in self.iter() {
            if !config.contains(question_id) {
                return Err(AnswerError::UnknownQuestion { question_id });
            }
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
                return Err(AnswerError::OutOfRange { question_id, value });
            }
        }
        Ok(())
    }
}

impl FromIterator<(QuestionId, i32)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(QuestionId, i32)> for Answers {
    fn extend<I: IntoIterator<Item = (QuestionId, i32)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl From<BTreeMap<QuestionId, i32>> for Answers {
    fn from(map: BTreeMap<QuestionId, i32>) -> Self {
        Self(map)
    }
}
