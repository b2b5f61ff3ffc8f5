//! Question banks: bipolar trait pairs and their dimension assignment.
//!
//! The scoring engine only ever looks at a question's `id` and `dimension`;
//! trait text is carried for presentation layers.

pub mod feline;
pub mod oejts;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Dimension, DimensionMap, QuestionId};
use crate::variant::VariantConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
    Ko,
    ZhTw,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            "ja" => Ok(Locale::Ja),
            "ko" => Ok(Locale::Ko),
            "zh-tw" => Ok(Locale::ZhTw),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

/// Text with a guaranteed English rendering and optional translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zh: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko: Option<&'static str>,
    #[serde(rename = "zh-tw", skip_serializing_if = "Option::is_none")]
    pub zh_tw: Option<&'static str>,
}

impl LocalizedText {
    pub const fn english(en: &'static str) -> Self {
        Self {
            en,
            zh: None,
            ja: None,
            ko: None,
            zh_tw: None,
        }
    }

    /// Text in `locale`, falling back to English.
    pub fn get(&self, locale: Locale) -> &'static str {
        let translated = match locale {
            Locale::En => None,
            Locale::Zh => self.zh,
            Locale::Ja => self.ja,
            Locale::Ko => self.ko,
            Locale::ZhTw => self.zh_tw,
        };
        translated.unwrap_or(self.en)
    }
}

pub(crate) const fn text(
    en: &'static str,
    zh: &'static str,
    ja: &'static str,
    ko: &'static str,
    zh_tw: &'static str,
) -> LocalizedText {
    LocalizedText {
        en,
        zh: Some(zh),
        ja: Some(ja),
        ko: Some(ko),
        zh_tw: Some(zh_tw),
    }
}

/// A bipolar scale item: answer 1 leans to `left_trait`, 5 to `right_trait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionPair {
    pub id: QuestionId,
    pub dimension: Dimension,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    pub left_trait: LocalizedText,
    pub right_trait: LocalizedText,
}

/// A named, static collection of question pairs.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    name: &'static str,
    questions: &'static [QuestionPair],
}

impl QuestionBank {
    pub const fn new(name: &'static str, questions: &'static [QuestionPair]) -> Self {
        Self { name, questions }
    }

    pub fn oejts() -> Self {
        Self::new("oejts", &oejts::QUESTIONS)
    }

    pub fn feline() -> Self {
        Self::new("feline", &feline::QUESTIONS)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &'static [QuestionPair] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in presentation order (ascending ID).
    pub fn sorted(&self) -> Vec<&'static QuestionPair> {
        let mut out: Vec<&'static QuestionPair> = self.questions.iter().collect();
        out.sort_by_key(|q| q.id);
        out
    }

    pub fn by_id(&self, id: QuestionId) -> Option<&'static QuestionPair> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn dimension_of(&self, id: QuestionId) -> Option<Dimension> {
        self.by_id(id).map(|q| q.dimension)
    }

    /// Questions declared for `dimension`, in declaration order.
    pub fn for_dimension(&self, dimension: Dimension) -> Vec<&'static QuestionPair> {
        self.questions
            .iter()
            .filter(|q| q.dimension == dimension)
            .collect()
    }

    /// The listed questions in the given order. Unknown IDs are skipped.
    pub fn subset(&self, ids: &[QuestionId]) -> Vec<&'static QuestionPair> {
        ids.iter().filter_map(|id| self.by_id(*id)).collect()
    }

    /// Questions a variant administers, dimension by dimension in scoring order.
    pub fn for_variant(&self, config: &VariantConfig) -> Vec<&'static QuestionPair> {
        config
            .dimensions()
            .iter()
            .flat_map(|d| self.subset(&config.questions[*d]))
            .collect()
    }

    /// IDs grouped by each question's declared dimension, in declaration order.
    pub fn dimension_mapping(&self) -> DimensionMap<Vec<QuestionId>> {
        let mut map: DimensionMap<Vec<QuestionId>> = DimensionMap::default();
        for q in self.questions {
            map[q.dimension].push(q.id);
        }
        map
    }
}
