use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use crate::{
    models::{Question, Questions},
    scoring::{self, CodeParseError, Outcome, ScoreError, Selection, SkinTypeCode},
};

static QUESTIONS_JSON: &str = include_str!("../data/questions.json");
static SKIN_TYPES_JSON: &str = include_str!("../data/skin_types.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Code(#[from] CodeParseError),
    #[error("the question set is empty")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(u32),
    #[error("question {0} has no answers")]
    NoAnswers(u32),
    #[error("answer {answer} of question {question_id} has a negative or non-finite weight")]
    InvalidWeight { question_id: u32, answer: usize },
    #[error("no description for skin type {0}")]
    MissingDescription(SkinTypeCode),
}

/// The question set and the description of every skin type.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Questions,
    descriptions: BTreeMap<SkinTypeCode, String>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(QUESTIONS_JSON, SKIN_TYPES_JSON)
    }

    /// Questions from `path`, built-in descriptions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let questions = std::fs::read_to_string(path)?;
        Self::from_json(&questions, SKIN_TYPES_JSON)
    }

    pub fn from_json(questions: &str, skin_types: &str) -> Result<Self, CatalogError> {
        let questions: Questions = serde_json::from_str(questions)?;
        let raw: BTreeMap<String, String> = serde_json::from_str(skin_types)?;

        let mut descriptions = BTreeMap::new();
        for (code, text) in raw {
            descriptions.insert(code.parse::<SkinTypeCode>()?, text);
        }

        let catalog = Self {
            questions,
            descriptions,
        };
        catalog.validate()?;

        tracing::info!(
            questions = catalog.questions.len(),
            skin_types = catalog.descriptions.len(),
            "quiz catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id) {
                return Err(CatalogError::DuplicateQuestion(q.id));
            }
            if q.answers.is_empty() {
                return Err(CatalogError::NoAnswers(q.id));
            }
            for (idx, answer) in q.answers.iter().enumerate() {
                if answer.points.values().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(CatalogError::InvalidWeight {
                        question_id: q.id,
                        answer: idx,
                    });
                }
            }
        }

        for code in SkinTypeCode::all() {
            match self.descriptions.get(&code) {
                Some(text) if !text.trim().is_empty() => {}
                _ => return Err(CatalogError::MissingDescription(code)),
            }
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn description(&self, code: &SkinTypeCode) -> &str {
        self.descriptions
            .get(code)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn skin_types(&self) -> impl Iterator<Item = (&SkinTypeCode, &str)> {
        self.descriptions.iter().map(|(code, text)| (code, text.as_str()))
    }

    pub fn score(&self, selections: &[Selection]) -> Result<Outcome, ScoreError> {
        scoring::score(&self.questions, selections)
    }
}
