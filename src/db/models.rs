// Database model structs

use crate::scoring::{CodeParseError, SkinTrait, SkinTypeCode, TraitScores};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuizResultModel {
    pub id: i64,
    pub token: String,
    pub code: String,
    pub dry: f64,
    pub oily: f64,
    pub sensitive: f64,
    pub insensitive: f64,
    pub pigmented: f64,
    pub non_pigmented: f64,
    pub wrinkled: f64,
    pub tight: f64,
    pub created_at: String,
}

impl QuizResultModel {
    pub fn skin_type(&self) -> Result<SkinTypeCode, CodeParseError> {
        self.code.parse()
    }

    pub fn scores(&self) -> TraitScores {
        [
            (SkinTrait::Dry, self.dry),
            (SkinTrait::Oily, self.oily),
            (SkinTrait::Sensitive, self.sensitive),
            (SkinTrait::Insensitive, self.insensitive),
            (SkinTrait::Pigmented, self.pigmented),
            (SkinTrait::NonPigmented, self.non_pigmented),
            (SkinTrait::Wrinkled, self.wrinkled),
            (SkinTrait::Tight, self.tight),
        ]
        .into_iter()
        .collect()
    }
}

#[derive(sqlx::FromRow)]
pub struct SelectionModel {
    pub question_id: i64,
    pub answer_idx: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CodeCount {
    pub code: String,
    pub count: i64,
}
