use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::SkinTrait;

pub type Questions = Vec<Question>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Exactly one answer.
    #[default]
    Single,
    /// Any number of answers.
    Multiple,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    #[serde(default)]
    pub mode: SelectionMode,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub points: BTreeMap<SkinTrait, f64>,
}
