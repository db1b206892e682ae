//! Skin-type scoring: answers add weighted points to eight traits, and each of
//! the four dimension-pairs is reduced to the letter of its stronger trait.

mod code;
mod dimension;

use std::collections::{BTreeMap, BTreeSet};

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

pub use code::{CodeParseError, SkinTypeCode};
pub use dimension::{Dimension, SkinTrait};

use crate::models::{Question, SelectionMode};

/// Answers picked for one question, as indices into its answer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub question_id: u32,
    #[serde(default)]
    pub answers: Vec<usize>,
}

impl Selection {
    pub fn new(question_id: u32, answers: Vec<usize>) -> Self {
        Self {
            question_id,
            answers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("unknown question id {0}")]
    UnknownQuestion(u32),
    #[error("question {question_id} has no answer at index {answer}")]
    UnknownAnswer { question_id: u32, answer: usize },
    #[error("question {0} accepts a single answer")]
    TooManyAnswers(u32),
    #[error("question {0} is answered more than once")]
    DuplicateQuestion(u32),
}

/// Running per-trait totals. Starts at zero for every trait.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitScores([f64; 8]);

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, t: SkinTrait) -> f64 {
        self.0[t.index()]
    }

    pub fn add(&mut self, points: &BTreeMap<SkinTrait, f64>) {
        for (t, weight) in points {
            self.0[t.index()] += weight;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkinTrait, f64)> + '_ {
        SkinTrait::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// Stronger trait of the pair; the primary trait wins a tie.
    pub fn winner(&self, dimension: Dimension) -> SkinTrait {
        let (primary, secondary) = dimension.pair();
        if self.get(secondary) > self.get(primary) {
            secondary
        } else {
            primary
        }
    }

    pub fn code(&self) -> SkinTypeCode {
        let mut traits = [SkinTrait::Dry; 4];
        for dimension in Dimension::ALL {
            traits[dimension.position()] = self.winner(dimension);
        }
        // winner() only ever returns a member of the dimension's own pair.
        SkinTypeCode(traits)
    }

    pub fn breakdown(&self) -> Vec<DimensionScore> {
        Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let (primary, secondary) = dimension.pair();
                DimensionScore {
                    dimension,
                    primary,
                    primary_score: self.get(primary),
                    secondary,
                    secondary_score: self.get(secondary),
                    winner: self.winner(dimension),
                }
            })
            .collect()
    }
}

impl FromIterator<(SkinTrait, f64)> for TraitScores {
    fn from_iter<I: IntoIterator<Item = (SkinTrait, f64)>>(iter: I) -> Self {
        let mut scores = TraitScores::new();
        for (t, value) in iter {
            scores.0[t.index()] = value;
        }
        scores
    }
}

impl Serialize for TraitScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SkinTrait::ALL.len()))?;
        for (t, value) in self.iter() {
            map.serialize_entry(&t, &value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub primary: SkinTrait,
    pub primary_score: f64,
    pub secondary: SkinTrait,
    pub secondary_score: f64,
    pub winner: SkinTrait,
}

/// Result of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub code: SkinTypeCode,
    pub scores: TraitScores,
}

/// Sum the points of every selected answer. Each question may appear at most once.
pub fn tally(questions: &[Question], selections: &[Selection]) -> Result<TraitScores, ScoreError> {
    let mut scores = TraitScores::new();
    let mut seen = BTreeSet::new();

    for selection in selections {
        if !seen.insert(selection.question_id) {
            return Err(ScoreError::DuplicateQuestion(selection.question_id));
        }

        let question = questions
            .iter()
            .find(|q| q.id == selection.question_id)
            .ok_or(ScoreError::UnknownQuestion(selection.question_id))?;

        if question.mode == SelectionMode::Single && selection.answers.len() > 1 {
            return Err(ScoreError::TooManyAnswers(question.id));
        }

        for &idx in &selection.answers {
            let answer = question.answers.get(idx).ok_or(ScoreError::UnknownAnswer {
                question_id: question.id,
                answer: idx,
            })?;
            scores.add(&answer.points);
        }
    }

    Ok(scores)
}

pub fn score(questions: &[Question], selections: &[Selection]) -> Result<Outcome, ScoreError> {
    let scores = tally(questions, selections)?;
    tracing::debug!(
        selections = selections.len(),
        code = %scores.code(),
        "quiz scored"
    );
    Ok(Outcome {
        code: scores.code(),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn answer(text: &str, points: &[(SkinTrait, f64)]) -> Answer {
        Answer {
            text: text.to_string(),
            points: points.iter().copied().collect(),
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: 1,
                prompt: "Oil?".to_string(),
                mode: SelectionMode::Single,
                answers: vec![
                    answer("Dry", &[(SkinTrait::Dry, 1.0)]),
                    answer("Oily", &[(SkinTrait::Oily, 1.0)]),
                    answer("Bit oily", &[(SkinTrait::Oily, 0.5)]),
                ],
            },
            Question {
                id: 3,
                prompt: "Shine by noon?".to_string(),
                mode: SelectionMode::Single,
                answers: vec![
                    answer("Yes", &[(SkinTrait::Oily, 1.0)]),
                    answer("No", &[(SkinTrait::Dry, 0.5)]),
                ],
            },
            Question {
                id: 2,
                prompt: "Reactions?".to_string(),
                mode: SelectionMode::Multiple,
                answers: vec![
                    answer("Stinging", &[(SkinTrait::Sensitive, 1.0)]),
                    answer("Flushing", &[(SkinTrait::Sensitive, 0.5)]),
                    answer("None", &[(SkinTrait::Insensitive, 1.0)]),
                ],
            },
        ]
    }

    #[test]
    fn empty_selection_ties_everything_to_primary_traits() {
        let outcome = score(&questions(), &[]).unwrap();
        assert_eq!(outcome.code.to_string(), "DSPW");
        assert!(outcome.scores.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn multiple_answers_accumulate() {
        let scores = tally(
            &questions(),
            &[Selection::new(1, vec![2]), Selection::new(2, vec![0, 1])],
        )
        .unwrap();
        assert_eq!(scores.get(SkinTrait::Oily), 0.5);
        assert_eq!(scores.get(SkinTrait::Sensitive), 1.5);
        assert_eq!(scores.code().to_string(), "OSPW");
    }

    #[test]
    fn repeated_selection_counts_twice() {
        let scores = tally(&questions(), &[Selection::new(2, vec![2, 2])]).unwrap();
        assert_eq!(scores.get(SkinTrait::Insensitive), 2.0);
    }

    #[test]
    fn tie_goes_to_primary_trait() {
        let scores = tally(
            &questions(),
            &[Selection::new(1, vec![0]), Selection::new(3, vec![0])],
        )
        .unwrap();
        assert_eq!(scores.get(SkinTrait::Dry), 1.0);
        assert_eq!(scores.get(SkinTrait::Dry), scores.get(SkinTrait::Oily));
        assert_eq!(scores.winner(Dimension::Hydration), SkinTrait::Dry);
        assert_eq!(scores.code().to_string().chars().next(), Some('D'));
    }

    #[test]
    fn unknown_question_is_rejected() {
        assert_eq!(
            tally(&questions(), &[Selection::new(9, vec![0])]),
            Err(ScoreError::UnknownQuestion(9))
        );
    }

    #[test]
    fn unknown_answer_is_rejected() {
        assert_eq!(
            tally(&questions(), &[Selection::new(1, vec![3])]),
            Err(ScoreError::UnknownAnswer {
                question_id: 1,
                answer: 3
            })
        );
    }

    #[test]
    fn single_choice_rejects_two_answers() {
        assert_eq!(
            tally(&questions(), &[Selection::new(1, vec![0, 1])]),
            Err(ScoreError::TooManyAnswers(1))
        );
    }

    #[test]
    fn single_choice_rejects_split_entries() {
        assert_eq!(
            tally(
                &questions(),
                &[Selection::new(1, vec![0]), Selection::new(1, vec![1])],
            ),
            Err(ScoreError::DuplicateQuestion(1))
        );
    }

    #[test]
    fn multiple_choice_rejects_split_entries() {
        assert_eq!(
            tally(
                &questions(),
                &[Selection::new(2, vec![0]), Selection::new(2, vec![1])],
            ),
            Err(ScoreError::DuplicateQuestion(2))
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let selections = [Selection::new(1, vec![1]), Selection::new(2, vec![2])];
        let first = score(&questions(), &selections).unwrap();
        let second = score(&questions(), &selections).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.code.to_string(), "OIPW");
    }

    #[test]
    fn breakdown_reports_both_sides() {
        let scores = tally(&questions(), &[Selection::new(1, vec![1])]).unwrap();
        let hydration = &scores.breakdown()[0];
        assert_eq!(hydration.dimension, Dimension::Hydration);
        assert_eq!(hydration.primary_score, 0.0);
        assert_eq!(hydration.secondary_score, 1.0);
        assert_eq!(hydration.winner, SkinTrait::Oily);
    }

    #[test]
    fn scores_serialize_as_trait_map() {
        let scores: TraitScores = [(SkinTrait::Tight, 1.5)].into_iter().collect();
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["Tight"], 1.5);
        assert_eq!(json["Dry"], 0.0);
    }
}
