use color_eyre::Result;
use ulid::Ulid;

use super::models::{QuizResultModel, SelectionModel};
use super::Db;
use crate::scoring::{Outcome, Selection, SkinTrait};

impl Db {
    /// Store a scored quiz with every selected answer atomically.
    /// Returns the public token (ULID) of the stored result.
    pub async fn save_result(&self, outcome: &Outcome, selections: &[Selection]) -> Result<String> {
        let token = Ulid::new().to_string();
        let scores = &outcome.scores;
        let mut tx = self.pool.begin().await?;

        let result_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO quiz_results
                (token, code, dry, oily, sensitive, insensitive, pigmented, non_pigmented, wrinkled, tight)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING id
            "#,
        )
        .bind(&token)
        .bind(outcome.code.to_string())
        .bind(scores.get(SkinTrait::Dry))
        .bind(scores.get(SkinTrait::Oily))
        .bind(scores.get(SkinTrait::Sensitive))
        .bind(scores.get(SkinTrait::Insensitive))
        .bind(scores.get(SkinTrait::Pigmented))
        .bind(scores.get(SkinTrait::NonPigmented))
        .bind(scores.get(SkinTrait::Wrinkled))
        .bind(scores.get(SkinTrait::Tight))
        .fetch_one(&mut *tx)
        .await?;

        for selection in selections {
            for &answer_idx in &selection.answers {
                sqlx::query(
                    "INSERT INTO result_selections (result_id, question_id, answer_idx) VALUES (?1, ?2, ?3)",
                )
                .bind(result_id)
                .bind(i64::from(selection.question_id))
                .bind(answer_idx as i64)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!("quiz result stored with id: {result_id}, code: {}", outcome.code);
        Ok(token)
    }

    pub async fn get_result(&self, token: &str) -> Result<Option<QuizResultModel>> {
        let result = sqlx::query_as::<_, QuizResultModel>(
            r#"
            SELECT id, token, code, dry, oily, sensitive, insensitive,
                   pigmented, non_pigmented, wrinkled, tight, created_at
            FROM quiz_results
            WHERE token = ?1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Selections of a stored result, grouped per question in answer order.
    pub async fn get_selections(&self, result_id: i64) -> Result<Vec<Selection>> {
        let rows = sqlx::query_as::<_, SelectionModel>(
            "SELECT question_id, answer_idx FROM result_selections WHERE result_id = ?1 ORDER BY id",
        )
        .bind(result_id)
        .fetch_all(&self.pool)
        .await?;

        let mut selections: Vec<Selection> = Vec::new();
        for row in rows {
            let question_id = u32::try_from(row.question_id)?;
            let answer_idx = usize::try_from(row.answer_idx)?;
            match selections.iter_mut().find(|s| s.question_id == question_id) {
                Some(selection) => selection.answers.push(answer_idx),
                None => selections.push(Selection::new(question_id, vec![answer_idx])),
            }
        }

        Ok(selections)
    }

    /// Returns whether a result was removed.
    pub async fn delete_result(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM quiz_results WHERE token = ?1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        tracing::info!("deleted quiz result {token}: {}", result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}
