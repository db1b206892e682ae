use color_eyre::Result;

use super::models::CodeCount;
use super::Db;

impl Db {
    pub async fn results_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quiz_results")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// How many stored results landed on each skin type, most common first.
    pub async fn code_distribution(&self) -> Result<Vec<CodeCount>> {
        let counts = sqlx::query_as::<_, CodeCount>(
            r#"
            SELECT code, COUNT(*) AS count
            FROM quiz_results
            GROUP BY code
            ORDER BY count DESC, code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
