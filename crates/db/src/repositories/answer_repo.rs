//! Repository for the `answers` table.
//!
//! Strictly append-only: there is no update or delete here, and no
//! uniqueness over (user, item, question). Duplicate submissions become
//! additional history rows.

use sqlx::PgPool;

use cicluz_core::types::DbId;

use crate::models::answer::{Answer, SubmitAnswer};

/// Column list for answer queries.
const COLUMNS: &str =
    "id, user_id, content_item_id, question_id, option_id, answer_text, created_at";

/// Records and reads the answer history.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Append one answer row, returning it.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        content_item_id: DbId,
        question_id: DbId,
        input: &SubmitAnswer,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers
                (user_id, content_item_id, question_id, option_id, answer_text)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(user_id)
            .bind(content_item_id)
            .bind(question_id)
            .bind(input.option_id)
            .bind(&input.answer_text)
            .fetch_one(pool)
            .await
    }

    /// List one user's answers for one content item, oldest first.
    pub async fn list_for_user_item(
        pool: &PgPool,
        user_id: DbId,
        content_item_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers
             WHERE user_id = $1 AND content_item_id = $2
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(user_id)
            .bind(content_item_id)
            .fetch_all(pool)
            .await
    }

    /// Count one user's answer rows for one question.
    pub async fn count_for_user_question(
        pool: &PgPool,
        user_id: DbId,
        question_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM answers WHERE user_id = $1 AND question_id = $2",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
