//! Repository for the `questions` and `options` tables.
//!
//! Questions and options are edited as one unit: the whole set for an
//! item is deleted and reinserted inside a single transaction, matching
//! the authoring surface's full-replace semantics.

use sqlx::PgPool;

use cicluz_core::types::DbId;

use crate::models::answer_option::AnswerOption;
use crate::models::question::{CreateQuestion, Question, QuestionWithOptions};

/// Column list for question queries.
const Q_COLUMNS: &str =
    "id, content_item_id, prompt, question_type, display_order, required, created_at";

/// Column list for option queries.
const O_COLUMNS: &str = "id, question_id, label, value, next_content_id, display_order";

/// Provides question/option lookups and the transactional full-replace.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Find a question by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {Q_COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question only if it belongs to the given content item.
    ///
    /// Used by the answer route to validate the item/question pairing
    /// before anything is persisted.
    pub async fn find_for_item(
        pool: &PgPool,
        question_id: DbId,
        content_item_id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query =
            format!("SELECT {Q_COLUMNS} FROM questions WHERE id = $1 AND content_item_id = $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(question_id)
            .bind(content_item_id)
            .fetch_optional(pool)
            .await
    }

    /// List an item's questions in presentation order, each with its
    /// ordered options.
    pub async fn list_for_item(
        pool: &PgPool,
        content_item_id: DbId,
    ) -> Result<Vec<QuestionWithOptions>, sqlx::Error> {
        let query = format!(
            "SELECT {Q_COLUMNS} FROM questions
             WHERE content_item_id = $1
             ORDER BY display_order, id"
        );
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(content_item_id)
            .fetch_all(pool)
            .await?;

        let mut result = Vec::with_capacity(questions.len());
        for question in questions {
            let options = Self::options_for_question(pool, question.id).await?;
            result.push(QuestionWithOptions { question, options });
        }
        Ok(result)
    }

    /// List a question's options in presentation order.
    pub async fn options_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<AnswerOption>, sqlx::Error> {
        let query = format!(
            "SELECT {O_COLUMNS} FROM options
             WHERE question_id = $1
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, AnswerOption>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an item's entire question/option set.
    ///
    /// Deletes all existing questions (options cascade) and reinserts
    /// the submitted set in one transaction; any failure rolls the whole
    /// edit back. Display orders default to list position.
    pub async fn replace_for_item(
        pool: &PgPool,
        content_item_id: DbId,
        inputs: &[CreateQuestion],
    ) -> Result<Vec<QuestionWithOptions>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM questions WHERE content_item_id = $1")
            .bind(content_item_id)
            .execute(&mut *tx)
            .await?;

        let mut result = Vec::with_capacity(inputs.len());
        for (qi, input) in inputs.iter().enumerate() {
            let insert_q = format!(
                "INSERT INTO questions
                    (content_item_id, prompt, question_type, display_order, required)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING {Q_COLUMNS}"
            );
            let question = sqlx::query_as::<_, Question>(&insert_q)
                .bind(content_item_id)
                .bind(&input.prompt)
                .bind(input.question_type.as_deref().unwrap_or("multiple_choice"))
                .bind(input.display_order.unwrap_or(qi as i32))
                .bind(input.required.unwrap_or(true))
                .fetch_one(&mut *tx)
                .await?;

            let mut options = Vec::with_capacity(input.options.len());
            for (oi, opt) in input.options.iter().enumerate() {
                let insert_o = format!(
                    "INSERT INTO options
                        (question_id, label, value, next_content_id, display_order)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {O_COLUMNS}"
                );
                let option = sqlx::query_as::<_, AnswerOption>(&insert_o)
                    .bind(question.id)
                    .bind(&opt.label)
                    .bind(&opt.value)
                    .bind(opt.next_content_id)
                    .bind(opt.display_order.unwrap_or(oi as i32))
                    .fetch_one(&mut *tx)
                    .await?;
                options.push(option);
            }

            result.push(QuestionWithOptions { question, options });
        }

        tx.commit().await?;

        tracing::debug!(
            content_item_id,
            question_count = result.len(),
            "Replaced question set for content item"
        );

        Ok(result)
    }
}
