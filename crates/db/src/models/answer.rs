//! Answer models and DTOs.
//!
//! Answers are an append-only historical log: one row per submission,
//! never updated in place. The content references are soft so that
//! deleting an option or item never invalidates history.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::types::{DbId, Timestamp};

use crate::models::content_item::ContentItemDetail;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `answers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub user_id: DbId,
    pub content_item_id: DbId,
    pub question_id: DbId,
    pub option_id: Option<DbId>,
    pub answer_text: Option<String>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Request body for submitting an answer.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswer {
    pub option_id: Option<DbId>,
    pub answer_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The outcome of an answer submission: the recorded answer plus the
/// resolved next step of the walk.
///
/// `next_content_id` is `None` both for genuinely terminal items and for
/// routes that resolve to missing or unpublished content; in either case
/// `completed` is true and the client treats the track as finished.
#[derive(Debug, Serialize)]
pub struct AnswerOutcome {
    pub answer: Answer,
    pub next_content_id: Option<DbId>,
    pub next_item: Option<ContentItemDetail>,
    pub completed: bool,
}
