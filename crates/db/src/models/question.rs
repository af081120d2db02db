//! Question models and DTOs.
//!
//! Questions belong to exactly one content item and are replaced as a
//! whole set whenever an administrator edits the item's question list
//! (delete-all-then-reinsert inside one transaction).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::types::{DbId, Timestamp};

use crate::models::answer_option::{AnswerOption, CreateAnswerOption};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `questions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub content_item_id: DbId,
    pub prompt: String,
    pub question_type: String,
    pub display_order: i32,
    pub required: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// One question in a full-replace submission, with its options.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub prompt: String,
    /// Defaults to `multiple_choice` when omitted.
    pub question_type: Option<String>,
    /// Defaults to the question's position in the submitted list.
    pub display_order: Option<i32>,
    /// Defaults to true.
    pub required: Option<bool>,
    #[serde(default)]
    pub options: Vec<CreateAnswerOption>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A question with its options in presentation order.
#[derive(Debug, Serialize)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<AnswerOption>,
}
