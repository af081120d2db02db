//! Option models and DTOs.
//!
//! An option is one selectable answer to a question. Its optional
//! `next_content_id` overrides the owning item's default next step when
//! chosen; options without one fall back to that default.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::routing::OptionRoute;
use cicluz_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `options` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnswerOption {
    pub id: DbId,
    pub question_id: DbId,
    pub label: String,
    /// Opaque value recorded alongside the choice, if any.
    pub value: Option<String>,
    /// Branch override; soft reference.
    pub next_content_id: Option<DbId>,
    pub display_order: i32,
}

impl AnswerOption {
    /// The routing-relevant slice of this option.
    pub fn route(&self) -> OptionRoute {
        OptionRoute {
            option_id: self.id,
            next_content_id: self.next_content_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// One option in a full-replace question submission.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerOption {
    pub label: String,
    pub value: Option<String>,
    pub next_content_id: Option<DbId>,
    /// Defaults to the option's position in the submitted list.
    pub display_order: Option<i32>,
}
