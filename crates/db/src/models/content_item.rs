//! Content-item models and DTOs.
//!
//! The row keeps `item_type`/`status` as their text representation and
//! `payload` as the stored jsonb document. Typed access goes through
//! `cicluz_core::content`: create/update DTOs carry the [`ItemType`] /
//! [`ItemStatus`] / [`Payload`] sum types, validated before any insert.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::content::{ItemStatus, ItemType, Payload};
use cicluz_core::types::{DbId, Timestamp};

use crate::models::question::QuestionWithOptions;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `content_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContentItem {
    pub id: DbId,
    /// `None` for standalone items reachable only by direct link.
    pub track_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub item_type: String,
    pub status: String,
    pub payload: serde_json::Value,
    /// Item-level default next step; soft reference.
    pub next_content_id: Option<DbId>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

/// Input for creating a new content item.
#[derive(Debug, Deserialize)]
pub struct CreateContentItem {
    pub track_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub item_type: ItemType,
    /// Defaults to draft when omitted.
    pub status: Option<ItemStatus>,
    pub payload: Payload,
    pub next_content_id: Option<DbId>,
    pub display_order: Option<i32>,
}

/// Input for updating an existing content item (all fields optional).
///
/// When `payload` is supplied its variant must match `item_type` (or the
/// stored type when `item_type` is absent); the handler validates this
/// before the repository runs.
#[derive(Debug, Deserialize)]
pub struct UpdateContentItem {
    pub track_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<ItemType>,
    pub status: Option<ItemStatus>,
    pub payload: Option<Payload>,
    pub next_content_id: Option<DbId>,
    pub display_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A content item together with its ordered questions and options.
#[derive(Debug, Serialize)]
pub struct ContentItemDetail {
    #[serde(flatten)]
    pub item: ContentItem,
    pub questions: Vec<QuestionWithOptions>,
}
