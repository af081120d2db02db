//! Track ("trilha") models and DTOs.
//!
//! Defines the database row struct for `tracks` and the create/update/
//! response types used by the API layer. `start_content_id` is a soft
//! reference; the effective start resolved for end users may differ
//! when it is unset, dangling, or unpublished.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::types::{DbId, Timestamp};

use crate::models::content_item::ContentItem;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A track row from the `tracks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
    pub start_content_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

/// Input for creating a new track.
#[derive(Debug, Deserialize)]
pub struct CreateTrack {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub display_order: Option<i32>,
    pub start_content_id: Option<DbId>,
}

/// Input for updating an existing track (all fields optional).
#[derive(Debug, Deserialize)]
pub struct UpdateTrack {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub display_order: Option<i32>,
    pub start_content_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A track annotated with its published-item count and resolved start.
///
/// Only produced for tracks with at least one published item.
#[derive(Debug, Serialize, FromRow)]
pub struct TrackSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub track: Track,
    pub item_count: i64,
    pub effective_start_id: Option<DbId>,
}

/// A track with its ordered published items, for the detail endpoint.
#[derive(Debug, Serialize)]
pub struct TrackDetail {
    #[serde(flatten)]
    pub track: Track,
    pub effective_start_id: Option<DbId>,
    pub items: Vec<ContentItem>,
}
