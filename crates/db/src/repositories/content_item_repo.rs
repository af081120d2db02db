//! Repository for the `content_items` table.

use sqlx::PgPool;

use cicluz_core::content::{ItemStatus, Payload};
use cicluz_core::types::DbId;

use crate::models::content_item::{ContentItem, CreateContentItem, UpdateContentItem};

/// Column list for content-item queries.
const COLUMNS: &str = "id, track_id, title, description, item_type, status, \
    payload, next_content_id, display_order, created_at, updated_at";

/// Provides CRUD and visibility-aware lookups for content items.
pub struct ContentItemRepo;

impl ContentItemRepo {
    /// Insert a new content item, returning the created row.
    ///
    /// The caller validates that `input.payload` matches `input.item_type`
    /// before this runs.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContentItem,
    ) -> Result<ContentItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_items
                (track_id, title, description, item_type, status, payload,
                 next_content_id, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(input.track_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.item_type.as_str())
            .bind(input.status.unwrap_or(ItemStatus::Draft).as_str())
            .bind(sqlx::types::Json(&input.payload))
            .bind(input.next_content_id)
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find an item by its primary key, regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_items WHERE id = $1");
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published item by its primary key. Drafts and missing rows
    /// both come back as `None` -- the end-user visibility filter.
    pub async fn find_published(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM content_items WHERE id = $1 AND status = 'published'");
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the published items of a track in presentation order.
    pub async fn list_published_by_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_items
             WHERE track_id = $1 AND status = 'published'
             ORDER BY display_order, created_at, id"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// List every item of a track, drafts included (authoring view).
    pub async fn list_all_by_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_items
             WHERE track_id = $1
             ORDER BY display_order, created_at, id"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Returns the updated row, or `None` if not found.
    ///
    /// `payload`/`item_type` consistency is the caller's responsibility,
    /// validated against the stored row before this runs.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContentItem,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!(
            "UPDATE content_items SET
                track_id = COALESCE($1, track_id),
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                item_type = COALESCE($4, item_type),
                status = COALESCE($5, status),
                payload = COALESCE($6, payload),
                next_content_id = COALESCE($7, next_content_id),
                display_order = COALESCE($8, display_order),
                updated_at = NOW()
             WHERE id = $9
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(input.track_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.item_type.map(|t| t.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.payload.as_ref().map(sqlx::types::Json::<&Payload>))
            .bind(input.next_content_id)
            .bind(input.display_order)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Questions and options cascade.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
