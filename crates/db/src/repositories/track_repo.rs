//! Repository for the `tracks` table.

use sqlx::PgPool;

use cicluz_core::types::DbId;

use crate::models::track::{CreateTrack, Track, TrackSummary, UpdateTrack};

/// Column list for track queries.
const COLUMNS: &str = "id, name, description, category, thumbnail_url, \
    display_order, start_content_id, created_at, updated_at";

/// Provides CRUD and summary queries for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks
                (name, description, category, thumbnail_url, display_order, start_content_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.thumbnail_url)
            .bind(input.display_order.unwrap_or(0))
            .bind(input.start_content_id)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every track regardless of published content (authoring view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks
             ORDER BY display_order, created_at, id"
        );
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List end-user track summaries.
    ///
    /// Annotates each track with its published-item count and the
    /// resolved start item (explicit `start_content_id` when it names a
    /// published item, else the first published item by order). Tracks
    /// with zero published items are omitted entirely.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<TrackSummary>, sqlx::Error> {
        let query = format!(
            "SELECT t.{}, COUNT(i.id) AS item_count,
                    COALESCE(
                        (SELECT p.id FROM content_items p
                          WHERE p.id = t.start_content_id AND p.status = 'published'),
                        (SELECT p.id FROM content_items p
                          WHERE p.track_id = t.id AND p.status = 'published'
                          ORDER BY p.display_order, p.created_at, p.id
                          LIMIT 1)
                    ) AS effective_start_id
             FROM tracks t
             JOIN content_items i ON i.track_id = t.id AND i.status = 'published'
             GROUP BY t.id
             ORDER BY t.display_order, t.created_at, t.id",
            COLUMNS.replace(", ", ", t.")
        );
        sqlx::query_as::<_, TrackSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Resolve the effective start item for one track: the explicit
    /// `start_content_id` when it names a published item, else the first
    /// published item of the track by order. `None` when the track has
    /// no published content.
    pub async fn effective_start_id(
        pool: &PgPool,
        track_id: DbId,
        start_content_id: Option<DbId>,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<DbId>>(
            "SELECT COALESCE(
                 (SELECT id FROM content_items
                   WHERE id = $2 AND status = 'published'),
                 (SELECT id FROM content_items
                   WHERE track_id = $1 AND status = 'published'
                   ORDER BY display_order, created_at, id
                   LIMIT 1)
             )",
        )
        .bind(track_id)
        .bind(start_content_id)
        .fetch_one(pool)
        .await
    }

    /// Update a track. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                category = COALESCE($3, category),
                thumbnail_url = COALESCE($4, thumbnail_url),
                display_order = COALESCE($5, display_order),
                start_content_id = COALESCE($6, start_content_id),
                updated_at = NOW()
             WHERE id = $7
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.thumbnail_url)
            .bind(input.display_order)
            .bind(input.start_content_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by ID. Content items cascade at the database level.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
