//! Handlers for the end-user track surface.
//!
//! Tracks are presented through the visibility filter: summaries cover
//! only tracks with at least one published item, and details list only
//! published items, with the effective start resolved the same way in
//! both places.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use cicluz_core::error::CoreError;
use cicluz_core::types::DbId;
use cicluz_db::models::track::TrackDetail;
use cicluz_db::repositories::{ContentItemRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /tracks
// ---------------------------------------------------------------------------

/// List published track summaries.
///
/// Each summary carries the published-item count and the resolved start
/// item; tracks with zero published items are omitted entirely.
pub async fn list_tracks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summaries = TrackRepo::list_summaries(&state.pool).await?;

    tracing::debug!(count = summaries.len(), "Listed track summaries");

    Ok(Json(DataResponse { data: summaries }))
}

// ---------------------------------------------------------------------------
// GET /tracks/{id}
// ---------------------------------------------------------------------------

/// Get one track with its ordered published items and effective start.
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;

    let items = ContentItemRepo::list_published_by_track(&state.pool, id).await?;
    let effective_start_id =
        TrackRepo::effective_start_id(&state.pool, id, track.start_content_id).await?;

    Ok(Json(DataResponse {
        data: TrackDetail {
            track,
            effective_start_id,
            items,
        },
    }))
}
