//! Handlers for fetching content items with their questions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use cicluz_core::error::CoreError;
use cicluz_core::types::DbId;
use cicluz_db::models::content_item::{ContentItem, ContentItemDetail};
use cicluz_db::repositories::{ContentItemRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an item through the visibility filter.
///
/// Drafts are served to administrators only; everyone else gets the same
/// "not found" outcome as for a missing row, so draft existence never
/// leaks.
pub async fn find_visible(
    pool: &PgPool,
    id: DbId,
    include_drafts: bool,
) -> AppResult<ContentItem> {
    let item = if include_drafts {
        ContentItemRepo::find_by_id(pool, id).await?
    } else {
        ContentItemRepo::find_published(pool, id).await?
    };
    item.ok_or(AppError::Core(CoreError::NotFound {
        entity: "ContentItem",
        id,
    }))
}

/// Load an item's questions and assemble the detail response.
pub async fn load_detail(pool: &PgPool, item: ContentItem) -> AppResult<ContentItemDetail> {
    let questions = QuestionRepo::list_for_item(pool, item.id).await?;
    Ok(ContentItemDetail { item, questions })
}

// ---------------------------------------------------------------------------
// GET /content-items/{id}
// ---------------------------------------------------------------------------

/// Get one content item with its ordered questions and options.
pub async fn get_content_item(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let include_drafts = auth.map(|u| u.is_admin()).unwrap_or(false);
    let item = find_visible(&state.pool, id, include_drafts).await?;
    let detail = load_detail(&state.pool, item).await?;

    Ok(Json(DataResponse { data: detail }))
}
