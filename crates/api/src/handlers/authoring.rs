//! Handlers for the administrator authoring surface.
//!
//! Create/update/delete for tracks and content items, plus the
//! transactional full replace of an item's question/option set. All
//! endpoints require the `admin` role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cicluz_core::content::{
    validate_item_title, validate_option_label, validate_payload, validate_question_prompt,
    validate_track_name, ItemType,
};
use cicluz_core::error::CoreError;
use cicluz_core::types::DbId;
use cicluz_db::models::content_item::{CreateContentItem, UpdateContentItem};
use cicluz_db::models::question::CreateQuestion;
use cicluz_db::models::track::{CreateTrack, UpdateTrack};
use cicluz_db::repositories::{ContentItemRepo, QuestionRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate every question and option in a full-replace submission.
fn validate_question_set(inputs: &[CreateQuestion]) -> Result<(), CoreError> {
    for question in inputs {
        validate_question_prompt(&question.prompt)?;
        for option in &question.options {
            validate_option_label(&option.label)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /admin/tracks
// ---------------------------------------------------------------------------

/// List every track, including those without published content.
pub async fn list_all_tracks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    let tracks = TrackRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: tracks }))
}

// ---------------------------------------------------------------------------
// GET /admin/tracks/{id}/content-items
// ---------------------------------------------------------------------------

/// List every item of a track, drafts included.
pub async fn list_track_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;

    let items = ContentItemRepo::list_all_by_track(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /admin/tracks
// ---------------------------------------------------------------------------

/// Create a new track.
pub async fn create_track(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    validate_track_name(&body.name)?;

    let track = TrackRepo::create(&state.pool, &body).await?;

    tracing::info!(track_id = track.id, user_id = auth.user_id, name = %body.name, "Track created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: track })))
}

// ---------------------------------------------------------------------------
// PUT /admin/tracks/{id}
// ---------------------------------------------------------------------------

/// Update an existing track.
pub async fn update_track(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTrack>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    if let Some(ref name) = body.name {
        validate_track_name(name)?;
    }

    let track = TrackRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;

    tracing::info!(track_id = id, user_id = auth.user_id, "Track updated");

    Ok(Json(DataResponse { data: track }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/tracks/{id}
// ---------------------------------------------------------------------------

/// Delete a track. Its content items cascade away with it.
pub async fn delete_track(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    if !TrackRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }));
    }

    tracing::info!(track_id = id, user_id = auth.user_id, "Track deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /admin/content-items
// ---------------------------------------------------------------------------

/// Create a new content item.
///
/// The payload variant must match the declared item type.
pub async fn create_content_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateContentItem>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    validate_item_title(&body.title)?;
    validate_payload(body.item_type, &body.payload)?;

    let item = ContentItemRepo::create(&state.pool, &body).await?;

    tracing::info!(
        content_item_id = item.id,
        user_id = auth.user_id,
        item_type = %item.item_type,
        "Content item created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

// ---------------------------------------------------------------------------
// PUT /admin/content-items/{id}
// ---------------------------------------------------------------------------

/// Update an existing content item.
///
/// When the payload changes, its variant must match the submitted item
/// type, or the stored one when the type is not being changed.
pub async fn update_content_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateContentItem>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    if let Some(ref title) = body.title {
        validate_item_title(title)?;
    }

    let existing = ContentItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentItem",
            id,
        }))?;

    let target_type = match body.item_type {
        Some(t) => t,
        None => ItemType::parse(&existing.item_type)?,
    };
    match &body.payload {
        Some(payload) => validate_payload(target_type, payload)?,
        // Changing the type without a new payload would desynchronize
        // the stored document from the declared type.
        None => {
            if body.item_type.is_some() && target_type.as_str() != existing.item_type {
                return Err(AppError::Core(CoreError::Validation(
                    "Changing item_type requires a matching payload".to_string(),
                )));
            }
        }
    }

    let item = ContentItemRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentItem",
            id,
        }))?;

    tracing::info!(content_item_id = id, user_id = auth.user_id, "Content item updated");

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/content-items/{id}
// ---------------------------------------------------------------------------

/// Delete a content item. Questions and options cascade; answer history
/// and inbound next-item references stay behind as soft references.
pub async fn delete_content_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    if !ContentItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContentItem",
            id,
        }));
    }

    tracing::info!(content_item_id = id, user_id = auth.user_id, "Content item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PUT /admin/content-items/{id}/questions
// ---------------------------------------------------------------------------

/// Replace an item's entire question/option set transactionally.
pub async fn replace_questions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<Vec<CreateQuestion>>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    // The item must exist; drafts are fine for authoring.
    ContentItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentItem",
            id,
        }))?;

    validate_question_set(&body)?;
    for question in &body {
        if let Some(ref question_type) = question.question_type {
            if question_type.trim().is_empty() {
                return Err(AppError::Core(CoreError::Validation(
                    "question_type must not be empty".to_string(),
                )));
            }
        }
    }
    let questions = QuestionRepo::replace_for_item(&state.pool, id, &body).await?;

    tracing::info!(
        content_item_id = id,
        user_id = auth.user_id,
        question_count = questions.len(),
        "Question set replaced"
    );

    Ok(Json(DataResponse { data: questions }))
}
