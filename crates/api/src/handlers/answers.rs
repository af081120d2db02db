//! Handler for answer submission: the Answer Recorder plus one Graph
//! Resolver step.
//!
//! Submitting an answer appends a history row and resolves the next item
//! (chosen option's override, else the item default). The resolved id is
//! gated through the visibility filter: a dangling or unpublished route
//! reports completion instead of surfacing the authoring mistake.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cicluz_core::content::{validate_answer_text, validate_required_answer};
use cicluz_core::error::CoreError;
use cicluz_core::routing::resolve_next;
use cicluz_core::types::DbId;
use cicluz_db::models::answer::{AnswerOutcome, SubmitAnswer};
use cicluz_db::repositories::{AnswerRepo, ContentItemRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::Path;
use crate::handlers::content_items::load_detail;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /content-items/{id}/questions/{question_id}/answers
// ---------------------------------------------------------------------------

/// Record an answer and resolve the next step of the walk.
///
/// Validates, before anything is persisted, that the item is visible to
/// the caller, that the question belongs to the item, and that a
/// required question received an option or non-blank text.
pub async fn submit_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((item_id, question_id)): Path<(DbId, DbId)>,
    Json(body): Json<SubmitAnswer>,
) -> AppResult<impl IntoResponse> {
    let item = super::content_items::find_visible(&state.pool, item_id, auth.is_admin()).await?;

    let question = QuestionRepo::find_for_item(&state.pool, question_id, item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        })?;

    validate_required_answer(
        question.required,
        body.option_id,
        body.answer_text.as_deref(),
    )?;
    if let Some(ref text) = body.answer_text {
        validate_answer_text(text)?;
    }

    // An option id that is not among this question's options contributes
    // no route override; the submission itself is still recorded.
    let options = QuestionRepo::options_for_question(&state.pool, question_id).await?;
    let chosen = body
        .option_id
        .and_then(|id| options.iter().find(|opt| opt.id == id))
        .map(|opt| opt.route());

    let answer = AnswerRepo::insert(&state.pool, auth.user_id, item_id, question_id, &body).await?;

    let resolved = resolve_next(chosen.as_ref(), item.next_content_id);
    let next_item = match resolved {
        Some(next_id) => match ContentItemRepo::find_published(&state.pool, next_id).await? {
            Some(next) => Some(load_detail(&state.pool, next).await?),
            // Dangling or draft route: the walk is over.
            None => None,
        },
        None => None,
    };
    let next_content_id = next_item.as_ref().map(|detail| detail.item.id);
    let completed = next_content_id.is_none();

    tracing::info!(
        user_id = auth.user_id,
        content_item_id = item_id,
        question_id,
        option_id = ?body.option_id,
        next_content_id = ?next_content_id,
        "Answer recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AnswerOutcome {
                answer,
                next_content_id,
                next_item,
                completed,
            },
        }),
    ))
}
