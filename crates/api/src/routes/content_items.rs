//! Route definitions for content items and answer submission.
//!
//! ```text
//! GET  /{id}                                      get_content_item
//! POST /{id}/questions/{question_id}/answers      submit_answer
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answers, content_items};
use crate::state::AppState;

/// Content-item routes, mounted at `/content-items`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(content_items::get_content_item))
        .route(
            "/{id}/questions/{question_id}/answers",
            post(answers::submit_answer),
        )
}
