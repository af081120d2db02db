//! Route tree for the content-graph API.

pub mod authoring;
pub mod content_items;
pub mod health;
pub mod tracks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tracks                                          list published summaries
/// /tracks/{id}                                     track detail
///
/// /content-items/{id}                              item + questions
/// /content-items/{id}/questions/{question_id}/answers   submit answer (POST)
///
/// /admin/tracks                                    list, create (admin only)
/// /admin/tracks/{id}                               update, delete
/// /admin/tracks/{id}/content-items                 list incl. drafts
/// /admin/content-items                             create
/// /admin/content-items/{id}                        update, delete
/// /admin/content-items/{id}/questions              full replace (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", tracks::router())
        .nest("/content-items", content_items::router())
        .nest("/admin", authoring::router())
}
