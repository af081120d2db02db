//! Route definitions for the administrator authoring surface.
//!
//! ```text
//! GET    /tracks                            list_all_tracks
//! POST   /tracks                            create_track
//! PUT    /tracks/{id}                       update_track
//! DELETE /tracks/{id}                       delete_track
//! GET    /tracks/{id}/content-items         list_track_items
//! POST   /content-items                     create_content_item
//! PUT    /content-items/{id}                update_content_item
//! DELETE /content-items/{id}                delete_content_item
//! PUT    /content-items/{id}/questions      replace_questions
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::authoring;
use crate::state::AppState;

/// Authoring routes, mounted at `/admin`. Every handler enforces the
/// admin role itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tracks",
            get(authoring::list_all_tracks).post(authoring::create_track),
        )
        .route(
            "/tracks/{id}",
            put(authoring::update_track).delete(authoring::delete_track),
        )
        .route(
            "/tracks/{id}/content-items",
            get(authoring::list_track_items),
        )
        .route("/content-items", post(authoring::create_content_item))
        .route(
            "/content-items/{id}",
            put(authoring::update_content_item).delete(authoring::delete_content_item),
        )
        .route(
            "/content-items/{id}/questions",
            put(authoring::replace_questions),
        )
}
