//! Route definitions for the end-user track surface.
//!
//! ```text
//! GET /                                   list_tracks
//! GET /{id}                               get_track
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Track routes, mounted at `/tracks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list_tracks))
        .route("/{id}", get(tracks::get_track))
}
