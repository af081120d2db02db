use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is already `Clone`, the config is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cicluz_db::DbPool,
    /// Server configuration (used by middleware and the auth extractor).
    pub config: Arc<ServerConfig>,
}
