//! Minimal user model.
//!
//! Identity issuance lives in an external provider; this table only
//! anchors answer rows and JWT subjects. `role` is `"user"` or
//! `"admin"`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cicluz_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Input for creating a user (seeding and tests).
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub display_name: String,
    /// Defaults to `"user"`.
    pub role: Option<String>,
}
