//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Response composites used by the API layer

pub mod answer;
pub mod answer_option;
pub mod content_item;
pub mod question;
pub mod track;
pub mod user;
