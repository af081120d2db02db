//! HTTP handler functions, one module per resource.

pub mod answers;
pub mod authoring;
pub mod content_items;
pub mod health;
pub mod tracks;
