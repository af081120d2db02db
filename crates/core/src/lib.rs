//! Domain types and pure logic for the CICLUZ content-graph engine.
//!
//! This crate has no database or HTTP dependencies. It holds the shared
//! id/timestamp aliases, the domain error taxonomy, content typing and
//! boundary validation, the next-item routing rules, and the session
//! walker state machine that the API layer drives.

pub mod content;
pub mod error;
pub mod routing;
pub mod types;
pub mod walker;
