//! Graph Resolver: next-item routing for the branching content engine.
//!
//! Routing precedence when a question is answered:
//!
//! 1. the chosen option's `next_content_id` override,
//! 2. an override retained from an earlier question in the same item,
//! 3. the item's own default `next_content_id`,
//! 4. none -- the item is terminal.
//!
//! Overrides are recorded per answered question with last-override-wins
//! semantics: a later question's answer replaces the retained override
//! only when it carries an override itself.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// The routing-relevant slice of an option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRoute {
    pub option_id: DbId,
    pub next_content_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Single-question resolution
// ---------------------------------------------------------------------------

/// Resolve the next item after a single question is answered.
///
/// The chosen option's override takes precedence over the item default;
/// `None` for both signals a terminal item. An absent or override-less
/// option falls through to the item default.
pub fn resolve_next(chosen: Option<&OptionRoute>, item_default: Option<DbId>) -> Option<DbId> {
    chosen
        .and_then(|opt| opt.next_content_id)
        .or(item_default)
}

// ---------------------------------------------------------------------------
// Multi-question override retention
// ---------------------------------------------------------------------------

/// Branch override accumulated while walking the questions of one item.
///
/// Reset when entering a new item. Each answered question may contribute
/// an override; the most recent contribution wins, and the item default
/// applies only when no question contributed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteState {
    override_next: Option<DbId>,
}

impl RouteState {
    /// Record the route implied by one answered question.
    pub fn record(&mut self, chosen: Option<&OptionRoute>) {
        if let Some(next) = chosen.and_then(|opt| opt.next_content_id) {
            self.override_next = Some(next);
        }
    }

    /// The retained override, if any question produced one.
    pub fn override_next(&self) -> Option<DbId> {
        self.override_next
    }

    /// Resolve the item-exit route: retained override, else item default.
    pub fn exit_route(&self, item_default: Option<DbId>) -> Option<DbId> {
        self.override_next.or(item_default)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
