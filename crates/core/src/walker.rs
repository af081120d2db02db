//! Session Walker: the client-visible traversal state machine.
//!
//! A walk starts at a track's effective start item, presents each item's
//! questions in order, and exits the item along the route resolved by
//! [`crate::routing`]. Dangling or unpublished next references end the
//! walk instead of erroring, so authoring mistakes degrade to "track
//! completed" rather than surfacing drafts.
//!
//! The walker holds no durable state. Already-submitted answers are the
//! caller's concern; abandoning a walk and starting over is always safe.

use crate::routing::{OptionRoute, RouteState};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Graph views
// ---------------------------------------------------------------------------

/// One question of an item, with its options in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question_id: DbId,
    pub options: Vec<OptionRoute>,
}

/// The traversal-relevant slice of one published content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: DbId,
    pub next_content_id: Option<DbId>,
    /// Questions in ascending display order, ties by insertion order.
    pub questions: Vec<QuestionView>,
}

/// Read access to the published slice of the content graph.
///
/// Implementations must return `None` for items that do not exist or are
/// not published; the walker treats both the same way.
pub trait ContentGraph {
    fn item(&self, id: DbId) -> Option<ItemView>;
}

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// Traversal position of one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    NotStarted,
    /// The track has no reachable published start item. Distinct from
    /// `Completed`: nothing was ever presented.
    NoContent,
    /// Presenting `item_id`; `question_index` is the next question to
    /// answer (equal to the question count when only the view remains).
    AtItem { item_id: DbId, question_index: usize },
    Completed,
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Drives one user's walk through a track.
#[derive(Debug)]
pub struct Walker<'g, G: ContentGraph> {
    graph: &'g G,
    state: WalkerState,
    route: RouteState,
}

impl<'g, G: ContentGraph> Walker<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            state: WalkerState::NotStarted,
            route: RouteState::default(),
        }
    }

    pub fn state(&self) -> WalkerState {
        self.state
    }

    /// Begin a walk at the track's effective start item.
    ///
    /// `start_item` is the already-resolved start id (explicit
    /// `start_content_id` or first published item by order). `None`, or
    /// an id the graph cannot serve, leaves the walk in [`WalkerState::NoContent`].
    pub fn start(&mut self, start_item: Option<DbId>) -> WalkerState {
        self.route = RouteState::default();
        self.state = match start_item.and_then(|id| self.graph.item(id)) {
            Some(item) => WalkerState::AtItem {
                item_id: item.id,
                question_index: 0,
            },
            None => WalkerState::NoContent,
        };
        self.state
    }

    /// Advance the walk by one step.
    ///
    /// At an item with unanswered questions, `chosen_option_id` is the
    /// option picked for the current question (or `None` for a free-text
    /// or skipped-optional answer); the implied route is recorded and
    /// the walker moves to the next question or exits the item. At an
    /// item with no questions remaining the argument is ignored and the
    /// item is exited along the resolved route.
    ///
    /// Advancing from `NotStarted`, `NoContent`, or `Completed` is a
    /// no-op returning the current state.
    pub fn advance(&mut self, chosen_option_id: Option<DbId>) -> WalkerState {
        let WalkerState::AtItem {
            item_id,
            question_index,
        } = self.state
        else {
            return self.state;
        };

        // The current item vanished mid-walk (unpublished or deleted
        // since it was entered). Degrade to completion.
        let Some(item) = self.graph.item(item_id) else {
            self.state = WalkerState::Completed;
            return self.state;
        };

        if question_index < item.questions.len() {
            let chosen = chosen_option_id.and_then(|id| {
                item.questions[question_index]
                    .options
                    .iter()
                    .find(|opt| opt.option_id == id)
            });
            self.route.record(chosen);

            if question_index + 1 < item.questions.len() {
                self.state = WalkerState::AtItem {
                    item_id,
                    question_index: question_index + 1,
                };
                return self.state;
            }
        }

        self.exit_item(item.next_content_id)
    }

    /// Abandon the walk. Submitted answers persist elsewhere; the next
    /// `start` begins from the track's start item again.
    pub fn restart(&mut self) -> WalkerState {
        self.route = RouteState::default();
        self.state = WalkerState::NotStarted;
        self.state
    }

    /// Leave the current item along the resolved route, discarding the
    /// override accumulated for it.
    fn exit_item(&mut self, item_default: Option<DbId>) -> WalkerState {
        let next = self.route.exit_route(item_default);
        self.route = RouteState::default();
        self.state = match next.and_then(|id| self.graph.item(id)) {
            Some(item) => WalkerState::AtItem {
                item_id: item.id,
                question_index: 0,
            },
            // Terminal, dangling, or unpublished: the walk is complete.
            None => WalkerState::Completed,
        };
        self.state
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapGraph(BTreeMap<DbId, ItemView>);

    impl ContentGraph for MapGraph {
        fn item(&self, id: DbId) -> Option<ItemView> {
            self.0.get(&id).cloned()
        }
    }

    fn graph(items: Vec<ItemView>) -> MapGraph {
        MapGraph(items.into_iter().map(|i| (i.id, i)).collect())
    }

    fn leaf(id: DbId, next: Option<DbId>) -> ItemView {
        ItemView {
            id,
            next_content_id: next,
            questions: vec![],
        }
    }

    fn question(question_id: DbId, options: Vec<(DbId, Option<DbId>)>) -> QuestionView {
        QuestionView {
            question_id,
            options: options
                .into_iter()
                .map(|(option_id, next_content_id)| OptionRoute {
                    option_id,
                    next_content_id,
                })
                .collect(),
        }
    }

    // -- start -------------------------------------------------------------------

    #[test]
    fn start_enters_first_item() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        assert_eq!(
            walker.start(Some(1)),
            WalkerState::AtItem {
                item_id: 1,
                question_index: 0
            }
        );
    }

    #[test]
    fn start_without_published_items_is_no_content() {
        let g = graph(vec![]);
        let mut walker = Walker::new(&g);
        assert_eq!(walker.start(None), WalkerState::NoContent);
    }

    #[test]
    fn start_at_unservable_id_is_no_content() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        assert_eq!(walker.start(Some(99)), WalkerState::NoContent);
    }

    // -- questionless items --------------------------------------------------------

    #[test]
    fn terminal_item_without_questions_completes_after_one_view() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        assert_eq!(walker.advance(None), WalkerState::Completed);
    }

    #[test]
    fn questionless_item_follows_item_default() {
        // Scenario 1: A (no questions, next = B) -> B.
        let g = graph(vec![leaf(1, Some(2)), leaf(2, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        assert_eq!(
            walker.advance(None),
            WalkerState::AtItem {
                item_id: 2,
                question_index: 0
            }
        );
    }

    // -- option branching ----------------------------------------------------------

    #[test]
    fn chosen_option_override_routes_there() {
        // Scenario 2: B has Q1 with Yes -> C, No -> item default.
        let b = ItemView {
            id: 2,
            next_content_id: Some(4),
            questions: vec![question(10, vec![(100, Some(3)), (101, None)])],
        };
        let g = graph(vec![b, leaf(3, None), leaf(4, None)]);

        let mut walker = Walker::new(&g);
        walker.start(Some(2));
        assert_eq!(
            walker.advance(Some(100)),
            WalkerState::AtItem {
                item_id: 3,
                question_index: 0
            }
        );

        walker.start(Some(2));
        assert_eq!(
            walker.advance(Some(101)),
            WalkerState::AtItem {
                item_id: 4,
                question_index: 0
            }
        );
    }

    #[test]
    fn all_options_without_override_fall_back_to_terminal() {
        // Required question whose options all lack overrides, item has no
        // default: answering still succeeds and the walk completes.
        let b = ItemView {
            id: 2,
            next_content_id: None,
            questions: vec![question(10, vec![(100, None), (101, None)])],
        };
        let g = graph(vec![b]);
        let mut walker = Walker::new(&g);
        walker.start(Some(2));
        assert_eq!(walker.advance(Some(100)), WalkerState::Completed);
    }

    // -- dangling / unpublished routes ----------------------------------------------

    #[test]
    fn dangling_next_reference_completes() {
        // Scenario 3: next points at an item the published graph cannot
        // serve; the walk reports completion, never the draft.
        let g = graph(vec![leaf(1, Some(99))]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        assert_eq!(walker.advance(None), WalkerState::Completed);
    }

    #[test]
    fn item_vanishing_mid_walk_completes() {
        let g = graph(vec![leaf(1, Some(2))]);
        let mut walker = Walker::new(&g);
        // Force a position at an id the graph no longer serves.
        walker.start(Some(1));
        let restricted = graph(vec![]);
        let mut stale = Walker {
            graph: &restricted,
            state: walker.state(),
            route: RouteState::default(),
        };
        assert_eq!(stale.advance(None), WalkerState::Completed);
    }

    // -- multi-question items ---------------------------------------------------------

    #[test]
    fn earlier_question_without_override_does_not_change_route() {
        // Scenario 4: D has Q1 (no branching) then Q2 (X -> E).
        let d = ItemView {
            id: 4,
            next_content_id: None,
            questions: vec![
                question(10, vec![(100, None), (101, None)]),
                question(11, vec![(110, Some(5))]),
            ],
        };
        let g = graph(vec![d, leaf(5, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(4));

        assert_eq!(
            walker.advance(Some(100)),
            WalkerState::AtItem {
                item_id: 4,
                question_index: 1
            }
        );
        assert_eq!(
            walker.advance(Some(110)),
            WalkerState::AtItem {
                item_id: 5,
                question_index: 0
            }
        );
    }

    #[test]
    fn retained_override_survives_override_less_later_question() {
        // Q1 routes to 7; Q2's chosen option has no override. The walk
        // still exits to 7, not the item default.
        let item = ItemView {
            id: 1,
            next_content_id: Some(9),
            questions: vec![
                question(10, vec![(100, Some(7))]),
                question(11, vec![(110, None)]),
            ],
        };
        let g = graph(vec![item, leaf(7, None), leaf(9, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        walker.advance(Some(100));
        assert_eq!(
            walker.advance(Some(110)),
            WalkerState::AtItem {
                item_id: 7,
                question_index: 0
            }
        );
    }

    #[test]
    fn last_override_wins_across_questions() {
        let item = ItemView {
            id: 1,
            next_content_id: Some(9),
            questions: vec![
                question(10, vec![(100, Some(7))]),
                question(11, vec![(110, Some(8))]),
            ],
        };
        let g = graph(vec![item, leaf(7, None), leaf(8, None), leaf(9, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        walker.advance(Some(100));
        assert_eq!(
            walker.advance(Some(110)),
            WalkerState::AtItem {
                item_id: 8,
                question_index: 0
            }
        );
    }

    #[test]
    fn override_is_discarded_when_entering_next_item() {
        // Item 1's override routes to 7; exiting 7 must use 7's own
        // default, not anything retained from item 1.
        let one = ItemView {
            id: 1,
            next_content_id: None,
            questions: vec![question(10, vec![(100, Some(7))])],
        };
        let g = graph(vec![one, leaf(7, Some(8)), leaf(8, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        walker.advance(Some(100));
        assert_eq!(
            walker.advance(None),
            WalkerState::AtItem {
                item_id: 8,
                question_index: 0
            }
        );
    }

    // -- lifecycle -----------------------------------------------------------------

    #[test]
    fn completed_is_terminal() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        walker.advance(None);
        assert_eq!(walker.advance(None), WalkerState::Completed);
        assert_eq!(walker.advance(Some(100)), WalkerState::Completed);
    }

    #[test]
    fn restart_returns_to_not_started() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        walker.start(Some(1));
        assert_eq!(walker.restart(), WalkerState::NotStarted);
        // A fresh start walks from the beginning again.
        assert_eq!(
            walker.start(Some(1)),
            WalkerState::AtItem {
                item_id: 1,
                question_index: 0
            }
        );
    }

    #[test]
    fn advance_before_start_is_a_no_op() {
        let g = graph(vec![leaf(1, None)]);
        let mut walker = Walker::new(&g);
        assert_eq!(walker.advance(None), WalkerState::NotStarted);
    }
}
