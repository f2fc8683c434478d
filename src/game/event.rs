//! Match event log.
//!
//! Every state change appends an event. The UI layer re-renders from
//! these instead of the core reaching into presentation objects: a host
//! keeps a cursor into `MatchState::history` and applies whatever is
//! new after each operation.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::outcome::Outcome;

/// One recorded state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Both boards were in place and the match began.
    Started,

    /// A player flipped a mark on the opponent's board.
    Toggled {
        /// The player doing the marking.
        player: PlayerId,
        /// Whose board the mark sits on.
        target: PlayerId,
        /// The name marked.
        name: String,
        /// Whether the name is now eliminated (true) or restored.
        eliminated: bool,
    },

    /// The turn passed without incident.
    TurnPassed {
        /// The player whose turn ended.
        from: PlayerId,
        /// The player now acting.
        to: PlayerId,
    },

    /// The match reached its terminal state.
    Finished {
        /// The final result.
        outcome: Outcome,
    },
}
