//! Error taxonomy for the game core.
//!
//! Every variant is a recoverable, caller-side condition: the core rejects
//! the operation, leaves state untouched, and the host translates the error
//! into a user-facing message. Nothing here is fatal to the process.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::BOARD_SIZE;

/// Rejection reasons surfaced by the game core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The eligible pool is too small to fill a board.
    #[error("pool has {available} candidates but a board needs {}", BOARD_SIZE)]
    InsufficientPool {
        /// Candidates available after filtering.
        available: usize,
    },

    /// A manual board was submitted with the wrong number of slots.
    #[error("board has {filled} slots filled, expected {}", BOARD_SIZE)]
    IncompleteBoard {
        /// Slots actually supplied.
        filled: usize,
    },

    /// The same name was supplied for two board slots.
    #[error("'{name}' appears more than once on the board")]
    DuplicateEntry {
        /// The repeated name.
        name: String,
    },

    /// The player's own pinned name is missing from their board.
    #[error("pinned name '{name}' is not on the board")]
    MissingPinned {
        /// The pinned name that was expected.
        name: String,
    },

    /// A draft slot cannot be written: out of range, or locked by the
    /// pinned name.
    #[error("board slot {index} is not available")]
    SlotUnavailable {
        /// The rejected slot index.
        index: usize,
    },

    /// The named target is not a legal subject for this operation:
    /// marking one's own board, or guessing a name that is off the
    /// opponent's board or already crossed out.
    #[error("'{name}' is not a valid target for this action")]
    InvalidTarget {
        /// The rejected name.
        name: String,
    },

    /// A game operation was attempted before the match started.
    #[error("the match has not started")]
    MatchNotStarted,

    /// A setup operation was attempted after the match started.
    #[error("the match is already underway")]
    NotInSetup,

    /// `start` was called before both boards were assigned.
    #[error("{missing} has no board assigned")]
    SetupIncomplete {
        /// The seat still waiting on a board.
        missing: PlayerId,
    },

    /// Any operation attempted after the match reached its terminal state.
    #[error("the match is finished")]
    MatchFinished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InsufficientPool { available: 10 };
        assert_eq!(
            err.to_string(),
            "pool has 10 candidates but a board needs 24"
        );

        let err = GameError::DuplicateEntry {
            name: "Eevee".to_string(),
        };
        assert_eq!(err.to_string(), "'Eevee' appears more than once on the board");

        let err = GameError::SetupIncomplete {
            missing: PlayerId::TWO,
        };
        assert_eq!(err.to_string(), "Player 2 has no board assigned");
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(GameError::MatchFinished, GameError::MatchFinished);
        assert_ne!(
            GameError::MatchFinished,
            GameError::MatchNotStarted
        );
    }
}
