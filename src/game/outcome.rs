//! Terminal match results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why the match ended.
///
/// Carries the names involved so the host can compose its game-over
/// message without re-querying the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    /// The winner guessed the opponent's pinned name.
    CorrectGuess {
        /// The name guessed.
        name: String,
    },
    /// The loser guessed wrong; the match ends immediately.
    WrongGuess {
        /// What the loser guessed.
        guessed: String,
        /// What the opponent had actually pinned.
        actual: String,
    },
    /// The loser crossed out the opponent's pinned name and ended
    /// their turn without guessing.
    OwnGoal {
        /// The pinned name the loser eliminated.
        name: String,
    },
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The winning player.
    pub winner: PlayerId,
    /// Why the match ended.
    pub reason: OutcomeReason,
}

impl Outcome {
    /// Create an outcome.
    #[must_use]
    pub fn new(winner: PlayerId, reason: OutcomeReason) -> Self {
        Self { winner, reason }
    }

    /// The losing player.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
