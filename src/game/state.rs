//! The turn/elimination/guess state machine.
//!
//! ## Phases
//!
//! `Setup -> InProgress -> Finished`, terminal. Boards are assigned in
//! `Setup`; the three game operations (`toggle`, `end_turn`, `guess`)
//! are legal only in `InProgress`; nothing mutates a `Finished` match.
//!
//! ## Perspective
//!
//! Each player marks the *opponent's* board, and those marks are
//! private annotations: two independent elimination sets exist, one per
//! player, and neither player's marks affect what the other sees. The
//! sets are owned here and only ever lent out as shared borrows; all
//! mutation goes through `toggle`.
//!
//! ## End conditions
//!
//! - `guess` always terminates the match, right or wrong.
//! - `end_turn` loses on the spot if the acting player has crossed out
//!   the opponent's pinned name (the own-goal rule). The loss is
//!   terminal; un-toggling afterwards is rejected like any other
//!   operation on a finished match.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BOARD_SIZE};
use crate::core::{GameError, PlayerId, PlayerPair};

use super::event::MatchEvent;
use super::outcome::{Outcome, OutcomeReason};

/// Match lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Boards are being assigned.
    Setup,
    /// The match is live.
    InProgress,
    /// Terminal; no operation is accepted.
    Finished,
}

/// Snapshot answered by `MatchState::status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Whose turn it is; `None` outside `InProgress`.
    pub current_player: Option<PlayerId>,
    /// The final result; `None` until `Finished`.
    pub outcome: Option<Outcome>,
}

/// The match: two boards, two private elimination sets, a turn pointer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    boards: PlayerPair<Option<Board>>,
    eliminated: PlayerPair<FxHashSet<String>>,
    current: PlayerId,
    phase: Phase,
    outcome: Option<Outcome>,
    history: Vec<MatchEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create a match in `Setup` with no boards assigned.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: PlayerPair::with_default(),
            eliminated: PlayerPair::with_default(),
            current: PlayerId::ONE,
            phase: Phase::Setup,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Create a match with both boards and start it immediately.
    ///
    /// The boards carry their own invariants, so this cannot fail.
    #[must_use]
    pub fn begin(board1: Board, board2: Board) -> Self {
        let mut state = Self::new();
        state.boards[PlayerId::ONE] = Some(board1);
        state.boards[PlayerId::TWO] = Some(board2);
        state.start().expect("setup is complete");
        state
    }

    /// Assign a player's board during setup.
    ///
    /// ## Errors
    ///
    /// `NotInSetup` once the match has started, `MatchFinished` after
    /// it ended.
    pub fn assign_board(&mut self, player: PlayerId, board: Board) -> Result<(), GameError> {
        match self.phase {
            Phase::Setup => {
                self.boards[player] = Some(board);
                Ok(())
            }
            Phase::InProgress => Err(GameError::NotInSetup),
            Phase::Finished => Err(GameError::MatchFinished),
        }
    }

    /// Leave setup: both boards present, player 1 to act.
    ///
    /// ## Errors
    ///
    /// `SetupIncomplete` naming the first seat without a board;
    /// `NotInSetup`/`MatchFinished` out of phase.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Setup => {}
            Phase::InProgress => return Err(GameError::NotInSetup),
            Phase::Finished => return Err(GameError::MatchFinished),
        }

        for player in PlayerId::both() {
            if self.boards[player].is_none() {
                return Err(GameError::SetupIncomplete { missing: player });
            }
        }

        self.phase = Phase::InProgress;
        self.current = PlayerId::ONE;
        self.history.push(MatchEvent::Started);
        log::debug!("match started");
        Ok(())
    }

    // === Game operations (InProgress only) ===

    /// Flip the acting player's mark on a name on the opponent's board.
    ///
    /// Marking does not change the turn. Returns whether the name is
    /// now eliminated from the acting player's perspective.
    ///
    /// ## Errors
    ///
    /// `InvalidTarget` if `target` is the acting player's own board or
    /// `name` is not on the target board; phase errors as usual.
    pub fn toggle(&mut self, target: PlayerId, name: &str) -> Result<bool, GameError> {
        self.ensure_in_progress()?;

        if target == self.current {
            return Err(GameError::InvalidTarget {
                name: name.to_string(),
            });
        }
        if !self.board_of(target).contains(name) {
            return Err(GameError::InvalidTarget {
                name: name.to_string(),
            });
        }

        let marks = &mut self.eliminated[self.current];
        let eliminated = if marks.remove(name) {
            false
        } else {
            marks.insert(name.to_string());
            true
        };

        log::trace!(
            "{} {} '{}'",
            self.current,
            if eliminated { "eliminated" } else { "restored" },
            name
        );
        self.history.push(MatchEvent::Toggled {
            player: self.current,
            target,
            name: name.to_string(),
            eliminated,
        });
        Ok(eliminated)
    }

    /// End the acting player's turn.
    ///
    /// If they have crossed out the opponent's pinned name, they lose
    /// on the spot (own goal) and the match finishes; the outcome is
    /// returned. Otherwise the turn passes and `None` is returned.
    pub fn end_turn(&mut self) -> Result<Option<Outcome>, GameError> {
        self.ensure_in_progress()?;

        let opponent = self.current.opponent();
        let opponent_pinned = self.board_of(opponent).pinned().to_string();

        if self.eliminated[self.current].contains(&opponent_pinned) {
            let outcome = Outcome::new(
                opponent,
                OutcomeReason::OwnGoal {
                    name: opponent_pinned,
                },
            );
            self.finish(outcome.clone());
            return Ok(Some(outcome));
        }

        let from = self.current;
        self.current = opponent;
        log::debug!("turn passed from {} to {}", from, opponent);
        self.history.push(MatchEvent::TurnPassed { from, to: opponent });
        Ok(None)
    }

    /// Guess the opponent's pinned name. Always terminates the match.
    ///
    /// ## Errors
    ///
    /// `InvalidTarget` if `name` is off the opponent's board or already
    /// crossed out by the acting player; phase errors as usual.
    pub fn guess(&mut self, name: &str) -> Result<Outcome, GameError> {
        self.ensure_in_progress()?;

        let opponent = self.current.opponent();
        let board = self.board_of(opponent);

        if !board.contains(name) || self.eliminated[self.current].contains(name) {
            return Err(GameError::InvalidTarget {
                name: name.to_string(),
            });
        }

        let pinned = board.pinned();
        let outcome = if name == pinned {
            Outcome::new(
                self.current,
                OutcomeReason::CorrectGuess {
                    name: name.to_string(),
                },
            )
        } else {
            Outcome::new(
                opponent,
                OutcomeReason::WrongGuess {
                    guessed: name.to_string(),
                    actual: pinned.to_string(),
                },
            )
        };

        self.finish(outcome.clone());
        Ok(outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        log::debug!("match finished, {} wins", outcome.winner);
        self.phase = Phase::Finished;
        self.history.push(MatchEvent::Finished {
            outcome: outcome.clone(),
        });
        self.outcome = Some(outcome);
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Setup => Err(GameError::MatchNotStarted),
            Phase::Finished => Err(GameError::MatchFinished),
        }
    }

    // Boards are always present past setup; `ensure_in_progress` runs
    // before every call site.
    fn board_of(&self, player: PlayerId) -> &Board {
        self.boards[player]
            .as_ref()
            .expect("board assigned before start")
    }

    // === Queries ===

    /// Phase, turn pointer, and outcome in one snapshot.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        MatchStatus {
            phase: self.phase,
            current_player: self.current_player(),
            outcome: self.outcome.clone(),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is; `None` outside `InProgress`.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::InProgress => Some(self.current),
            _ => None,
        }
    }

    /// The final result, once finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// A player's board, once assigned.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> Option<&Board> {
        self.boards[player].as_ref()
    }

    /// A player's pinned name, once their board is assigned.
    #[must_use]
    pub fn pinned(&self, player: PlayerId) -> Option<&str> {
        self.boards[player].as_ref().map(Board::pinned)
    }

    /// The names a player has crossed out on the opponent's board.
    ///
    /// Read-only: marks change only through `toggle`.
    #[must_use]
    pub fn eliminations(&self, player: PlayerId) -> &FxHashSet<String> {
        &self.eliminated[player]
    }

    /// Opponent-board candidates a player has not crossed out.
    ///
    /// This is the header count the original game displayed per player.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> usize {
        BOARD_SIZE - self.eliminated[player].len()
    }

    /// Legal guesses for the acting player: the opponent's board minus
    /// the acting player's marks, in board order. Empty outside
    /// `InProgress`.
    #[must_use]
    pub fn guess_candidates(&self) -> Vec<&str> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }

        let marks = &self.eliminated[self.current];
        self.board_of(self.current.opponent())
            .iter()
            .filter(|name| !marks.contains(*name))
            .collect()
    }

    /// Every recorded state change, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MatchEvent] {
        &self.history
    }
}
