//! Board construction: random draw and manual assembly.
//!
//! Both paths end in the same invariants: 24 distinct names with the
//! pinned name among them. The random path shuffles after appending the
//! pinned name so its position gives nothing away.

use crate::core::{GameError, GameRng};

use super::board::{Board, BOARD_SIZE};

impl Board {
    /// Build a board by random draw from the eligible pool.
    ///
    /// Removes `pinned` from a working copy of the pool, draws 23 other
    /// names without replacement, appends `pinned`, and shuffles.
    ///
    /// ## Errors
    ///
    /// - `MissingPinned` if `pinned` is not in `pool`
    /// - `InsufficientPool` if `pool` has fewer than 24 names
    pub fn random<S: AsRef<str>>(
        pool: &[S],
        pinned: &str,
        rng: &mut GameRng,
    ) -> Result<Board, GameError> {
        if !pool.iter().any(|name| name.as_ref() == pinned) {
            return Err(GameError::MissingPinned {
                name: pinned.to_string(),
            });
        }
        if pool.len() < BOARD_SIZE {
            return Err(GameError::InsufficientPool {
                available: pool.len(),
            });
        }

        let others: Vec<String> = pool
            .iter()
            .map(|name| name.as_ref().to_string())
            .filter(|name| name != pinned)
            .collect();

        let mut slots = rng.sample_distinct(&others, BOARD_SIZE - 1);
        slots.push(pinned.to_string());
        rng.shuffle(&mut slots);

        log::debug!("built random board pinned on '{}'", pinned);
        Ok(Board::assemble(slots, pinned.to_string()))
    }

    /// Build a board from a player's hand-picked slot list.
    ///
    /// Order is preserved: the player laid the grid out themselves.
    ///
    /// ## Errors
    ///
    /// - `IncompleteBoard` if `slots` is not exactly 24 names
    /// - `DuplicateEntry` if any name repeats
    /// - `MissingPinned` if `pinned` is absent
    pub fn manual<S: AsRef<str>>(slots: &[S], pinned: &str) -> Result<Board, GameError> {
        if slots.len() != BOARD_SIZE {
            return Err(GameError::IncompleteBoard {
                filled: slots.len(),
            });
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for name in slots {
            if !seen.insert(name.as_ref()) {
                return Err(GameError::DuplicateEntry {
                    name: name.as_ref().to_string(),
                });
            }
        }

        if !seen.contains(pinned) {
            return Err(GameError::MissingPinned {
                name: pinned.to_string(),
            });
        }

        let slots: Vec<String> = slots.iter().map(|name| name.as_ref().to_string()).collect();
        Ok(Board::assemble(slots, pinned.to_string()))
    }
}
