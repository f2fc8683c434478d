//! Slot-by-slot manual board assembly.
//!
//! The manual setup screen shows a 6x4 grid of empty tiles, one of them
//! pre-filled with the player's pinned choice and locked. The player
//! fills the rest through autocomplete, and names already placed must
//! drop out of the suggestions. `BoardDraft` is that flow's state,
//! kept out of the widget layer: the UI drives it by slot index and
//! re-renders from it.

use rustc_hash::FxHashSet;

use crate::core::GameError;

use super::board::{Board, BOARD_SIZE};

/// In-progress manual board, one optional name per slot.
#[derive(Clone, Debug)]
pub struct BoardDraft {
    slots: Vec<Option<String>>,
    pinned: String,
    pinned_slot: usize,
}

impl BoardDraft {
    /// Start a draft with the pinned name locked into `pinned_slot`.
    ///
    /// Panics if `pinned_slot` is out of range; the UI picks the slot
    /// and controls the range.
    #[must_use]
    pub fn new(pinned: impl Into<String>, pinned_slot: usize) -> Self {
        assert!(pinned_slot < BOARD_SIZE, "Pinned slot out of range");

        let mut slots = vec![None; BOARD_SIZE];
        let pinned = pinned.into();
        slots[pinned_slot] = Some(pinned.clone());

        Self {
            slots,
            pinned,
            pinned_slot,
        }
    }

    /// The locked pinned name.
    #[must_use]
    pub fn pinned(&self) -> &str {
        &self.pinned
    }

    /// The slot holding the pinned name.
    #[must_use]
    pub fn pinned_slot(&self) -> usize {
        self.pinned_slot
    }

    /// The name currently in a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// Place a name in a slot, replacing whatever was there.
    ///
    /// ## Errors
    ///
    /// - `SlotUnavailable` for the locked pinned slot or an
    ///   out-of-range index
    /// - `DuplicateEntry` if the name already occupies another slot
    pub fn set(&mut self, index: usize, name: impl Into<String>) -> Result<(), GameError> {
        if index >= BOARD_SIZE || index == self.pinned_slot {
            return Err(GameError::SlotUnavailable { index });
        }

        let name = name.into();
        let taken = self
            .slots
            .iter()
            .enumerate()
            .any(|(i, slot)| i != index && slot.as_deref() == Some(name.as_str()));
        if taken {
            return Err(GameError::DuplicateEntry { name });
        }

        self.slots[index] = Some(name);
        Ok(())
    }

    /// Empty a slot.
    ///
    /// ## Errors
    ///
    /// `SlotUnavailable` for the locked pinned slot or an out-of-range
    /// index.
    pub fn clear(&mut self, index: usize) -> Result<(), GameError> {
        if index >= BOARD_SIZE || index == self.pinned_slot {
            return Err(GameError::SlotUnavailable { index });
        }
        self.slots[index] = None;
        Ok(())
    }

    /// Number of filled slots, the pinned one included.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether all 24 slots are filled. Gates the confirm button.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == BOARD_SIZE
    }

    /// Pool names not yet placed on the draft.
    ///
    /// This is what the per-tile autocomplete searches against; it
    /// shrinks as slots fill.
    #[must_use]
    pub fn remaining<'a, S: AsRef<str>>(&self, pool: &'a [S]) -> Vec<&'a str> {
        let used: FxHashSet<&str> = self.slots.iter().filter_map(|s| s.as_deref()).collect();

        pool.iter()
            .map(|name| name.as_ref())
            .filter(|name| !used.contains(name))
            .collect()
    }

    /// Validate and assemble the finished board.
    ///
    /// Delegates to `Board::manual`, so the same taxonomy applies;
    /// in practice only `IncompleteBoard` can fire, the setters having
    /// blocked duplicates and protected the pinned slot.
    pub fn finish(&self) -> Result<Board, GameError> {
        let filled: Vec<&str> = self.slots.iter().filter_map(|s| s.as_deref()).collect();
        if filled.len() != BOARD_SIZE {
            return Err(GameError::IncompleteBoard {
                filled: filled.len(),
            });
        }
        Board::manual(&filled, &self.pinned)
    }
}
