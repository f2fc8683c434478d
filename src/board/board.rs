//! The 24-slot board value type.
//!
//! A board is created once per player at match setup and never mutated;
//! eliminations are tracked separately by the match state. Invariants
//! (24 distinct names, pinned name present exactly once) hold by
//! construction because the builder paths in this module's siblings are
//! the only way to make one.
//!
//! UI layers address slots by index. Widgets carry a slot index back
//! into the core rather than holding references to game objects.

use serde::{Deserialize, Serialize};

/// Number of slots on every board: a 6x4 grid.
pub const BOARD_SIZE: usize = 24;

/// One player's public grid of species names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<String>,
    pinned: String,
}

impl Board {
    /// Assemble a board whose invariants have already been checked.
    pub(crate) fn assemble(slots: Vec<String>, pinned: String) -> Self {
        debug_assert_eq!(slots.len(), BOARD_SIZE);
        debug_assert!(slots.contains(&pinned));
        Self { slots, pinned }
    }

    /// All slot names in display order.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// The owner's secretly chosen name.
    #[must_use]
    pub fn pinned(&self) -> &str {
        &self.pinned
    }

    /// The name at a slot index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Whether a name is on this board.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s == name)
    }

    /// The slot index of a name, if present.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == name)
    }

    /// Iterate over slot names in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }
}
