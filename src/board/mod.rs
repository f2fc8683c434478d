//! Boards: the 24-slot grids and their two construction paths.
//!
//! ## Key Types
//!
//! - `Board`: immutable 24-slot grid with the pinned-name invariant
//! - `BoardDraft`: slot-by-slot state for the manual setup flow
//!
//! `Board::random` draws from the eligible pool; `Board::manual`
//! validates a hand-picked list; `BoardDraft::finish` feeds the latter.

pub mod board;
pub mod builder;
pub mod draft;

pub use board::{Board, BOARD_SIZE};
pub use draft::BoardDraft;
