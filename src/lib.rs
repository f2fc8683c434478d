//! # guessdex
//!
//! Rules core for a two-player hidden-pick deduction game played over a
//! species catalog: each player secretly pins one species on a 24-slot
//! board, then takes turns crossing out candidates on the opponent's
//! board until someone guesses.
//!
//! ## Design Principles
//!
//! 1. **Logic only**: No rendering, assets, or widgets. The UI calls in
//!    with names and slot indexes and re-renders from returned state and
//!    events.
//!
//! 2. **Reject, don't crash**: Bad input gets a typed `GameError` and
//!    leaves state untouched. Every rejection is recoverable by the
//!    caller.
//!
//! 3. **Reproducible randomness**: Board generation is the only random
//!    act, and it goes through a seedable `GameRng`.
//!
//! ## Flow
//!
//! `SpeciesCatalog` + `Selection` -> `eligible_pool` -> `Board::random`
//! or `BoardDraft`/`Board::manual` (one board per player) ->
//! `MatchState::begin` -> `toggle`/`end_turn`/`guess` to a terminal
//! `Outcome`. `search` ranks pool names for the selection screens.
//!
//! ## Modules
//!
//! - `core`: player identity, errors, deterministic RNG
//! - `catalog`: species entries, lookup table, pool filtering
//! - `search`: ranked fuzzy name matching
//! - `board`: the 24-slot boards and their builders
//! - `game`: the turn/elimination/guess state machine

pub mod board;
pub mod catalog;
pub mod core;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, PlayerId, PlayerPair};

pub use crate::catalog::{
    eligible_pool, Generation, Selection, SpeciesCatalog, SpeciesEntry, VariantTag,
};

pub use crate::search::{search, MatchTier, MAX_SUGGESTIONS};

pub use crate::board::{Board, BoardDraft, BOARD_SIZE};

pub use crate::game::{MatchEvent, MatchState, MatchStatus, Outcome, OutcomeReason, Phase};
