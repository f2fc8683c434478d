//! Core types: players, errors, deterministic RNG.
//!
//! These are the building blocks the rest of the crate is assembled from;
//! nothing here knows about catalogs, boards, or match rules.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
