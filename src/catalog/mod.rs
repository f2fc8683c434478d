//! Species catalog: entries, lookup table, and pool filtering.
//!
//! ## Key Types
//!
//! - `SpeciesEntry`: one immutable species record
//! - `Generation` / `VariantTag`: typed entry fields
//! - `SpeciesCatalog`: load-ordered lookup table
//! - `Selection`: the player's generation/variant choices
//!
//! `eligible_pool` turns a catalog plus a selection into the candidate
//! list boards are drawn from.

pub mod catalog;
pub mod entry;
pub mod filter;

pub use catalog::SpeciesCatalog;
pub use entry::{Generation, SpeciesEntry, VariantTag};
pub use filter::{eligible_pool, Selection};
