//! Name search used by the selection and manual grid screens.

pub mod fuzzy;

pub use fuzzy::{classify, search, MatchTier, MAX_SUGGESTIONS};
