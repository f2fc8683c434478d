//! Pool filtering: generation and variant selection.
//!
//! The settings screen edits a `Selection`; the filter derives the
//! eligible pool every board is drawn from. Filtering is a pure function
//! of the catalog and the selection.
//!
//! ## Rules
//!
//! - A standard entry (no variant tag) is eligible iff its generation is
//!   selected. Variant checkboxes never exclude standard species.
//! - A tagged entry is eligible iff its tag is selected AND its
//!   generation is selected. An `Unknown` generation bypasses the
//!   generation gate for tagged entries; the dataset only loses
//!   generation data on scraped variant forms.
//! - An empty generation selection yields an empty pool.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::catalog::SpeciesCatalog;
use super::entry::{Generation, SpeciesEntry, VariantTag};

/// The player's generation and variant choices.
///
/// Mutated only by the settings boundary; the core reads it on demand.
///
/// ## Example
///
/// ```
/// use guessdex::catalog::Selection;
///
/// let mut selection = Selection::new();
/// selection.select_generation(1);
/// selection.select_variant("Mega");
///
/// assert!(selection.has_generations());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    generations: FxHashSet<u8>,
    variants: FxHashSet<VariantTag>,
}

impl Selection {
    /// Create an empty selection. Filters to an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection with every generation and no variants.
    ///
    /// This is the settings screen's starting state.
    #[must_use]
    pub fn all_generations() -> Self {
        let mut selection = Self::new();
        for gen in Generation::MIN..=Generation::MAX {
            selection.generations.insert(gen);
        }
        selection
    }

    /// Select a generation.
    pub fn select_generation(&mut self, generation: u8) {
        self.generations.insert(generation);
    }

    /// Deselect a generation.
    pub fn deselect_generation(&mut self, generation: u8) {
        self.generations.remove(&generation);
    }

    /// Check whether a generation is selected.
    #[must_use]
    pub fn generation_selected(&self, generation: u8) -> bool {
        self.generations.contains(&generation)
    }

    /// Whether any generation is selected. Gates the confirm button.
    #[must_use]
    pub fn has_generations(&self) -> bool {
        !self.generations.is_empty()
    }

    /// Select a variant tag.
    pub fn select_variant(&mut self, tag: impl Into<VariantTag>) {
        self.variants.insert(tag.into());
    }

    /// Deselect a variant tag.
    pub fn deselect_variant(&mut self, tag: &VariantTag) {
        self.variants.remove(tag);
    }

    /// Check whether a variant tag is selected.
    #[must_use]
    pub fn variant_selected(&self, tag: &VariantTag) -> bool {
        self.variants.contains(tag)
    }

    /// Clear everything, leaving the empty selection.
    pub fn clear(&mut self) {
        self.generations.clear();
        self.variants.clear();
    }

    /// Whether a single entry passes this selection.
    #[must_use]
    pub fn includes(&self, entry: &SpeciesEntry) -> bool {
        let generation_ok = match entry.generation {
            Generation::Known(g) => self.generations.contains(&g),
            // Unknown bypasses the generation gate, but only for
            // tagged entries; see module docs.
            Generation::Unknown => entry.variant.is_some(),
        };

        match &entry.variant {
            None => generation_ok,
            Some(tag) => generation_ok && self.variants.contains(tag),
        }
    }
}

/// Derive the eligible pool from a catalog and a selection.
///
/// Output preserves catalog load order; callers wanting alphabetical
/// order sort the result themselves.
#[must_use]
pub fn eligible_pool(catalog: &SpeciesCatalog, selection: &Selection) -> Vec<String> {
    let pool: Vec<String> = catalog
        .iter()
        .filter(|entry| selection.includes(entry))
        .map(|entry| entry.name.clone())
        .collect();

    log::debug!("filtered catalog to {} eligible species", pool.len());
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesEntry;

    fn catalog() -> SpeciesCatalog {
        SpeciesCatalog::from_entries([
            SpeciesEntry::new("Bulbasaur", Generation::known(1)),
            SpeciesEntry::new("Chikorita", Generation::known(2)),
            SpeciesEntry::new("Raichu-alola", Generation::known(7))
                .with_variant("Regional - Alolan"),
            SpeciesEntry::new("Charizard-mega-x", Generation::known(1)).with_variant("Mega"),
            SpeciesEntry::new("Venusaur-gmax", Generation::Unknown).with_variant("Gigantamax"),
        ])
    }

    #[test]
    fn test_empty_selection_empty_pool() {
        let pool = eligible_pool(&catalog(), &Selection::new());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_standard_included_by_generation() {
        let mut selection = Selection::new();
        selection.select_generation(1);

        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(pool, vec!["Bulbasaur"]);
    }

    #[test]
    fn test_standard_ignores_variant_selection() {
        // Selecting variants must never exclude standard species.
        let mut selection = Selection::new();
        selection.select_generation(2);
        selection.select_variant("Mega");

        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(pool, vec!["Chikorita"]);
    }

    #[test]
    fn test_variant_needs_tag_selected() {
        let mut selection = Selection::new();
        selection.select_generation(7);

        // Tag not selected: the Alolan form stays out even though its
        // generation matches.
        assert!(eligible_pool(&catalog(), &selection).is_empty());

        selection.select_variant("Regional - Alolan");
        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(pool, vec!["Raichu-alola"]);
    }

    #[test]
    fn test_variant_needs_generation_too() {
        let mut selection = Selection::new();
        selection.select_generation(2);
        selection.select_variant("Mega");

        // Mega tag selected but generation 1 is not.
        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(pool, vec!["Chikorita"]);
    }

    #[test]
    fn test_unknown_generation_bypasses_gate_for_variants() {
        let mut selection = Selection::new();
        selection.select_generation(3);
        selection.select_variant("Gigantamax");

        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(pool, vec!["Venusaur-gmax"]);
    }

    #[test]
    fn test_pool_preserves_load_order() {
        let mut selection = Selection::all_generations();
        selection.select_variant("Regional - Alolan");
        selection.select_variant("Mega");
        selection.select_variant("Gigantamax");

        let pool = eligible_pool(&catalog(), &selection);
        assert_eq!(
            pool,
            vec![
                "Bulbasaur",
                "Chikorita",
                "Raichu-alola",
                "Charizard-mega-x",
                "Venusaur-gmax"
            ]
        );
    }

    #[test]
    fn test_selection_toggle_helpers() {
        let mut selection = Selection::all_generations();
        assert!(selection.generation_selected(5));

        selection.deselect_generation(5);
        assert!(!selection.generation_selected(5));
        assert!(selection.has_generations());

        selection.clear();
        assert!(!selection.has_generations());
    }

    #[test]
    fn test_selection_serialization() {
        let mut selection = Selection::new();
        selection.select_generation(4);
        selection.select_variant("Totem Pokemon");

        let json = serde_json::to_string(&selection).unwrap();
        let deserialized: Selection = serde_json::from_str(&json).unwrap();

        assert_eq!(selection, deserialized);
    }
}
