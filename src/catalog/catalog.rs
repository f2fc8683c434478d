//! Species catalog for entry lookup.
//!
//! The `SpeciesCatalog` stores every species the game knows about. It is
//! loaded once at startup from an external data source and never mutated
//! afterwards. Iteration yields insertion order; the filter engine's
//! output order is defined in terms of it.

use rustc_hash::FxHashMap;

use super::entry::SpeciesEntry;

/// Immutable table of species entries.
///
/// Provides O(1) lookup by name and ordered iteration.
///
/// ## Example
///
/// ```
/// use guessdex::catalog::{Generation, SpeciesCatalog, SpeciesEntry};
///
/// let mut catalog = SpeciesCatalog::new();
/// catalog.register(SpeciesEntry::new("Pikachu", Generation::known(1)));
///
/// let found = catalog.get("Pikachu").unwrap();
/// assert_eq!(found.generation, Generation::known(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpeciesCatalog {
    // Entries in load order; `index` maps name to position.
    entries: Vec<SpeciesEntry>,
    index: FxHashMap<String, usize>,
}

impl SpeciesCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loader output.
    ///
    /// Panics on duplicate names, like `register`.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = SpeciesEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.register(entry);
        }
        log::debug!("loaded {} species", catalog.len());
        catalog
    }

    /// Register an entry.
    ///
    /// Panics if an entry with the same name already exists; unique names
    /// are part of the loader contract.
    pub fn register(&mut self, entry: SpeciesEntry) {
        if self.index.contains_key(&entry.name) {
            panic!("Species '{}' already registered", entry.name);
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Get an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpeciesEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.entries.iter()
    }

    /// Iterate over names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Find entries matching a predicate, in load order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &SpeciesEntry>
    where
        F: Fn(&SpeciesEntry) -> bool,
    {
        self.entries.iter().filter(move |e| predicate(e))
    }
}
