//! Catalog entries - static species data.
//!
//! `SpeciesEntry` holds the immutable properties of one species: its
//! unique name, the generation it belongs to, and an optional variant
//! tag for non-standard forms.
//!
//! Display concerns (sprites, glyphs) live outside the core; the name is
//! the only handle it ever passes to a renderer.

use serde::{Deserialize, Serialize};

/// Generation a species belongs to.
///
/// The dataset covers generations 1 through 9; entries scraped from
/// incomplete sources can carry `Unknown` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    /// A numbered generation in `1..=9`.
    Known(u8),
    /// Generation data missing from the source dataset.
    Unknown,
}

impl Generation {
    /// Lowest numbered generation.
    pub const MIN: u8 = 1;

    /// Highest numbered generation.
    pub const MAX: u8 = 9;

    /// Create a numbered generation.
    #[must_use]
    pub fn known(number: u8) -> Self {
        assert!(
            (Self::MIN..=Self::MAX).contains(&number),
            "Generation must be between 1 and 9"
        );
        Self::Known(number)
    }

    /// The generation number, if known.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Known(n) => Some(n),
            Self::Unknown => None,
        }
    }

    /// Whether the generation is missing from the dataset.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(n) => write!(f, "Gen {}", n),
            Self::Unknown => write!(f, "Gen ?"),
        }
    }
}

/// Variant classification tag.
///
/// The dataset labels non-standard forms with strings like
/// `"Regional - Alolan"`, `"Mega"`, or `"Gigantamax"`. The core treats
/// these as opaque, case-sensitive tags; only the settings screen knows
/// the full label set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantTag(String);

impl VariantTag {
    /// Create a variant tag.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw tag label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariantTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One immutable species record.
///
/// ## Example
///
/// ```
/// use guessdex::catalog::{Generation, SpeciesEntry};
///
/// let pikachu = SpeciesEntry::new("Pikachu", Generation::known(1));
/// assert!(pikachu.is_standard());
///
/// let alolan = SpeciesEntry::new("Raichu-alola", Generation::known(7))
///     .with_variant("Regional - Alolan");
/// assert!(!alolan.is_standard());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Unique display name; the key every other component uses.
    pub name: String,

    /// Generation the species belongs to.
    pub generation: Generation,

    /// Variant tag for non-standard forms; `None` for standard species.
    pub variant: Option<VariantTag>,
}

impl SpeciesEntry {
    /// Create a standard entry with no variant tag.
    #[must_use]
    pub fn new(name: impl Into<String>, generation: Generation) -> Self {
        Self {
            name: name.into(),
            generation,
            variant: None,
        }
    }

    /// Attach a variant tag (builder pattern).
    #[must_use]
    pub fn with_variant(mut self, tag: impl Into<VariantTag>) -> Self {
        self.variant = Some(tag.into());
        self
    }

    /// Whether this is a standard (untagged) species.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.variant.is_none()
    }
}
