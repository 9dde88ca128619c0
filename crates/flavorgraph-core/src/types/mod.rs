//! # Core Type Definitions
//!
//! This module contains all core types for the Flavorgraph pipeline:
//! - Canonical identifiers (`CanonicalId`, `PairKey`)
//! - Mined records (`PairRecord`)
//! - Recipe input (`Recipe` and its flexible field shapes)
//! - Graph output nodes and edges (`Ingredient`, `Pairing`, `GraphEdge`)
//! - Error types (`FlavorError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module implement `Ord` where they act as map/set keys so
//! that every accumulator in the pipeline can live in a `BTreeMap`/`BTreeSet`
//! and iterate in a reproducible order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// CANONICAL IDENTIFIERS
// =============================================================================

/// A canonical ingredient identifier (slug).
///
/// Slugs are lower-case, alphanumeric-and-hyphen strings derived
/// deterministically from a canonical name. Two surface spellings that
/// canonicalize to the same name always produce the same `CanonicalId`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
    /// Slugify a canonical name: lower-case, any run of non-alphanumeric
    /// characters becomes a single hyphen, leading/trailing hyphens trimmed.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut pending_hyphen = false;
        for ch in name.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_alphanumeric() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else {
                pending_hyphen = true;
            }
        }
        Self(slug)
    }

    /// Wrap an already-slugified string without re-deriving it.
    ///
    /// Used when reading a pair table whose id columns were produced by a
    /// previous run; `from_name` on a valid slug is the identity, so this is
    /// an optimization, not a loophole.
    #[must_use]
    pub fn from_slug(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the slug is empty (the source name had no alphanumerics).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recover a display-ish name from the slug (hyphens to spaces).
    ///
    /// Used when a pair-table row carries ids but no display names.
    #[must_use]
    pub fn to_spaced_name(&self) -> String {
        self.0.replace('-', " ")
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unordered pair of canonical ids, stored with the lexicographically
/// smaller id first.
///
/// The constructor enforces the ordering invariant, so the same `PairKey` is
/// produced regardless of the order the two ids were observed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: CanonicalId,
    second: CanonicalId,
}

impl PairKey {
    /// Build a pair key from two ids in any order.
    #[must_use]
    pub fn new(a: CanonicalId, b: CanonicalId) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// The lexicographically smaller id.
    #[must_use]
    pub fn first(&self) -> &CanonicalId {
        &self.first
    }

    /// The lexicographically larger id.
    #[must_use]
    pub fn second(&self) -> &CanonicalId {
        &self.second
    }
}

// =============================================================================
// PAIR RECORD
// =============================================================================

/// One row of the pair table: an unordered ingredient pair with its
/// co-occurrence statistics.
///
/// `a_id <= b_id` always holds for records produced by the miner or the merge
/// stage; `a`/`b` are the display names for the corresponding sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub a_id: CanonicalId,
    pub b_id: CanonicalId,
    pub a: String,
    pub b: String,
    pub count: u64,
    pub pmi: f64,
    pub lift: f64,
    pub cuisines: BTreeSet<String>,
}

impl PairRecord {
    /// The unordered key of this record.
    #[must_use]
    pub fn key(&self) -> PairKey {
        PairKey::new(self.a_id.clone(), self.b_id.clone())
    }
}

// =============================================================================
// RECIPE INPUT
// =============================================================================

/// Ingredients of a recipe: either an explicit list of mentions or a single
/// delimited string to be split on newline/comma/semicolon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientField {
    List(Vec<String>),
    Text(String),
}

impl Default for IngredientField {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Cuisine tag(s) of a recipe: a single tag or a list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CuisineField {
    One(String),
    Many(Vec<String>),
}

/// A recipe record as consumed by the miner.
///
/// Transient input; the core never persists recipes. Unknown fields in the
/// source records are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: IngredientField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<CuisineField>,
}

impl Recipe {
    /// The raw ingredient mentions, splitting a delimited string if needed.
    #[must_use]
    pub fn mentions(&self) -> Vec<String> {
        match &self.ingredients {
            IngredientField::List(items) => items
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            IngredientField::Text(text) => crate::normalize::split_mentions(text)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Lower-cased, trimmed, non-empty cuisine tags.
    #[must_use]
    pub fn cuisine_tags(&self) -> Vec<String> {
        let raw: Vec<&str> = match &self.cuisine {
            None => Vec::new(),
            Some(CuisineField::One(tag)) => vec![tag.as_str()],
            Some(CuisineField::Many(tags)) => tags.iter().map(String::as_str).collect(),
        };
        raw.iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// True if the record cannot contribute anything (no ingredients at all).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.ingredients {
            IngredientField::List(items) => items.iter().all(|s| s.trim().is_empty()),
            IngredientField::Text(text) => text.trim().is_empty(),
        }
    }
}

// =============================================================================
// GRAPH NODES & EDGES
// =============================================================================

/// Pairing node type, inferred by exact keyword lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingType {
    Herb,
    Spice,
    Acid,
    Fat,
    Sauce,
    Aromatic,
    Texture,
    Cheese,
    Other,
}

impl PairingType {
    /// True for the plant-forward types (herb/spice/acid).
    #[must_use]
    pub fn is_plant_forward(self) -> bool {
        matches!(self, Self::Herb | Self::Spice | Self::Acid)
    }
}

/// Ingredient grocery category, inferred by exact keyword lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Veg,
    Carb,
    Legume,
    Other,
}

/// An ingredient node of the emitted graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: CanonicalId,
    pub name: String,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A pairing node of the emitted graph.
///
/// Pairings share the ingredient identifier space: a pairing's id equals one
/// side of an edge's ingredient identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id: CanonicalId,
    pub name: String,
    #[serde(rename = "type")]
    pub pairing_type: PairingType,
    pub nutrition_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

/// A weighted edge of the emitted graph.
///
/// Directionality is presentational only; the underlying relation is
/// symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub ingredient_id: CanonicalId,
    pub pairing_id: CanonicalId,
    pub strength: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    pub techniques: Vec<String>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Flavorgraph pipeline.
///
/// - No silent failures
/// - Use `Result<T, FlavorError>` for fallible operations
/// - The core never panics; all errors are recoverable by the caller
#[derive(Debug, Error)]
pub enum FlavorError {
    /// A recipe record is missing its ingredients or cannot be parsed.
    /// Skippable at batch level, never fatal.
    #[error("Invalid recipe record")]
    InvalidRecipe,

    /// The input file is neither a recognized record format nor the tabular
    /// format. Fatal configuration error, raised before any output.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// A pair-table row could not be parsed.
    #[error("Malformed table row at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred (app layer; the core itself performs no I/O).
    #[error("I/O error: {0}")]
    Io(String),

    /// A configuration value is invalid or a config file cannot be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation_runs() {
        assert_eq!(CanonicalId::from_name("Olive  Oil!").as_str(), "olive-oil");
        assert_eq!(CanonicalId::from_name("--soy sauce--").as_str(), "soy-sauce");
        assert_eq!(CanonicalId::from_name("Crème fraîche").as_str(), "cr-me-fra-che");
    }

    #[test]
    fn slug_of_slug_is_identity() {
        let once = CanonicalId::from_name("Red Wine Vinegar");
        let twice = CanonicalId::from_name(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn pair_key_is_order_independent() {
        let basil = CanonicalId::from_name("basil");
        let tomato = CanonicalId::from_name("tomato");
        let k1 = PairKey::new(basil.clone(), tomato.clone());
        let k2 = PairKey::new(tomato, basil);
        assert_eq!(k1, k2);
        assert_eq!(k1.first().as_str(), "basil");
        assert_eq!(k1.second().as_str(), "tomato");
    }

    #[test]
    fn recipe_mentions_split_delimited_text() {
        let recipe = Recipe {
            title: None,
            ingredients: IngredientField::Text("tomato, basil; garlic\nolive oil".into()),
            cuisine: None,
        };
        assert_eq!(recipe.mentions(), vec!["tomato", "basil", "garlic", "olive oil"]);
    }

    #[test]
    fn recipe_cuisine_tags_lowercased() {
        let recipe = Recipe {
            title: None,
            ingredients: IngredientField::List(vec!["x".into()]),
            cuisine: Some(CuisineField::Many(vec!["Italian".into(), " ".into()])),
        };
        assert_eq!(recipe.cuisine_tags(), vec!["italian"]);
    }

    #[test]
    fn graph_records_serialize_with_lowercase_tags() {
        let pairing = Pairing {
            id: CanonicalId::from_name("basil"),
            name: "basil".into(),
            pairing_type: PairingType::Herb,
            nutrition_tags: vec!["plant-forward".into()],
            allergens: None,
        };
        let json = serde_json::to_string(&pairing).expect("serialize");
        assert!(json.contains("\"type\":\"herb\""));
        assert!(!json.contains("allergens"));
    }
}
