//! # flavorgraph-core
//!
//! The deterministic flavor-graph engine - THE LOGIC.
//!
//! This crate turns a recipe corpus into a reproducible pairing graph:
//! co-occurrence mining (PMI/lift), canonicalization and merge of pair
//! tables, and graph construction with heuristic classification.
//!
//! ## Pipeline
//!
//! ```text
//! recipes -> [miner] -> raw pair table -> [merge] -> canonical pair table
//!                                                        |
//!                                           [builder] ---+--> graph
//!                                        (ingredients, pairings, edges)
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no async, no network, no file I/O, no clocks
//! - Deterministic: BTreeMap/BTreeSet accumulators only; floats are rounded
//!   to fixed precision at every serialization boundary, so identical input
//!   produces byte-identical artifacts
//! - Closed: alias tables and keyword lexicons are explicit inputs, never
//!   ambient state

// =============================================================================
// MODULES
// =============================================================================

pub mod builder;
pub mod canon;
pub mod classify;
pub mod formats;
pub mod merge;
pub mod miner;
pub mod normalize;
pub mod report;
pub mod suggest;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    CanonicalId, CuisineField, FlavorError, GraphEdge, Ingredient, IngredientCategory,
    IngredientField, PairKey, PairRecord, Pairing, PairingType, Recipe,
};

// =============================================================================
// RE-EXPORTS: Pipeline Stages
// =============================================================================

pub use builder::{FlavorGraph, IngredientMeta, build, strength_from_lift};
pub use canon::{AliasTable, Canonicalizer, singularize};
pub use classify::Lexicon;
pub use merge::{PairAggregate, merge};
pub use miner::{MineOptions, mine};
pub use normalize::{normalize_mention, split_mentions, title_case};
pub use report::{CuisineSection, pair_score, top_by_cuisine, top_overall};
pub use suggest::{RecipeMatch, Suggestion, match_recipes, suggest};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::graph::GraphRecord;
pub use formats::manifest::{ArtifactCounts, Manifest, ManifestFiles, MineParams};
pub use formats::pair_table::RawPairRow;
pub use formats::recipes::{RecipeBatch, SourceKind, fingerprint, parse_batch};
