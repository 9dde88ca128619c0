//! # Graph Builder
//!
//! Joins the canonical pair table with curated ingredient metadata and emits
//! the three ordered graph collections: ingredients, pairings, edges.
//!
//! Deterministic and side-effect-free: same metadata + same table -> same
//! collections, byte for byte once serialized.

use crate::classify::Lexicon;
use crate::formats::graph::GraphRecord;
use crate::formats::manifest::ArtifactCounts;
use crate::normalize::title_case;
use crate::types::{CanonicalId, GraphEdge, Ingredient, PairRecord, Pairing};
use std::collections::BTreeSet;

/// Note attached to ingredients discovered in the corpus without curated
/// metadata.
pub const CORPUS_NOTE: &str = "Auto-added from corpus";

// =============================================================================
// METADATA INPUT
// =============================================================================

/// A curated ingredient metadata row (already materialized by the caller;
/// acquisition from external knowledge sources is not the core's concern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientMeta {
    pub id: CanonicalId,
    pub name: String,
}

// =============================================================================
// STRENGTH BUCKETS
// =============================================================================

/// Discretize lift into the 1-5 edge strength.
#[must_use]
pub fn strength_from_lift(lift: f64) -> u8 {
    if lift >= 8.0 {
        5
    } else if lift >= 4.0 {
        4
    } else if lift >= 2.0 {
        3
    } else if lift >= 1.25 {
        2
    } else {
        1
    }
}

// =============================================================================
// CUISINE TALLY
// =============================================================================

/// Per-token cuisine counts with first-seen ordering.
///
/// Ties break toward the cuisine seen first for that token; the ordering is
/// an input-order artifact, documented rather than meaningful.
#[derive(Debug, Default)]
struct CuisineTally {
    by_token: std::collections::BTreeMap<String, Vec<(String, u64)>>,
}

impl CuisineTally {
    fn from_rows(rows: &[PairRecord]) -> Self {
        let mut tally = Self::default();
        for row in rows {
            for token in [row.a.to_lowercase(), row.b.to_lowercase()] {
                if token.is_empty() {
                    continue;
                }
                let counts = tally.by_token.entry(token).or_default();
                for cuisine in &row.cuisines {
                    match counts.iter_mut().find(|(c, _)| c == cuisine) {
                        Some((_, n)) => *n += 1,
                        None => counts.push((cuisine.clone(), 1)),
                    }
                }
            }
        }
        tally
    }

    /// The highest-tally cuisine for a token, first-seen on ties.
    fn top(&self, token: &str) -> Option<String> {
        let counts = self.by_token.get(&token.to_lowercase())?;
        let mut best: Option<(&str, u64)> = None;
        for (cuisine, n) in counts {
            if best.is_none_or(|(_, best_n)| *n > best_n) {
                best = Some((cuisine, *n));
            }
        }
        best.map(|(cuisine, _)| cuisine.to_string())
    }
}

// =============================================================================
// GRAPH
// =============================================================================

/// The terminal graph artifact: three sorted collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlavorGraph {
    pub ingredients: Vec<Ingredient>,
    pub pairings: Vec<Pairing>,
    pub edges: Vec<GraphEdge>,
}

impl FlavorGraph {
    /// The combined record stream, in the contractual order:
    /// Ingredients, then Pairings, then Edges.
    #[must_use]
    pub fn records(&self) -> Vec<GraphRecord> {
        let mut records =
            Vec::with_capacity(self.ingredients.len() + self.pairings.len() + self.edges.len());
        records.extend(self.ingredients.iter().cloned().map(GraphRecord::Ingredient));
        records.extend(self.pairings.iter().cloned().map(GraphRecord::Pairing));
        records.extend(self.edges.iter().cloned().map(GraphRecord::Edge));
        records
    }

    /// Collection sizes for the manifest.
    #[must_use]
    pub fn counts(&self) -> ArtifactCounts {
        ArtifactCounts {
            ingredients: self.ingredients.len(),
            pairings: self.pairings.len(),
            edges: self.edges.len(),
        }
    }
}

/// Build the graph from metadata and the canonical pair table.
#[must_use]
pub fn build(meta: &[IngredientMeta], rows: &[PairRecord], lexicon: &Lexicon) -> FlavorGraph {
    let tally = CuisineTally::from_rows(rows);

    // Ingredients: curated metadata first (dedup by id, first occurrence
    // wins), then corpus-derived tokens absent from metadata.
    let mut ingredient_ids: BTreeSet<CanonicalId> = BTreeSet::new();
    let mut ingredients: Vec<Ingredient> = Vec::new();
    for m in meta {
        if m.id.is_empty() || !ingredient_ids.insert(m.id.clone()) {
            continue;
        }
        ingredients.push(Ingredient {
            id: m.id.clone(),
            name: m.name.clone(),
            category: lexicon.ingredient_category(&m.name),
            default_cuisine: tally.top(&m.name),
            notes: None,
        });
    }

    // Token discovery preserves first-seen order across rows (a before b).
    let mut seen_tokens: BTreeSet<String> = BTreeSet::new();
    let mut token_order: Vec<String> = Vec::new();
    for row in rows {
        for token in [row.a.to_lowercase(), row.b.to_lowercase()] {
            if !token.is_empty() && seen_tokens.insert(token.clone()) {
                token_order.push(token);
            }
        }
    }
    for token in &token_order {
        let id = CanonicalId::from_name(token);
        if id.is_empty() || !ingredient_ids.insert(id.clone()) {
            continue;
        }
        let name = title_case(token);
        ingredients.push(Ingredient {
            id,
            category: lexicon.ingredient_category(&name),
            default_cuisine: tally.top(token),
            name,
            notes: Some(CORPUS_NOTE.to_string()),
        });
    }
    ingredients.sort_by(|x, y| x.id.cmp(&y.id));

    // Pairings: both sides of every row, first occurrence wins.
    let mut pairing_ids: BTreeSet<CanonicalId> = BTreeSet::new();
    let mut pairings: Vec<Pairing> = Vec::new();
    let mut add_pairing = |id: &CanonicalId, name: &str| {
        if id.is_empty() || !pairing_ids.insert(id.clone()) {
            return;
        }
        let pairing_type = lexicon.pairing_type(name);
        let allergens = lexicon.allergens(name);
        pairings.push(Pairing {
            id: id.clone(),
            name: name.to_string(),
            pairing_type,
            nutrition_tags: lexicon.nutrition_tags(pairing_type),
            allergens: if allergens.is_empty() {
                None
            } else {
                Some(allergens)
            },
        });
    };
    for row in rows {
        add_pairing(&row.a_id, &row.a);
        add_pairing(&row.b_id, &row.b);
    }
    pairings.sort_by(|x, y| x.id.cmp(&y.id));

    // Edges: one per canonical row; the (ingredient_id, pairing_id) key is
    // unique in the output even if the input table was never merged.
    let mut edge_keys: BTreeSet<(CanonicalId, CanonicalId)> = BTreeSet::new();
    let mut edges: Vec<GraphEdge> = Vec::new();
    for row in rows {
        if row.a_id.is_empty() || row.b_id.is_empty() {
            continue;
        }
        if !edge_keys.insert((row.a_id.clone(), row.b_id.clone())) {
            continue;
        }
        edges.push(GraphEdge {
            ingredient_id: row.a_id.clone(),
            pairing_id: row.b_id.clone(),
            strength: strength_from_lift(row.lift),
            cuisines: if row.cuisines.is_empty() {
                None
            } else {
                Some(row.cuisines.iter().cloned().collect())
            },
            techniques: Vec::new(),
        });
    }
    edges.sort_by(|x, y| {
        (&x.ingredient_id, &x.pairing_id).cmp(&(&y.ingredient_id, &y.pairing_id))
    });

    FlavorGraph {
        ingredients,
        pairings,
        edges,
    }
}

// =============================================================================
// TESTS
// =============================================================================
