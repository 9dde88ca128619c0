//! # Pairing Suggestions
//!
//! Scores candidate ingredients against a set of wanted ingredients using
//! the canonical pair table, and finds corpus recipes that overlap the
//! chosen set. This is the read-side query the planner front end calls; the
//! scoring is a simple composite, not a model.

use crate::canon::Canonicalizer;
use crate::formats::round3;
use crate::normalize::normalize_mention;
use crate::types::{CanonicalId, PairRecord, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A ranked candidate ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub ingredient: CanonicalId,
    pub score: f64,
}

/// A corpus recipe overlapping the chosen ingredient set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub title: Option<String>,
    pub overlap: usize,
    pub ingredients: Vec<String>,
    pub cuisine: Option<String>,
}

/// Rank candidate ingredients connected to any wanted ingredient.
///
/// Every pair row touching a wanted id credits the other side with
/// `lift * 2 + pmi`, plus 1 when the row's cuisines match the requested
/// cuisine. Already-wanted ingredients are excluded from the result. Scores
/// are rounded to three decimals; ties order by id.
#[must_use]
pub fn suggest(
    rows: &[PairRecord],
    wanted: &BTreeSet<CanonicalId>,
    cuisine: Option<&str>,
    top_n: usize,
) -> Vec<Suggestion> {
    let cuisine = cuisine.map(str::to_lowercase).filter(|c| !c.is_empty());
    let mut scores: BTreeMap<CanonicalId, f64> = BTreeMap::new();

    for row in rows {
        let mut candidates: Vec<&CanonicalId> = Vec::new();
        if wanted.contains(&row.a_id) {
            candidates.push(&row.b_id);
        }
        if wanted.contains(&row.b_id) {
            candidates.push(&row.a_id);
        }
        if candidates.is_empty() {
            continue;
        }
        let base = row.lift * 2.0 + row.pmi;
        let bonus = match &cuisine {
            Some(c) => {
                if row.cuisines.iter().any(|tag| tag.contains(c)) {
                    1.0
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
        for candidate in candidates {
            *scores.entry(candidate.clone()).or_insert(0.0) += base + bonus;
        }
    }

    let mut ranked: Vec<Suggestion> = scores
        .into_iter()
        .filter(|(id, _)| !wanted.contains(id))
        .map(|(ingredient, score)| Suggestion {
            ingredient,
            score: round3(score),
        })
        .collect();
    ranked.sort_by(|x, y| {
        y.score
            .partial_cmp(&x.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| x.ingredient.cmp(&y.ingredient))
    });
    ranked.truncate(top_n);
    ranked
}

/// Find corpus recipes sharing at least two ingredients with the chosen set.
///
/// Mentions are canonicalized with the same pipeline the miner uses, so
/// surface spellings match the chosen ids. Ranked by overlap descending.
#[must_use]
pub fn match_recipes(
    recipes: &[Recipe],
    chosen: &BTreeSet<CanonicalId>,
    canon: &Canonicalizer,
    limit: usize,
) -> Vec<RecipeMatch> {
    let mut matches: Vec<RecipeMatch> = Vec::new();
    for recipe in recipes {
        let mentions = recipe.mentions();
        let ids: BTreeSet<CanonicalId> = mentions
            .iter()
            .filter_map(|m| normalize_mention(m))
            .map(|token| canon.canonical_id(&token))
            .filter(|id| !id.is_empty())
            .collect();
        let overlap = ids.intersection(chosen).count();
        if overlap < 2 {
            continue;
        }
        matches.push(RecipeMatch {
            title: recipe.title.clone(),
            overlap,
            ingredients: mentions.iter().map(|m| m.to_lowercase()).collect(),
            cuisine: recipe.cuisine_tags().first().cloned(),
        });
    }
    matches.sort_by(|x, y| y.overlap.cmp(&x.overlap));
    matches.truncate(limit);
    matches
}

// =============================================================================
// TESTS
// =============================================================================
