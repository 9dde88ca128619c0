//! # Co-occurrence Miner
//!
//! Consumes a recipe corpus and produces a ranked pair table: per-item and
//! per-pair frequencies, pointwise mutual information, and lift.
//!
//! All accumulators are `BTreeMap`s owned by the single mining pass and
//! discarded when it returns; the miner is a pure batch transformation.

use crate::canon::Canonicalizer;
use crate::normalize::normalize_mention;
use crate::types::{CanonicalId, PairKey, PairRecord, Recipe};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// OPTIONS
// =============================================================================

/// Mining parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineOptions {
    /// When set, only tokens whose canonical id is in this set participate.
    pub whitelist: Option<BTreeSet<CanonicalId>>,
    /// Pairs observed fewer times than this are dropped entirely.
    pub min_count: u64,
    /// Ranked output is truncated to this many rows.
    pub top_n: usize,
    /// Record recipe cuisine tags against every pair the recipe forms.
    pub cuisine_aware: bool,
}

impl Default for MineOptions {
    fn default() -> Self {
        Self {
            whitelist: None,
            min_count: 5,
            top_n: 5000,
            cuisine_aware: true,
        }
    }
}

// =============================================================================
// MINING
// =============================================================================

/// Ranking score: rewards both strength of association and volume of
/// evidence.
fn rank_score(pmi: f64, count: u64) -> f64 {
    pmi * (1.0 + count as f64).log2()
}

/// Mine a recipe corpus into a ranked pair table.
///
/// Per recipe: mentions are normalized and canonicalized, whitelist-filtered,
/// and de-duplicated (multiplicity inside one recipe must not inflate
/// counts). Recipes with fewer than two distinct qualifying ids cannot form a
/// pair and are skipped without contributing to the probability denominator.
///
/// With `D` = number of contributing recipes, each surviving pair gets
/// `pmi = log2(P(AB) / (P(A)*P(B)))` and `lift = P(AB) / (P(A)*P(B))`. When
/// `D == 0` the result is empty - never a division by zero.
#[must_use]
pub fn mine(recipes: &[Recipe], canon: &Canonicalizer, opts: &MineOptions) -> Vec<PairRecord> {
    let mut item_freq: BTreeMap<CanonicalId, u64> = BTreeMap::new();
    let mut pair_freq: BTreeMap<PairKey, u64> = BTreeMap::new();
    let mut pair_cuisines: BTreeMap<PairKey, BTreeSet<String>> = BTreeMap::new();
    let mut display_names: BTreeMap<CanonicalId, String> = BTreeMap::new();
    let mut docs: u64 = 0;

    for recipe in recipes {
        // Distinct canonical ids for this recipe, with their display names.
        let mut uniq: BTreeMap<CanonicalId, String> = BTreeMap::new();
        for mention in recipe.mentions() {
            let Some(token) = normalize_mention(&mention) else {
                continue;
            };
            let name = canon.canonical_name(&token);
            let id = CanonicalId::from_name(&name);
            if id.is_empty() {
                continue;
            }
            if let Some(whitelist) = &opts.whitelist {
                if !whitelist.contains(&id) {
                    continue;
                }
            }
            uniq.entry(id).or_insert(name);
        }

        if uniq.len() < 2 {
            continue;
        }
        docs += 1;

        let cuisines: Vec<String> = if opts.cuisine_aware {
            recipe.cuisine_tags()
        } else {
            Vec::new()
        };

        let ids: Vec<&CanonicalId> = uniq.keys().collect();
        for (id, name) in &uniq {
            *item_freq.entry(id.clone()).or_insert(0) += 1;
            display_names
                .entry(id.clone())
                .or_insert_with(|| name.clone());
        }
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let key = PairKey::new(ids[i].clone(), ids[j].clone());
                *pair_freq.entry(key.clone()).or_insert(0) += 1;
                if !cuisines.is_empty() {
                    pair_cuisines
                        .entry(key)
                        .or_default()
                        .extend(cuisines.iter().cloned());
                }
            }
        }
    }

    if docs == 0 {
        return Vec::new();
    }
    let d = docs as f64;

    let mut rows: Vec<PairRecord> = Vec::new();
    for (key, c_ab) in &pair_freq {
        if *c_ab < opts.min_count {
            continue;
        }
        let c_a = item_freq.get(key.first()).copied().unwrap_or(1);
        let c_b = item_freq.get(key.second()).copied().unwrap_or(1);
        let p_a = c_a as f64 / d;
        let p_b = c_b as f64 / d;
        let p_ab = *c_ab as f64 / d;
        let lift = p_ab / (p_a * p_b);
        let pmi = lift.log2();

        rows.push(PairRecord {
            a_id: key.first().clone(),
            b_id: key.second().clone(),
            a: display_names
                .get(key.first())
                .cloned()
                .unwrap_or_else(|| key.first().to_spaced_name()),
            b: display_names
                .get(key.second())
                .cloned()
                .unwrap_or_else(|| key.second().to_spaced_name()),
            count: *c_ab,
            pmi,
            lift,
            cuisines: pair_cuisines.get(key).cloned().unwrap_or_default(),
        });
    }

    // Composite score descending; ties broken by pair key ascending so the
    // ranking is total and platform-independent.
    rows.sort_by(|x, y| {
        let sx = rank_score(x.pmi, x.count);
        let sy = rank_score(y.pmi, y.count);
        sy.partial_cmp(&sx)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| x.key().cmp(&y.key()))
    });
    rows.truncate(opts.top_n);
    rows
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::AliasTable;

    fn recipe(ingredients: &[&str]) -> Recipe {
        Recipe {
            title: None,
            ingredients: crate::types::IngredientField::List(
                ingredients.iter().map(|s| (*s).to_string()).collect(),
            ),
            cuisine: None,
        }
    }

    fn recipe_with_cuisine(ingredients: &[&str], cuisine: &str) -> Recipe {
        Recipe {
            cuisine: Some(crate::types::CuisineField::One(cuisine.to_string())),
            ..recipe(ingredients)
        }
    }

    fn plain_canon() -> Canonicalizer {
        Canonicalizer::new(AliasTable::empty())
    }

    #[test]
    fn empty_corpus_yields_empty_table() {
        assert!(mine(&[], &plain_canon(), &MineOptions::default()).is_empty());
    }

    #[test]
    fn single_ingredient_recipes_cannot_contribute() {
        let corpus = vec![recipe(&["tomato"]), recipe(&["basil"])];
        let opts = MineOptions {
            min_count: 1,
            ..MineOptions::default()
        };
        assert!(mine(&corpus, &plain_canon(), &opts).is_empty());
    }

    #[test]
    fn duplicate_mentions_do_not_inflate_counts() {
        let corpus = vec![recipe(&["tomato", "tomatoes", "basil"])];
        let opts = MineOptions {
            min_count: 1,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[0].a_id.as_str(), "basil");
        assert_eq!(rows[0].b_id.as_str(), "tomato");
    }

    #[test]
    fn pair_key_order_independent_of_mention_order() {
        let forward = vec![recipe(&["tomato", "basil"])];
        let reverse = vec![recipe(&["basil", "tomato"])];
        let opts = MineOptions {
            min_count: 1,
            ..MineOptions::default()
        };
        let a = mine(&forward, &plain_canon(), &opts);
        let b = mine(&reverse, &plain_canon(), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn pmi_and_lift_match_hand_computation() {
        // 4 recipes, A in 2, B in 2, AB together in 1: D counts only pairing
        // recipes. Build so every recipe forms a pair.
        let corpus = vec![
            recipe(&["a", "b"]),
            recipe(&["a", "c"]),
            recipe(&["b", "c"]),
            recipe(&["c", "d"]),
        ];
        let opts = MineOptions {
            min_count: 1,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        let ab = rows
            .iter()
            .find(|r| r.a_id.as_str() == "a" && r.b_id.as_str() == "b")
            .expect("a-b row");
        // D = 4, freq(a) = 2, freq(b) = 2, c = 1
        let expected_lift = (1.0 / 4.0) / ((2.0 / 4.0) * (2.0 / 4.0));
        assert!((ab.lift - expected_lift).abs() < 1e-12);
        assert!((ab.pmi - expected_lift.log2()).abs() < 1e-12);
    }

    #[test]
    fn min_count_drops_pairs_without_partial_credit() {
        let corpus = vec![
            recipe(&["tomato", "basil"]),
            recipe(&["tomato", "basil"]),
            recipe(&["tomato", "garlic"]),
        ];
        let opts = MineOptions {
            min_count: 2,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key(), PairKey::new(
            CanonicalId::from_name("basil"),
            CanonicalId::from_name("tomato"),
        ));
    }

    #[test]
    fn whitelist_restricts_participating_tokens() {
        let whitelist: BTreeSet<CanonicalId> = ["tomato", "basil"]
            .iter()
            .map(|s| CanonicalId::from_name(s))
            .collect();
        let corpus = vec![recipe(&["tomato", "basil", "garlic"])];
        let opts = MineOptions {
            whitelist: Some(whitelist),
            min_count: 1,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].a_id.as_str(), "basil");
        assert_eq!(rows[0].b_id.as_str(), "tomato");
    }

    #[test]
    fn cuisine_tags_recorded_per_pair() {
        let corpus = vec![
            recipe_with_cuisine(&["tomato", "basil"], "Italian"),
            recipe_with_cuisine(&["tomato", "basil"], "greek"),
        ];
        let opts = MineOptions {
            min_count: 1,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        let cuisines: Vec<&str> = rows[0].cuisines.iter().map(String::as_str).collect();
        assert_eq!(cuisines, vec!["greek", "italian"]);
    }

    #[test]
    fn cuisine_ignored_when_not_cuisine_aware() {
        let corpus = vec![recipe_with_cuisine(&["tomato", "basil"], "italian")];
        let opts = MineOptions {
            min_count: 1,
            cuisine_aware: false,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        assert!(rows[0].cuisines.is_empty());
    }

    #[test]
    fn top_n_truncates_ranked_output() {
        // a-b is exclusive and repeated; c/d/e are mutually diluted, so the
        // a-b pair wins on both pmi and evidence volume.
        let corpus = vec![
            recipe(&["a", "b"]),
            recipe(&["a", "b"]),
            recipe(&["c", "d"]),
            recipe(&["c", "e"]),
            recipe(&["d", "e"]),
        ];
        let opts = MineOptions {
            min_count: 1,
            top_n: 1,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &plain_canon(), &opts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].a_id.as_str(), "a");
        assert_eq!(rows[0].b_id.as_str(), "b");
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn top_n_zero_truncates_to_nothing() {
        let corpus = vec![recipe(&["a", "b"])];
        let opts = MineOptions {
            min_count: 1,
            top_n: 0,
            ..MineOptions::default()
        };
        assert!(mine(&corpus, &plain_canon(), &opts).is_empty());
    }

    #[test]
    fn alias_table_folds_spellings_into_one_pair() {
        let canon = Canonicalizer::new(AliasTable::from_entries([("cilantro", "coriander")]));
        let corpus = vec![
            recipe(&["cilantro", "lime"]),
            recipe(&["corianders", "lime"]),
        ];
        let opts = MineOptions {
            min_count: 2,
            ..MineOptions::default()
        };
        let rows = mine(&corpus, &canon, &opts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].a_id.as_str(), "coriander");
    }
}
