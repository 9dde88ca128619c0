//! # Property-Based Tests
//!
//! Determinism and idempotence invariants of the pipeline, checked with
//! proptest over generated corpora and tables.

#![allow(clippy::unwrap_used, clippy::panic)]

use flavorgraph_core::{
    AliasTable, CanonicalId, Canonicalizer, IngredientField, MineOptions, PairKey, Recipe,
    RawPairRow, merge, mine, singularize,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn plain_canon() -> Canonicalizer {
    Canonicalizer::new(AliasTable::empty())
}

fn token_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}"
}

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    vec(token_strategy(), 0..6).prop_map(|ingredients| Recipe {
        title: None,
        ingredients: IngredientField::List(ingredients),
        cuisine: None,
    })
}

fn raw_row_strategy() -> impl Strategy<Value = RawPairRow> {
    (
        token_strategy(),
        token_strategy(),
        proptest::option::of(0u64..50),
        proptest::option::of(-4.0f64..8.0),
        proptest::option::of(0.0f64..16.0),
        vec("[a-z]{3,8}", 0..3),
    )
        .prop_map(|(a, b, count, pmi, lift, cuisines)| RawPairRow {
            a_id: None,
            b_id: None,
            a: Some(a),
            b: Some(b),
            count,
            pmi,
            lift,
            cuisines,
        })
}

proptest! {
    /// Mining the same corpus twice produces identical tables.
    #[test]
    fn mining_is_deterministic(recipes in vec(recipe_strategy(), 0..20)) {
        let opts = MineOptions { min_count: 1, ..MineOptions::default() };
        let first = mine(&recipes, &plain_canon(), &opts);
        let second = mine(&recipes, &plain_canon(), &opts);
        prop_assert_eq!(first, second);
    }

    /// Reversing the corpus order cannot change pair keys or counts.
    #[test]
    fn mining_counts_ignore_corpus_order(recipes in vec(recipe_strategy(), 0..20)) {
        let opts = MineOptions { min_count: 1, ..MineOptions::default() };
        let forward = mine(&recipes, &plain_canon(), &opts);
        let mut reversed_corpus = recipes.clone();
        reversed_corpus.reverse();
        let reversed = mine(&reversed_corpus, &plain_canon(), &opts);

        let key_counts = |rows: &[flavorgraph_core::PairRecord]| {
            let mut kc: Vec<(PairKey, u64)> = rows.iter().map(|r| (r.key(), r.count)).collect();
            kc.sort();
            kc
        };
        prop_assert_eq!(key_counts(&forward), key_counts(&reversed));
    }

    /// Pair keys always hold the lexicographically smaller id first.
    #[test]
    fn pair_keys_are_ordered(a in token_strategy(), b in token_strategy()) {
        let key = PairKey::new(CanonicalId::from_name(&a), CanonicalId::from_name(&b));
        prop_assert!(key.first() <= key.second());
    }

    /// Slugification is idempotent.
    #[test]
    fn slug_is_idempotent(name in "[a-zA-Z0-9 ,.'-]{0,24}") {
        let once = CanonicalId::from_name(&name);
        let twice = CanonicalId::from_name(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// Singularization never grows a word by more than the `ies -> y` rule
    /// allows, and never panics on short tokens.
    #[test]
    fn singularize_total(token in "[a-z]{0,12}") {
        let out = singularize(&token);
        prop_assert!(out.len() <= token.len().max(1));
    }

    /// merge(merge(T)) == merge(T), field for field.
    #[test]
    fn merge_is_idempotent(rows in vec(raw_row_strategy(), 0..24)) {
        let canon = plain_canon();
        let once = merge(&rows, &canon);
        let raw_again: Vec<RawPairRow> = once.iter().map(RawPairRow::from_record).collect();
        let twice = merge(&raw_again, &canon);
        prop_assert_eq!(once, twice);
    }

    /// Merged output is strictly sorted by (a_id, b_id) with unique keys.
    #[test]
    fn merge_output_sorted_unique(rows in vec(raw_row_strategy(), 0..24)) {
        let merged = merge(&rows, &plain_canon());
        for pair in merged.windows(2) {
            prop_assert!(
                (&pair[0].a_id, &pair[0].b_id) < (&pair[1].a_id, &pair[1].b_id)
            );
        }
    }

    /// Merge count conservation: every input row contributes at least 1.
    #[test]
    fn merge_counts_cover_inputs(rows in vec(raw_row_strategy(), 1..24)) {
        let merged = merge(&rows, &plain_canon());
        let total: u64 = merged.iter().map(|r| r.count).sum();
        prop_assert!(total >= merged.len() as u64);
        let input_floor: u64 = rows
            .iter()
            .map(|r| r.count.filter(|c| *c > 0).unwrap_or(1))
            .sum();
        prop_assert_eq!(total, input_floor);
    }
}
