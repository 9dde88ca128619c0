//! End-to-end pipeline tests: mine -> merge -> build over small constructed
//! corpora, checking the statistical and ordering contracts a downstream
//! consumer relies on.

#![allow(clippy::unwrap_used, clippy::panic)]

use flavorgraph_core::{
    AliasTable, CanonicalId, Canonicalizer, IngredientField, Lexicon, MineOptions, PairKey, Recipe,
    RawPairRow, build, formats::pair_table, merge, mine,
};
use std::collections::BTreeSet;

fn recipe(ingredients: &[&str]) -> Recipe {
    Recipe {
        title: None,
        ingredients: IngredientField::List(ingredients.iter().map(|s| (*s).to_string()).collect()),
        cuisine: None,
    }
}

fn plain_canon() -> Canonicalizer {
    Canonicalizer::new(AliasTable::empty())
}

/// The four-recipe corpus of the end-to-end scenario: every item appears in
/// 3 of 4 recipes, every pair co-occurs twice.
fn symmetric_corpus() -> Vec<Recipe> {
    vec![
        recipe(&["tomato", "basil", "garlic"]),
        recipe(&["tomato", "basil"]),
        recipe(&["tomato", "garlic"]),
        recipe(&["basil", "garlic"]),
    ]
}

// =============================================================================
// MINING CONTRACTS
// =============================================================================

#[test]
fn end_to_end_symmetric_corpus_equal_lift() {
    let rows = mine(
        &symmetric_corpus(),
        &plain_canon(),
        &MineOptions {
            min_count: 2,
            ..MineOptions::default()
        },
    );

    assert_eq!(rows.len(), 3, "all three pairs qualify");
    // D = 4, each item in 3 recipes, each pair in 2:
    // lift = (2/4) / ((3/4)*(3/4)) = 8/9
    let expected_lift = (2.0 / 4.0) / ((3.0 / 4.0) * (3.0 / 4.0));
    for row in &rows {
        assert_eq!(row.count, 2);
        assert!((row.lift - expected_lift).abs() < 1e-12, "row {:?}", row.key());
        assert!((row.pmi - expected_lift.log2()).abs() < 1e-12);
    }

    let keys: BTreeSet<PairKey> = rows.iter().map(|r| r.key()).collect();
    let expect_key = |a: &str, b: &str| {
        PairKey::new(CanonicalId::from_name(a), CanonicalId::from_name(b))
    };
    assert!(keys.contains(&expect_key("tomato", "basil")));
    assert!(keys.contains(&expect_key("tomato", "garlic")));
    assert!(keys.contains(&expect_key("basil", "garlic")));
}

#[test]
fn min_count_three_empties_the_symmetric_corpus() {
    let rows = mine(
        &symmetric_corpus(),
        &plain_canon(),
        &MineOptions {
            min_count: 3,
            ..MineOptions::default()
        },
    );
    assert!(rows.is_empty());
}

#[test]
fn pair_key_symmetry_across_mention_order() {
    let opts = MineOptions {
        min_count: 1,
        ..MineOptions::default()
    };
    let forward = mine(
        &[recipe(&["miso", "scallion", "ginger"])],
        &plain_canon(),
        &opts,
    );
    let shuffled = mine(
        &[recipe(&["ginger", "miso", "scallion"])],
        &plain_canon(),
        &opts,
    );
    assert_eq!(forward, shuffled);
}

#[test]
fn lift_matches_hand_computation_on_skewed_corpus() {
    // N = 5 contributing recipes; a in 4, b in 3, together in 2.
    let corpus = vec![
        recipe(&["a", "b", "x"]),
        recipe(&["a", "b", "y"]),
        recipe(&["a", "x"]),
        recipe(&["a", "y"]),
        recipe(&["b", "x"]),
    ];
    let rows = mine(
        &corpus,
        &plain_canon(),
        &MineOptions {
            min_count: 1,
            ..MineOptions::default()
        },
    );
    let ab = rows
        .iter()
        .find(|r| r.a_id.as_str() == "a" && r.b_id.as_str() == "b")
        .unwrap();
    let expected = (2.0 / 5.0) / ((4.0 / 5.0) * (3.0 / 5.0));
    assert!((ab.lift - expected).abs() < 1e-12);
    assert!((ab.pmi - expected.log2()).abs() < 1e-12);
    assert!((ab.lift - 2f64.powf(ab.pmi)).abs() < 1e-9);
}

// =============================================================================
// MERGE CONTRACTS
// =============================================================================

#[test]
fn merge_aggregation_example() {
    let rows = vec![
        RawPairRow {
            a: Some("tomato".into()),
            b: Some("basil".into()),
            count: Some(3),
            pmi: Some(1.0),
            lift: Some(2.0),
            cuisines: vec!["italian".into()],
            ..RawPairRow::default()
        },
        RawPairRow {
            a: Some("tomato".into()),
            b: Some("basil".into()),
            count: Some(5),
            pmi: Some(2.0),
            lift: Some(1.5),
            cuisines: vec!["mexican".into()],
            ..RawPairRow::default()
        },
    ];
    let merged = merge(&rows, &plain_canon());
    assert_eq!(merged.len(), 1);
    let rec = &merged[0];
    assert_eq!(rec.count, 8);
    assert_eq!(rec.pmi, 2.0);
    assert_eq!(rec.lift, 2.0);
    let cuisines: Vec<&str> = rec.cuisines.iter().map(String::as_str).collect();
    assert_eq!(cuisines, vec!["italian", "mexican"]);
}

#[test]
fn mined_table_survives_merge_roundtrip_byte_identically() {
    // mine -> encode -> decode -> merge -> encode must be a fixed point of
    // decode -> merge -> encode.
    let corpus = vec![
        recipe(&["tomato", "basil", "garlic"]),
        recipe(&["tomato", "basil"]),
        recipe(&["garlic", "olive oil", "tomato"]),
        recipe(&["basil", "olive oil"]),
    ];
    let mined = mine(
        &corpus,
        &plain_canon(),
        &MineOptions {
            min_count: 1,
            ..MineOptions::default()
        },
    );

    let raw: Vec<RawPairRow> = mined.iter().map(RawPairRow::from_record).collect();
    let once = merge(&raw, &plain_canon());
    let once_text = pair_table::encode(&once);

    let decoded = pair_table::decode(&once_text).unwrap();
    let twice = merge(&decoded, &plain_canon());
    let twice_text = pair_table::encode(&twice);

    assert_eq!(once_text, twice_text);
}

// =============================================================================
// FULL PIPELINE
// =============================================================================

#[test]
fn full_pipeline_produces_ordered_graph() {
    let corpus = vec![
        recipe(&["tomato", "basil"]),
        recipe(&["tomato", "basil"]),
        recipe(&["tomato", "feta"]),
    ];
    let mined = mine(
        &corpus,
        &plain_canon(),
        &MineOptions {
            min_count: 1,
            ..MineOptions::default()
        },
    );
    let raw: Vec<RawPairRow> = mined.iter().map(RawPairRow::from_record).collect();
    let canonical = merge(&raw, &plain_canon());
    let graph = build(&[], &canonical, &Lexicon::default());

    // Nodes cover every id referenced by an edge, and ids are sorted.
    let ingredient_ids: Vec<&str> = graph
        .ingredients
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ingredient_ids, vec!["basil", "feta", "tomato"]);
    let pairing_ids: Vec<&str> = graph.pairings.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(pairing_ids, vec!["basil", "feta", "tomato"]);

    for edge in &graph.edges {
        assert!(ingredient_ids.contains(&edge.ingredient_id.as_str()));
        assert!(pairing_ids.contains(&edge.pairing_id.as_str()));
        assert!((1..=5).contains(&edge.strength));
    }

    // Edge keys unique and sorted.
    let mut keys: Vec<(String, String)> = graph
        .edges
        .iter()
        .map(|e| (e.ingredient_id.to_string(), e.pairing_id.to_string()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys.len(), sorted.len());
    keys.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn alias_driven_remine_matches_remerge() {
    // Mining with an alias table and merging an alias-free mine with the same
    // table agree on the canonical pair keys.
    let corpus = vec![
        recipe(&["cilantro", "lime"]),
        recipe(&["coriander", "lime"]),
    ];
    let aliased = Canonicalizer::new(AliasTable::from_entries([("cilantro", "coriander")]));

    let direct = mine(
        &corpus,
        &aliased,
        &MineOptions {
            min_count: 2,
            ..MineOptions::default()
        },
    );
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].count, 2);

    let unaliased = mine(
        &corpus,
        &plain_canon(),
        &MineOptions {
            min_count: 1,
            ..MineOptions::default()
        },
    );
    let raw: Vec<RawPairRow> = unaliased.iter().map(RawPairRow::from_record).collect();
    let reconciled = merge(&raw, &aliased);
    assert_eq!(reconciled.len(), 1);
    assert_eq!(reconciled[0].key(), direct[0].key());
    assert_eq!(reconciled[0].count, 2);
}
