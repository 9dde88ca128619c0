//! # Merge / Dedupe Stage
//!
//! Re-canonicalizes an existing pair table against the CURRENT alias table
//! and collapses rows that now share a pair key. Running the stage on its own
//! output is a fixed point: `merge(merge(T)) == merge(T)`.
//!
//! The aggregation policy is an explicit reducer ([`PairAggregate::absorb`]):
//! counts sum, pmi/lift keep the maximum observed, cuisines union. Sources
//! disagree in scale (different corpora, different denominators), so a single
//! strong signal is treated as sufficient evidence rather than being diluted
//! into an average.

use crate::canon::Canonicalizer;
use crate::formats::pair_table::RawPairRow;
use crate::formats::round4;
use crate::types::{CanonicalId, PairKey, PairRecord};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// REDUCER
// =============================================================================

/// Accumulated state for one canonical pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAggregate {
    a_id: CanonicalId,
    b_id: CanonicalId,
    a: String,
    b: String,
    count: u64,
    pmi: f64,
    lift: f64,
    cuisines: BTreeSet<String>,
}

impl PairAggregate {
    /// Start an aggregate for a pair with its canonical display names.
    ///
    /// The numeric seeds are the neutral fallbacks: count 0, pmi 0, lift 1.
    /// Max-merging against these floors pmi at 0 and lift at 1 in the output.
    #[must_use]
    pub fn new(a_id: CanonicalId, b_id: CanonicalId, a: String, b: String) -> Self {
        Self {
            a_id,
            b_id,
            a,
            b,
            count: 0,
            pmi: 0.0,
            lift: 1.0,
            cuisines: BTreeSet::new(),
        }
    }

    /// Fold one source row into the aggregate.
    ///
    /// - `count` sums; a row with a missing or zero count still contributes
    ///   presence (1)
    /// - `pmi`/`lift` keep the maximum (missing values fall back to 0 / 1)
    /// - `cuisines` union
    pub fn absorb(&mut self, row: &RawPairRow) {
        let count = row.count.filter(|c| *c > 0).unwrap_or(1);
        self.count = self.count.saturating_add(count);
        self.pmi = self.pmi.max(row.pmi.unwrap_or(0.0));
        self.lift = self.lift.max(row.lift.unwrap_or(1.0));
        self.cuisines.extend(row.cuisines.iter().cloned());
    }

    /// Finish the aggregate as a canonical record, floats at fixed precision.
    #[must_use]
    pub fn into_record(self) -> PairRecord {
        PairRecord {
            a_id: self.a_id,
            b_id: self.b_id,
            a: self.a,
            b: self.b,
            count: self.count,
            pmi: round4(self.pmi),
            lift: round4(self.lift),
            cuisines: self.cuisines,
        }
    }
}

// =============================================================================
// MERGE
// =============================================================================

/// Merge a pair table into one canonical row per pair key.
///
/// Both sides of every row are re-canonicalized with the current alias table,
/// which lets an alias update retroactively reconcile previously-mined rows.
/// Display names are replaced by the canonical names. Rows with no resolvable
/// name on either side are dropped.
///
/// Output is sorted by `(a_id, b_id)`; with fixed-precision floats this
/// ordering is the byte-stable on-disk contract.
#[must_use]
pub fn merge(rows: &[RawPairRow], canon: &Canonicalizer) -> Vec<PairRecord> {
    let mut groups: BTreeMap<PairKey, PairAggregate> = BTreeMap::new();

    for row in rows {
        let (Some(a_raw), Some(b_raw)) = row.side_names() else {
            continue;
        };
        let a_name = canon.canonical_name(&a_raw);
        let b_name = canon.canonical_name(&b_raw);
        let a_id = CanonicalId::from_name(&a_name);
        let b_id = CanonicalId::from_name(&b_name);
        if a_id.is_empty() || b_id.is_empty() {
            continue;
        }

        // Arrange names to match the key's id ordering.
        let key = PairKey::new(a_id.clone(), b_id.clone());
        let (first_name, second_name) = if *key.first() == a_id {
            (a_name, b_name)
        } else {
            (b_name, a_name)
        };

        groups
            .entry(key.clone())
            .or_insert_with(|| {
                PairAggregate::new(
                    key.first().clone(),
                    key.second().clone(),
                    first_name,
                    second_name,
                )
            })
            .absorb(row);
    }

    // BTreeMap iteration is already (a_id, b_id) order.
    groups.into_values().map(PairAggregate::into_record).collect()
}

// =============================================================================
// TESTS
// =============================================================================
