//! # Pair Table Format
//!
//! The tabular stage artifact produced by the miner and consumed/produced by
//! the merge stage. Columns:
//!
//! ```text
//! a_id,b_id,a,b,count,pmi,lift,cuisines
//! ```
//!
//! `cuisines` is a single cell with entries joined by `|`. Decoding is
//! lenient - missing or unparsable cells surface as `None` so each consumer
//! can apply its documented fallback - while encoding is strict and
//! fixed-precision so the table is byte-stable across runs.

use super::{csv, format_fixed4};
use crate::types::{CanonicalId, FlavorError, PairRecord};
use std::collections::BTreeMap;

/// Column order of the encoded table.
pub const HEADERS: [&str; 8] = ["a_id", "b_id", "a", "b", "count", "pmi", "lift", "cuisines"];

// =============================================================================
// RAW ROW (lenient decode)
// =============================================================================

/// A decoded pair-table row before fallback resolution.
///
/// Rows may come from older runs or manual edits, so every cell is optional;
/// the merge stage and [`RawPairRow::coerce`] apply the fallbacks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPairRow {
    pub a_id: Option<String>,
    pub b_id: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub count: Option<u64>,
    pub pmi: Option<f64>,
    pub lift: Option<f64>,
    pub cuisines: Vec<String>,
}

impl RawPairRow {
    /// Re-encode a canonical record as a raw row (used to feed merge output
    /// back through the merge stage).
    #[must_use]
    pub fn from_record(record: &PairRecord) -> Self {
        Self {
            a_id: Some(record.a_id.to_string()),
            b_id: Some(record.b_id.to_string()),
            a: Some(record.a.clone()),
            b: Some(record.b.clone()),
            count: Some(record.count),
            pmi: Some(record.pmi),
            lift: Some(record.lift),
            cuisines: record.cuisines.iter().cloned().collect(),
        }
    }

    /// The display names of the two sides, falling back to de-hyphenated ids.
    /// `None` for a side with neither a name nor an id.
    #[must_use]
    pub fn side_names(&self) -> (Option<String>, Option<String>) {
        let resolve = |name: &Option<String>, id: &Option<String>| {
            name.clone().filter(|n| !n.is_empty()).or_else(|| {
                id.clone()
                    .filter(|i| !i.is_empty())
                    .map(|i| i.replace('-', " "))
            })
        };
        (
            resolve(&self.a, &self.a_id),
            resolve(&self.b, &self.b_id),
        )
    }

    /// Resolve the row into a typed record with the standard fallbacks:
    /// ids re-derived from names where absent, `count` 0, `pmi` 0, `lift` 1.
    ///
    /// Returns `None` when a side has neither a name nor an id.
    #[must_use]
    pub fn coerce(&self) -> Option<PairRecord> {
        let (a_name, b_name) = self.side_names();
        let a = a_name?;
        let b = b_name?;
        let a_id = match &self.a_id {
            Some(id) if !id.is_empty() => CanonicalId::from_slug(id.clone()),
            _ => CanonicalId::from_name(&a),
        };
        let b_id = match &self.b_id {
            Some(id) if !id.is_empty() => CanonicalId::from_slug(id.clone()),
            _ => CanonicalId::from_name(&b),
        };
        Some(PairRecord {
            a_id,
            b_id,
            a,
            b,
            count: self.count.unwrap_or(0),
            pmi: self.pmi.unwrap_or(0.0),
            lift: self.lift.unwrap_or(1.0),
            cuisines: self.cuisines.iter().cloned().collect(),
        })
    }
}

// =============================================================================
// DECODE / ENCODE
// =============================================================================

fn opt_cell(row: &BTreeMap<String, String>, name: &str) -> Option<String> {
    row.get(name).filter(|v| !v.is_empty()).cloned()
}

/// Decode pair-table CSV text into raw rows.
///
/// Works with either schema: full `a_id,b_id,a,b,...` tables and older
/// name-only `a,b,...` tables.
pub fn decode(text: &str) -> Result<Vec<RawPairRow>, FlavorError> {
    let rows = csv::parse_rows(text)?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(RawPairRow {
            a_id: opt_cell(&row, "a_id"),
            b_id: opt_cell(&row, "b_id"),
            a: opt_cell(&row, "a"),
            b: opt_cell(&row, "b"),
            count: opt_cell(&row, "count").and_then(|v| v.parse().ok()),
            pmi: opt_cell(&row, "pmi").and_then(|v| v.parse().ok()),
            lift: opt_cell(&row, "lift").and_then(|v| v.parse().ok()),
            cuisines: row
                .get("cuisines")
                .map(|cell| {
                    cell.split('|')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        });
    }
    Ok(out)
}

/// Encode canonical records as pair-table CSV.
///
/// `pmi`/`lift` are written with exactly four decimal digits; this is the
/// byte-stable on-disk contract.
#[must_use]
pub fn encode(records: &[PairRecord]) -> String {
    csv::write_rows(
        &HEADERS,
        records.iter().map(|r| {
            vec![
                r.a_id.to_string(),
                r.b_id.to_string(),
                r.a.clone(),
                r.b.clone(),
                r.count.to_string(),
                format_fixed4(r.pmi),
                format_fixed4(r.lift),
                r.cuisines.iter().cloned().collect::<Vec<_>>().join("|"),
            ]
        }),
    )
}

// =============================================================================
// TESTS
// =============================================================================
