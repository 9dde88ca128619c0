//! # Top-Pairs Report Model
//!
//! Pure scoring and grouping behind the HTML report: strongest pairs overall
//! and per cuisine. Rendering lives in the app.

use crate::types::PairRecord;
use std::collections::BTreeSet;

/// Report score: `lift * ln(1 + count)`.
///
/// Natural log, unlike the miner's base-2 ranking composite; the report
/// favors lift over pmi because it is the human-readable ratio.
#[must_use]
pub fn pair_score(lift: f64, count: u64) -> f64 {
    lift * (1.0 + count as f64).ln()
}

fn sort_by_score(rows: &mut [PairRecord]) {
    rows.sort_by(|x, y| {
        pair_score(y.lift, y.count)
            .partial_cmp(&pair_score(x.lift, x.count))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| x.key().cmp(&y.key()))
    });
}

/// The strongest pairs across the whole table.
#[must_use]
pub fn top_overall(rows: &[PairRecord], limit: usize) -> Vec<PairRecord> {
    let mut sorted = rows.to_vec();
    sort_by_score(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// A per-cuisine report section.
#[derive(Debug, Clone, PartialEq)]
pub struct CuisineSection {
    pub cuisine: String,
    pub rows: Vec<PairRecord>,
}

/// The strongest pairs per cuisine, sections in first-seen order.
#[must_use]
pub fn top_by_cuisine(rows: &[PairRecord], limit: usize) -> Vec<CuisineSection> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut sections: Vec<CuisineSection> = Vec::new();
    for row in rows {
        for cuisine in &row.cuisines {
            if seen.insert(cuisine.clone()) {
                sections.push(CuisineSection {
                    cuisine: cuisine.clone(),
                    rows: Vec::new(),
                });
            }
        }
    }
    for section in &mut sections {
        let mut members: Vec<PairRecord> = rows
            .iter()
            .filter(|r| r.cuisines.contains(&section.cuisine))
            .cloned()
            .collect();
        sort_by_score(&mut members);
        members.truncate(limit);
        section.rows = members;
    }
    sections
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CanonicalId;

    fn record(a: &str, b: &str, count: u64, lift: f64, cuisines: &[&str]) -> PairRecord {
        PairRecord {
            a_id: CanonicalId::from_name(a),
            b_id: CanonicalId::from_name(b),
            a: a.to_string(),
            b: b.to_string(),
            count,
            pmi: 0.0,
            lift,
            cuisines: cuisines.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[test]
    fn score_rewards_lift_and_volume() {
        assert!(pair_score(4.0, 10) > pair_score(4.0, 2));
        assert!(pair_score(4.0, 2) > pair_score(1.0, 2));
        assert_eq!(pair_score(2.0, 0), 0.0);
    }

    #[test]
    fn top_overall_sorted_and_truncated() {
        let rows = vec![
            record("a", "b", 1, 1.0, &[]),
            record("c", "d", 10, 8.0, &[]),
            record("e", "f", 5, 2.0, &[]),
        ];
        let top = top_overall(&rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].a_id.as_str(), "c");
        assert_eq!(top[1].a_id.as_str(), "e");
    }

    #[test]
    fn by_cuisine_sections_first_seen_order() {
        let rows = vec![
            record("a", "b", 2, 2.0, &["mexican"]),
            record("c", "d", 2, 4.0, &["italian", "mexican"]),
        ];
        let sections = top_by_cuisine(&rows, 30);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].cuisine, "mexican");
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[0].rows[0].a_id.as_str(), "c");
        assert_eq!(sections[1].cuisine, "italian");
        assert_eq!(sections[1].rows.len(), 1);
    }
}
