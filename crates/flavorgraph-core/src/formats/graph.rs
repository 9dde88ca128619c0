//! # Graph JSONL Format
//!
//! One record per line, three record shapes distinguished by a wrapping tag:
//!
//! ```text
//! {"Ingredient":{"id":...,"name":...,...}}
//! {"Pairing":{"id":...,"name":...,"type":...,...}}
//! {"Edge":{"ingredient_id":...,"pairing_id":...,"strength":...,...}}
//! ```
//!
//! The combined artifact is ordered Ingredients, then Pairings, then Edges -
//! a contract consumers may rely on to see node definitions before the edges
//! that reference them.

use crate::types::{FlavorError, GraphEdge, Ingredient, Pairing};
use serde::{Deserialize, Serialize};

/// A single line of the graph artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphRecord {
    Ingredient(Ingredient),
    Pairing(Pairing),
    Edge(GraphEdge),
}

/// Encode records as JSONL (one JSON object per line, trailing newline).
pub fn encode_lines<'a, I>(records: I) -> Result<String, FlavorError>
where
    I: IntoIterator<Item = &'a GraphRecord>,
{
    let mut out = String::new();
    for record in records {
        let line =
            serde_json::to_string(record).map_err(|e| FlavorError::Serialization(e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Decode a JSONL graph artifact. Blank lines are ignored; a malformed line
/// is an error naming its 1-based position.
pub fn decode_lines(text: &str) -> Result<Vec<GraphRecord>, FlavorError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: GraphRecord = serde_json::from_str(line).map_err(|e| {
            FlavorError::Serialization(format!("line {}: {}", idx + 1, e))
        })?;
        records.push(record);
    }
    Ok(records)
}

// =============================================================================
// TESTS
// =============================================================================
