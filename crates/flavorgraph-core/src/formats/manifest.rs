//! # Provenance Manifest
//!
//! Informational sidecar written next to the graph artifacts: collection
//! counts and the mining parameters used. Nothing in-core consumes it; it
//! exists so a downstream reader can tell where a graph came from.

use crate::types::FlavorError;
use serde::{Deserialize, Serialize};

/// Mining parameters recorded for provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MineParams {
    pub min_count: u64,
    pub top_n: usize,
    pub allow_any: bool,
}

/// Line counts of the emitted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArtifactCounts {
    pub ingredients: usize,
    pub pairings: usize,
    pub edges: usize,
}

/// Relative paths of the emitted artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFiles {
    pub graph: String,
    pub ingredients: String,
    pub pairings: String,
    pub edges: String,
}

impl Default for ManifestFiles {
    fn default() -> Self {
        Self {
            graph: "data/jsonl/graph.jsonl".to_string(),
            ingredients: "data/jsonl/ingredients.jsonl".to_string(),
            pairings: "data/jsonl/pairings.jsonl".to_string(),
            edges: "data/jsonl/edges.jsonl".to_string(),
        }
    }
}

/// The manifest artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    pub generated_at: String,
    pub source_file: Option<String>,
    pub params: MineParams,
    pub counts: ArtifactCounts,
    pub files: ManifestFiles,
}

impl Manifest {
    /// Pretty-printed JSON, trailing newline included.
    pub fn to_json(&self) -> Result<String, FlavorError> {
        serde_json::to_string_pretty(self)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| FlavorError::Serialization(e.to_string()))
    }

    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FlavorError> {
        serde_json::from_str(text).map_err(|e| FlavorError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_roundtrip() {
        let manifest = Manifest {
            generated_at: "2025-11-02T10:00:00Z".to_string(),
            source_file: Some("data/raw/onebatch.jsonl".to_string()),
            params: MineParams {
                min_count: 5,
                top_n: 5000,
                allow_any: false,
            },
            counts: ArtifactCounts {
                ingredients: 120,
                pairings: 118,
                edges: 400,
            },
            files: ManifestFiles::default(),
        };
        let text = manifest.to_json().expect("encode");
        assert!(text.ends_with('\n'));
        let back = Manifest::from_json(&text).expect("decode");
        assert_eq!(back, manifest);
    }
}
