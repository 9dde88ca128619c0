//! # Configuration
//!
//! Optional `flavorgraph.toml` controlling the data directory layout, mining
//! defaults, the alias-table location, and lexicon extensions. Everything in
//! here ends up as an explicit argument to a core function - the core never
//! reads configuration itself.
//!
//! ```toml
//! data_dir = "data"
//! aliases = "data/config/aliases.json"
//!
//! [mining]
//! min_count = 5
//! top_n = 5000
//!
//! [lexicon]
//! herbs = ["shiso", "epazote"]
//! ```

use flavorgraph_core::{FlavorError, Lexicon};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "flavorgraph.toml";

// =============================================================================
// CONFIG SHAPE
// =============================================================================

/// Mining defaults; CLI flags override these per invocation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MiningSection {
    pub min_count: Option<u64>,
    pub top_n: Option<usize>,
    pub allow_any: Option<bool>,
    pub cuisine_aware: Option<bool>,
}

/// The application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlavorConfig {
    /// Root of the data tree (raw corpus, stage tables, emitted graph).
    pub data_dir: Option<PathBuf>,
    /// Path to the alias-table JSON. A missing file is an empty table.
    pub aliases: Option<PathBuf>,
    #[serde(default)]
    pub mining: MiningSection,
    /// Extra keyword-set entries merged into the built-in lexicon,
    /// keyed by set name (herbs, spices, ..., dairy, nuts, ...).
    #[serde(default)]
    pub lexicon: BTreeMap<String, Vec<String>>,
}

impl FlavorConfig {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist and parse; the default path is
    /// optional and silently falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, FlavorError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if required => {
                return Err(FlavorError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(_) => return Ok(Self::default()),
        };

        toml::from_str(&text)
            .map_err(|e| FlavorError::Config(format!("{}: {}", path.display(), e)))
    }

    /// The resolved data directory (default `data`).
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    /// The resolved alias-table path (default `<data_dir>/config/aliases.json`).
    #[must_use]
    pub fn alias_path(&self) -> PathBuf {
        self.aliases
            .clone()
            .unwrap_or_else(|| self.data_dir().join("config").join("aliases.json"))
    }

    /// The built-in lexicon extended with the configured extra entries.
    pub fn lexicon(&self) -> Result<Lexicon, FlavorError> {
        let mut lexicon = Lexicon::default();
        for (set, words) in &self.lexicon {
            lexicon.extend_set(set, words)?;
        }
        Ok(lexicon)
    }
}

// =============================================================================
// DATA TREE LAYOUT
// =============================================================================

/// Well-known artifact locations under the data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The accumulated recipe corpus (`raw/onebatch.jsonl`).
    #[must_use]
    pub fn raw_corpus(&self) -> PathBuf {
        self.root.join("raw").join("onebatch.jsonl")
    }

    /// The pair table stage artifact (`stage/pairings.csv`).
    #[must_use]
    pub fn stage_pairings(&self) -> PathBuf {
        self.root.join("stage").join("pairings.csv")
    }

    /// Curated ingredient metadata (`stage/ingredients.csv`).
    #[must_use]
    pub fn stage_ingredients(&self) -> PathBuf {
        self.root.join("stage").join("ingredients.csv")
    }

    fn jsonl(&self, name: &str) -> PathBuf {
        self.root.join("jsonl").join(name)
    }

    #[must_use]
    pub fn graph_jsonl(&self) -> PathBuf {
        self.jsonl("graph.jsonl")
    }

    #[must_use]
    pub fn ingredients_jsonl(&self) -> PathBuf {
        self.jsonl("ingredients.jsonl")
    }

    #[must_use]
    pub fn pairings_jsonl(&self) -> PathBuf {
        self.jsonl("pairings.jsonl")
    }

    #[must_use]
    pub fn edges_jsonl(&self) -> PathBuf {
        self.jsonl("edges.jsonl")
    }

    #[must_use]
    pub fn dropdown_jsonl(&self) -> PathBuf {
        self.jsonl("ingredients.dropdown.jsonl")
    }

    #[must_use]
    pub fn manifest(&self) -> PathBuf {
        self.jsonl("_manifest.json")
    }

    #[must_use]
    pub fn report_html(&self) -> PathBuf {
        self.root.join("report").join("index.html")
    }
}

// =============================================================================
// TESTS
// =============================================================================
