//! # Canonicalizer
//!
//! Maps a normalized token to a canonical identity: a naive singular form,
//! an alias lookup, and a stable slug.
//!
//! Canonicalization is a pure function of `(token, AliasTable)`. The alias
//! table is loaded once per run and passed in explicitly; there is no ambient
//! lookup state.

use crate::types::CanonicalId;
use serde::Deserialize;
use std::collections::BTreeMap;

// =============================================================================
// SINGULARIZATION
// =============================================================================

/// Derive a naive singular form by suffix rewriting, rules applied in
/// priority order:
///
/// 1. `...ies` -> `...y`
/// 2. `...oes` -> drop trailing `es`
/// 3. `...ses` -> drop trailing `es`
/// 4. trailing `s` (but not `ss`) dropped
///
/// This is a heuristic, not a stemmer. Irregular plurals come out wrong
/// ("leaves" stays mangled); the alias table is the correction channel.
/// The rule order is a compatibility contract - do not reorder.
#[must_use]
pub fn singularize(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if token.ends_with("oes") || token.ends_with("ses") {
        return token[..token.len() - 2].to_string();
    }
    if token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

// =============================================================================
// ALIAS TABLE
// =============================================================================

/// Mapping from a lower-cased name (or its singular form) to a canonical
/// name. Immutable during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// An empty table; canonicalization degrades to the singularization
    /// heuristic alone. A missing alias file maps here, never to an error.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from explicit entries, lower-casing the keys.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    /// Parse a table from a JSON object (`{"name": "canonical name", ...}`).
    pub fn from_json(text: &str) -> Result<Self, crate::types::FlavorError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(text)
            .map_err(|e| crate::types::FlavorError::Serialization(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Look up a lower-cased key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of alias entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// CANONICALIZER
// =============================================================================

/// Resolves normalized tokens to canonical names and ids against one
/// immutable [`AliasTable`].
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    aliases: AliasTable,
}

impl Canonicalizer {
    /// Create a canonicalizer over the given alias table.
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Resolve the canonical name of a token: alias of the token itself,
    /// else alias of its singular form, else the singular form.
    #[must_use]
    pub fn canonical_name(&self, token: &str) -> String {
        let lowered = token.to_lowercase();
        let trimmed = lowered.trim();
        let singular = singularize(trimmed);
        if let Some(hit) = self.aliases.get(trimmed) {
            return hit.to_string();
        }
        if let Some(hit) = self.aliases.get(&singular) {
            return hit.to_string();
        }
        singular
    }

    /// Resolve a token all the way to its canonical id.
    #[must_use]
    pub fn canonical_id(&self, token: &str) -> CanonicalId {
        CanonicalId::from_name(&self.canonical_name(token))
    }
}

// =============================================================================
// TESTS
// =============================================================================
