//! # Recipe Corpus Input
//!
//! Parses recipe batches from the three recognized source shapes:
//! JSONL (one record per line), JSON (array, or object with a `recipes`
//! array), and CSV with `ingredients` plus optional `title`/`cuisine`
//! columns.
//!
//! Malformed individual records are skipped and counted, never fatal; an
//! unrecognized file extension is a fatal configuration error raised before
//! any parsing happens.

use super::csv;
use crate::types::{CuisineField, FlavorError, IngredientField, Recipe};
use serde_json::Value;
use std::path::Path;

// =============================================================================
// SOURCE KIND
// =============================================================================

/// Recognized corpus source formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Jsonl,
    Json,
    Csv,
}

impl SourceKind {
    /// Classify a path by extension (case-insensitive).
    ///
    /// Anything else is `FlavorError::UnsupportedFormat` - the run must
    /// abort before writing output.
    pub fn from_path(path: &Path) -> Result<Self, FlavorError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jsonl" => Ok(Self::Jsonl),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(FlavorError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

// =============================================================================
// BATCH PARSING
// =============================================================================

/// A parsed corpus batch: usable recipes plus the number of records skipped
/// for being malformed or missing ingredients.
#[derive(Debug, Clone, Default)]
pub struct RecipeBatch {
    pub recipes: Vec<Recipe>,
    pub skipped: usize,
}

/// Parse a corpus file's text into recipes.
pub fn parse_batch(text: &str, kind: SourceKind) -> Result<RecipeBatch, FlavorError> {
    match kind {
        SourceKind::Jsonl => Ok(parse_jsonl(text)),
        SourceKind::Json => parse_json(text),
        SourceKind::Csv => parse_csv(text),
    }
}

fn keep_or_skip(batch: &mut RecipeBatch, recipe: Recipe) {
    if recipe.is_empty() {
        batch.skipped += 1;
    } else {
        batch.recipes.push(recipe);
    }
}

fn parse_jsonl(text: &str) -> RecipeBatch {
    let mut batch = RecipeBatch::default();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Recipe>(line) {
            Ok(recipe) => keep_or_skip(&mut batch, recipe),
            Err(_) => batch.skipped += 1,
        }
    }
    batch
}

fn parse_json(text: &str) -> Result<RecipeBatch, FlavorError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| FlavorError::Serialization(e.to_string()))?;
    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("recipes") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut batch = RecipeBatch::default();
    for item in items {
        match serde_json::from_value::<Recipe>(item) {
            Ok(recipe) => keep_or_skip(&mut batch, recipe),
            Err(_) => batch.skipped += 1,
        }
    }
    Ok(batch)
}

fn parse_csv(text: &str) -> Result<RecipeBatch, FlavorError> {
    let rows = csv::parse_rows(text)?;
    let mut batch = RecipeBatch::default();
    for row in rows {
        let title = row
            .get("title")
            .or_else(|| row.get("name"))
            .filter(|t| !t.is_empty())
            .cloned();
        let ingredients = row.get("ingredients").cloned().unwrap_or_default();
        let cuisine = row
            .get("cuisine")
            .filter(|c| !c.is_empty())
            .map(|c| CuisineField::One(c.clone()));
        keep_or_skip(
            &mut batch,
            Recipe {
                title,
                ingredients: IngredientField::Text(ingredients),
                cuisine,
            },
        );
    }
    Ok(batch)
}

// =============================================================================
// CORPUS FINGERPRINT
// =============================================================================

/// Dedup key for a recipe within the accumulated corpus:
/// `title::sorted-lowercased-ingredients::cuisine`.
#[must_use]
pub fn fingerprint(recipe: &Recipe) -> String {
    let title = recipe
        .title
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let mut ingredients: Vec<String> = recipe
        .mentions()
        .iter()
        .map(|m| m.to_lowercase())
        .collect();
    ingredients.sort();
    let cuisine = recipe.cuisine_tags().first().cloned().unwrap_or_default();
    format!("{title}::{}::{cuisine}", ingredients.join("|"))
}

// =============================================================================
// TESTS
// =============================================================================
