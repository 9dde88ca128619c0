//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use flavorgraph_core::{RecipeMatch, Suggestion};
use serde::{Deserialize, Serialize};

/// Maximum ingredients accepted by a suggest request.
///
/// Limits the computational cost of a single query.
pub const MAX_SUGGEST_INGREDIENTS: usize = 50;

/// Maximum suggestions returnable by a single query.
pub const MAX_SUGGEST_TOP: usize = 100;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Graph status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ingredients: usize,
    pub pairings: usize,
    pub edges: usize,
    pub pair_rows: usize,
    pub corpus_recipes: usize,
}

// =============================================================================
// SUGGEST REQUEST/RESPONSE
// =============================================================================

/// Pairing suggestion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub top: Option<usize>,
}

impl SuggestRequest {
    /// Validate the request bounds.
    ///
    /// Oversized requests are rejected at the API boundary, before any
    /// scoring work happens.
    pub fn validate(&self) -> Result<(), String> {
        if self.ingredients.is_empty() {
            return Err("ingredients[] required".to_string());
        }
        if self.ingredients.len() > MAX_SUGGEST_INGREDIENTS {
            return Err(format!(
                "at most {} ingredients per request",
                MAX_SUGGEST_INGREDIENTS
            ));
        }
        if self.top.unwrap_or(0) > MAX_SUGGEST_TOP {
            return Err(format!("top must be <= {}", MAX_SUGGEST_TOP));
        }
        Ok(())
    }
}

/// Pairing suggestion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub input: Vec<String>,
    pub cuisine: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub recipe_matches: Vec<RecipeMatch>,
}

/// Error payload for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =============================================================================
// TESTS
// =============================================================================
