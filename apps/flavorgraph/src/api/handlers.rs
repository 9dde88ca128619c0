//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{ErrorResponse, HealthResponse, StatusResponse, SuggestRequest, SuggestResponse},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use flavorgraph_core::{CanonicalId, match_recipes, normalize_mention, suggest};
use std::collections::BTreeSet;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STATUS HANDLER
// =============================================================================

/// Get graph collection counts.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let served = &state.served;
    let response = StatusResponse {
        ingredients: served.counts.ingredients,
        pairings: served.counts.pairings,
        edges: served.counts.edges,
        pair_rows: served.pairs.len(),
        corpus_recipes: served.recipes.len(),
    };
    (StatusCode::OK, Json(response))
}

// =============================================================================
// MANIFEST HANDLER
// =============================================================================

/// Get the provenance manifest of the served graph.
pub async fn manifest_handler(State(state): State<AppState>) -> impl IntoResponse {
    match &state.served.manifest {
        Some(manifest) => (StatusCode::OK, Json(manifest.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("no manifest for the served graph")),
        )
            .into_response(),
    }
}

// =============================================================================
// SUGGEST HANDLER
// =============================================================================

/// Pairing suggestions over the served pair table.
pub async fn suggest_handler(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> impl IntoResponse {
    if let Err(reason) = request.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(reason))).into_response();
    }

    let served = &state.served;
    let wanted: BTreeSet<CanonicalId> = request
        .ingredients
        .iter()
        .filter_map(|raw| normalize_mention(raw))
        .map(|token| served.canon.canonical_id(&token))
        .filter(|id| !id.is_empty())
        .collect();
    if wanted.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("no usable ingredient names given")),
        )
            .into_response();
    }

    let top = request.top.unwrap_or(10);
    let suggestions = suggest(&served.pairs, &wanted, request.cuisine.as_deref(), top);

    let mut chosen = wanted.clone();
    chosen.extend(suggestions.iter().take(5).map(|s| s.ingredient.clone()));
    let matches = match_recipes(&served.recipes, &chosen, &served.canon, 10);

    let response = SuggestResponse {
        input: wanted.iter().map(ToString::to_string).collect(),
        cuisine: request.cuisine,
        suggestions,
        recipe_matches: matches,
    };
    (StatusCode::OK, Json(response)).into_response()
}
