//! # Flavorgraph HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /status` - Graph collection counts
//! - `GET /manifest` - Provenance manifest of the served graph
//! - `POST /suggest` - Pairing suggestions over the served pair table
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `FLAVORGRAPH_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `FLAVORGRAPH_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `FLAVORGRAPH_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

// Re-exports for external use
pub use auth::get_api_key_from_env;
pub use middleware::{create_rate_limiter, get_rate_limit_from_env};
// Re-export handlers and types for integration tests (via `flavorgraph::api::*`)
#[allow(unused_imports)]
pub use handlers::{health_handler, manifest_handler, status_handler, suggest_handler};
#[allow(unused_imports)]
pub use types::{ErrorResponse, HealthResponse, StatusResponse, SuggestRequest, SuggestResponse};

use crate::config::{DataPaths, FlavorConfig};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use flavorgraph_core::{
    ArtifactCounts, Canonicalizer, FlavorError, GraphRecord, Manifest, PairRecord, Recipe,
    SourceKind,
    formats::{graph, pair_table},
    parse_batch,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// The immutable graph snapshot served by the API.
///
/// The pipeline is batch-only, so the server holds one read-only snapshot
/// loaded at startup; re-run the pipeline and restart to serve new data.
#[derive(Debug)]
pub struct ServedState {
    pub counts: ArtifactCounts,
    pub pairs: Vec<PairRecord>,
    pub recipes: Vec<Recipe>,
    pub canon: Canonicalizer,
    pub manifest: Option<Manifest>,
}

impl ServedState {
    /// Load the snapshot from the data tree.
    ///
    /// The graph artifact must exist (run `flavorgraph build` first); the
    /// pair table, corpus, and manifest are optional extras.
    pub fn load(paths: &DataPaths, config: &FlavorConfig) -> Result<Self, FlavorError> {
        let graph_text = std::fs::read_to_string(paths.graph_jsonl()).map_err(|_| {
            FlavorError::Config(format!(
                "graph artifact {} not found - run `flavorgraph build` first",
                paths.graph_jsonl().display()
            ))
        })?;
        let records = graph::decode_lines(&graph_text)?;
        let mut counts = ArtifactCounts::default();
        for record in &records {
            match record {
                GraphRecord::Ingredient(_) => counts.ingredients += 1,
                GraphRecord::Pairing(_) => counts.pairings += 1,
                GraphRecord::Edge(_) => counts.edges += 1,
            }
        }

        let pair_text = std::fs::read_to_string(paths.stage_pairings()).unwrap_or_default();
        let pairs = if pair_text.is_empty() {
            Vec::new()
        } else {
            pair_table::decode(&pair_text)?
                .iter()
                .filter_map(pair_table::RawPairRow::coerce)
                .collect()
        };

        let corpus_text = std::fs::read_to_string(paths.raw_corpus()).unwrap_or_default();
        let recipes = parse_batch(&corpus_text, SourceKind::Jsonl)
            .map(|batch| batch.recipes)
            .unwrap_or_default();

        let canon = {
            let alias_text = std::fs::read_to_string(config.alias_path()).unwrap_or_default();
            if alias_text.is_empty() {
                Canonicalizer::default()
            } else {
                Canonicalizer::new(flavorgraph_core::AliasTable::from_json(&alias_text)?)
            }
        };

        let manifest = std::fs::read_to_string(paths.manifest())
            .ok()
            .and_then(|text| Manifest::from_json(&text).ok());

        tracing::info!(
            ingredients = counts.ingredients,
            pairings = counts.pairings,
            edges = counts.edges,
            pair_rows = pairs.len(),
            recipes = recipes.len(),
            "graph snapshot loaded"
        );

        Ok(Self {
            counts,
            pairs,
            recipes,
            canon,
            manifest,
        })
    }
}

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// The read-only graph snapshot.
    pub served: Arc<ServedState>,
}

impl AppState {
    /// Create new app state over a loaded snapshot.
    #[must_use]
    pub fn new(served: ServedState) -> Self {
        Self {
            served: Arc::new(served),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `FLAVORGRAPH_CORS_ORIGINS`:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If not set: defaults to localhost only (restrictive default)
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("FLAVORGRAPH_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (FLAVORGRAPH_CORS_ORIGINS=*). This is insecure for production!"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in FLAVORGRAPH_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No FLAVORGRAPH_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = vec![
        "http://localhost:3000".parse::<HeaderValue>().ok(),
        "http://localhost:8080".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:3000".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:8080".parse::<HeaderValue>().ok(),
    ];
    let origins: Vec<HeaderValue> = localhost_origins.into_iter().flatten().collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. CORS - handles preflight requests
/// 2. Tracing - logs all requests
/// 3. Rate Limiting - protects against DoS (if enabled)
/// 4. Authentication - validates API key (if configured)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible! \
             Set FLAVORGRAPH_API_KEY environment variable to enable authentication."
        );
    }

    // Build base router with routes
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route("/manifest", get(handlers::manifest_handler))
        .route("/suggest", post(handlers::suggest_handler));

    // Apply authentication middleware (innermost - runs last on request)
    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    // Apply rate limiting middleware
    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    // Apply CORS, body limit, and tracing (outermost layers)
    router
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, state: ServedState) -> Result<(), FlavorError> {
    let router = create_router(AppState::new(state));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FlavorError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Flavorgraph HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| FlavorError::Io(format!("Server error: {}", e)))
}
