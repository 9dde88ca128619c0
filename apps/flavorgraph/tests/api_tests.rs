//! Integration tests for the Flavorgraph HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await in auth tests - tests are serialized
// intentionally to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use flavorgraph::api::{
    AppState, ErrorResponse, HealthResponse, ServedState, StatusResponse, SuggestRequest,
    SuggestResponse, create_router,
};
use flavorgraph_core::{
    AliasTable, ArtifactCounts, CanonicalId, Canonicalizer, IngredientField, PairRecord, Recipe,
};
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Mutex to serialize tests since the router reads env vars.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and ensures cleanup on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no
        // concurrent env access.
        unsafe { std::env::remove_var("FLAVORGRAPH_API_KEY") };
    }
}

fn pair(a: &str, b: &str, count: u64, pmi: f64, lift: f64, cuisines: &[&str]) -> PairRecord {
    PairRecord {
        a_id: CanonicalId::from_name(a),
        b_id: CanonicalId::from_name(b),
        a: a.to_string(),
        b: b.to_string(),
        count,
        pmi,
        lift,
        cuisines: cuisines.iter().map(|c| (*c).to_string()).collect(),
    }
}

fn populated_state() -> ServedState {
    let recipes = vec![
        Recipe {
            title: Some("Caprese".into()),
            ingredients: IngredientField::List(vec![
                "tomato".into(),
                "basil".into(),
                "mozzarella".into(),
            ]),
            cuisine: Some(flavorgraph_core::CuisineField::One("italian".into())),
        },
        Recipe {
            title: Some("Greek Salad".into()),
            ingredients: IngredientField::List(vec![
                "tomato".into(),
                "feta".into(),
                "cucumber".into(),
            ]),
            cuisine: Some(flavorgraph_core::CuisineField::One("greek".into())),
        },
    ];
    ServedState {
        counts: ArtifactCounts {
            ingredients: 5,
            pairings: 5,
            edges: 3,
        },
        pairs: vec![
            pair("basil", "tomato", 4, 1.0, 2.0, &["italian"]),
            pair("feta", "tomato", 3, 0.5, 1.5, &["greek"]),
            pair("cucumber", "feta", 2, 0.4, 1.3, &["greek"]),
        ],
        recipes,
        canon: Canonicalizer::new(AliasTable::empty()),
        manifest: None,
    }
}

/// Create a test server over a populated snapshot.
/// Returns a guard that must be kept alive during the test.
fn create_test_server() -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX.
    unsafe { std::env::remove_var("FLAVORGRAPH_API_KEY") };
    let state = AppState::new(populated_state());
    let router = create_router(state);
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// STATUS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_status_reports_snapshot_counts() {
    let (server, _guard) = create_test_server();

    let response = server.get("/status").await;

    response.assert_status_ok();
    let status: StatusResponse = response.json();
    assert_eq!(status.ingredients, 5);
    assert_eq!(status.pairings, 5);
    assert_eq!(status.edges, 3);
    assert_eq!(status.pair_rows, 3);
    assert_eq!(status.corpus_recipes, 2);
}

// =============================================================================
// MANIFEST ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_manifest_missing_is_404() {
    let (server, _guard) = create_test_server();

    let response = server.get("/manifest").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json();
    assert!(error.error.contains("manifest"));
}

// =============================================================================
// SUGGEST ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_suggest_ranks_candidates() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": ["tomato"] }))
        .await;

    response.assert_status_ok();
    let body: SuggestResponse = response.json();
    assert_eq!(body.input, vec!["tomato"]);
    // basil: 2.0*2 + 1.0 = 5.0; feta: 1.5*2 + 0.5 = 3.5
    assert_eq!(body.suggestions[0].ingredient.as_str(), "basil");
    assert_eq!(body.suggestions[0].score, 5.0);
    assert_eq!(body.suggestions[1].ingredient.as_str(), "feta");
}

#[tokio::test]
async fn test_suggest_cuisine_bonus_changes_ranking() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": ["tomato"], "cuisine": "greek" }))
        .await;

    response.assert_status_ok();
    let body: SuggestResponse = response.json();
    // feta gets the +1 greek bonus: 4.5 vs basil 5.0 - basil still ahead,
    // but feta beats its unboosted score.
    let feta = body
        .suggestions
        .iter()
        .find(|s| s.ingredient.as_str() == "feta")
        .unwrap();
    assert_eq!(feta.score, 4.5);
}

#[tokio::test]
async fn test_suggest_includes_recipe_matches() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": ["tomato", "feta"] }))
        .await;

    response.assert_status_ok();
    let body: SuggestResponse = response.json();
    let titles: Vec<&str> = body
        .recipe_matches
        .iter()
        .filter_map(|m| m.title.as_deref())
        .collect();
    assert!(titles.contains(&"Greek Salad"));
}

#[tokio::test]
async fn test_suggest_empty_ingredients_is_400() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_suggest_unusable_names_is_400() {
    let (server, _guard) = create_test_server();

    // Stop words only - nothing survives normalization.
    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": ["fresh chopped"] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_suggest_excludes_wanted_from_results() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/suggest")
        .json(&json!({ "ingredients": ["tomato", "basil", "feta", "cucumber"] }))
        .await;

    response.assert_status_ok();
    let body: SuggestResponse = response.json();
    let wanted: BTreeSet<&str> = ["tomato", "basil", "feta", "cucumber"].into();
    for suggestion in &body.suggestions {
        assert!(!wanted.contains(suggestion.ingredient.as_str()));
    }
}

// =============================================================================
// AUTH TESTS
// =============================================================================

#[tokio::test]
async fn test_api_key_required_when_configured() {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX.
    unsafe { std::env::set_var("FLAVORGRAPH_API_KEY", "secret-key") };
    let _cleanup = TestGuard { _guard: guard };

    let state = AppState::new(populated_state());
    let server = TestServer::new(create_router(state)).unwrap();

    // Health stays open for load balancers.
    server.get("/health").await.assert_status_ok();

    // Status requires the key.
    server
        .get("/status")
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let response = server
        .get("/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            "Bearer secret-key".parse::<HeaderValue>().unwrap(),
        )
        .await;
    response.assert_status_ok();

    let response = server
        .get("/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            "Bearer wrong-key".parse::<HeaderValue>().unwrap(),
        )
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

// =============================================================================
// REQUEST VALIDATION TESTS
// =============================================================================

#[test]
fn suggest_request_validation_bounds() {
    let ok = SuggestRequest {
        ingredients: vec!["tomato".into()],
        cuisine: None,
        top: Some(10),
    };
    assert!(ok.validate().is_ok());

    let too_many = SuggestRequest {
        ingredients: vec!["x".into(); 51],
        cuisine: None,
        top: None,
    };
    assert!(too_many.validate().is_err());
}
