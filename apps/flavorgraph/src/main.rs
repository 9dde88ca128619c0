//! # Flavorgraph - Flavor Graph Pipeline
//!
//! The main binary for the Flavorgraph mining pipeline.
//!
//! This application provides:
//! - Batch pipeline commands (ingest, mine, dedupe, build, manifest, report)
//! - A suggestion/lookup HTTP API over the built graph
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                  apps/flavorgraph (THE BINARY)                 │
//! │                                                                │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐   │
//! │  │   CLI       │    │   HTTP API  │    │  File artifacts  │   │
//! │  │  (clap)     │    │   (axum)    │    │  (CSV / JSONL)   │   │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘   │
//! │         │                  │                    │             │
//! │         └──────────────────┼────────────────────┘             │
//! │                            ▼                                  │
//! │                  ┌───────────────────┐                        │
//! │                  │ flavorgraph-core  │                        │
//! │                  │   (THE LOGIC)     │                        │
//! │                  └───────────────────┘                        │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Batch pipeline
//! flavorgraph ingest batches/kaggle.jsonl
//! flavorgraph mine --source data/raw/onebatch.jsonl --min-count 5
//! flavorgraph dedupe
//! flavorgraph build
//! flavorgraph manifest --source data/raw/onebatch.jsonl
//!
//! # Queries
//! flavorgraph suggest tomato basil --cuisine italian --top 10
//! flavorgraph server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use flavorgraph::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — FLAVORGRAPH_LOG_FORMAT=json enables
    // machine-parseable output.
    let log_format = std::env::var("FLAVORGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "flavorgraph=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Flavorgraph startup banner.
fn print_banner() {
    println!(
        r#"
  Flavorgraph v{}
  mine · merge · build — reproducible flavor pairing graphs
"#,
        env!("CARGO_PKG_VERSION")
    );
}
