//! # Flavorgraph CLI Module
//!
//! This module implements the CLI interface for Flavorgraph.
//!
//! ## Available Commands
//!
//! - `status` - Show pipeline artifact status
//! - `ingest` - Append recipe batches to the corpus (deduplicated)
//! - `mine` - Mine the corpus into a ranked pair table
//! - `dedupe` - Merge the pair table against the current alias table
//! - `build` - Build the graph JSONL artifacts from the pair table
//! - `manifest` - Write the provenance manifest
//! - `report` - Render the top-pairs HTML report
//! - `dropdown` - Export active ingredients for UI dropdowns
//! - `suggest` - Suggest pairings for a set of ingredients
//! - `server` - Start the HTTP API server

mod commands;

use crate::config::{DataPaths, FlavorConfig};
use clap::{Parser, Subcommand};
use flavorgraph_core::FlavorError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Flavorgraph - reproducible flavor pairing graphs.
///
/// A batch pipeline that mines ingredient co-occurrence from recipe corpora
/// and builds a deterministic pairing graph.
#[derive(Parser, Debug)]
#[command(name = "flavorgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file (default: flavorgraph.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root of the data tree (overrides the configured data_dir)
    #[arg(short = 'D', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show pipeline artifact status
    Status,

    /// Append recipe batches to the corpus, skipping duplicates
    Ingest {
        /// Input files (.jsonl, .json, or .csv)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Mine the recipe corpus into a ranked pair table
    Mine {
        /// Recipe corpus file (defaults to the accumulated corpus)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Minimum co-occurrence count for a pair to qualify
        #[arg(long)]
        min_count: Option<u64>,

        /// Keep at most this many ranked pairs
        #[arg(long)]
        top_n: Option<usize>,

        /// Mine every token instead of only whitelisted ingredient ids
        #[arg(long)]
        allow_any: bool,

        /// Ignore recipe cuisine tags
        #[arg(long)]
        no_cuisine: bool,
    },

    /// Re-canonicalize and merge the pair table (idempotent)
    Dedupe,

    /// Build the graph JSONL artifacts from the canonical pair table
    Build,

    /// Write the provenance manifest next to the graph artifacts
    Manifest {
        /// Source file identifier recorded in the manifest
        #[arg(short, long)]
        source: Option<String>,

        /// Mining min_count to record
        #[arg(long)]
        min_count: Option<u64>,

        /// Mining top_n to record
        #[arg(long)]
        top_n: Option<usize>,

        /// Whether the whitelist was bypassed
        #[arg(long)]
        allow_any: bool,
    },

    /// Render the top-pairs HTML report
    Report,

    /// Export active ingredients (those with edges) for UI dropdowns
    Dropdown,

    /// Suggest pairings for a set of ingredients
    Suggest {
        /// Ingredient names
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Prefer pairs seen in this cuisine
        #[arg(long)]
        cuisine: Option<String>,

        /// Number of suggestions
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Start HTTP server over the built graph
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), FlavorError> {
    let config = FlavorConfig::load(cli.config.as_deref())?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let paths = DataPaths::new(data_dir);
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Status) => cmd_status(&paths, json_mode),
        Some(Commands::Ingest { files }) => cmd_ingest(&paths, &files, json_mode),
        Some(Commands::Mine {
            source,
            min_count,
            top_n,
            allow_any,
            no_cuisine,
        }) => cmd_mine(
            &paths,
            &config,
            source,
            min_count,
            top_n,
            allow_any,
            no_cuisine,
            json_mode,
        ),
        Some(Commands::Dedupe) => cmd_dedupe(&paths, &config, json_mode),
        Some(Commands::Build) => cmd_build(&paths, &config, json_mode),
        Some(Commands::Manifest {
            source,
            min_count,
            top_n,
            allow_any,
        }) => cmd_manifest(&paths, &config, source, min_count, top_n, allow_any),
        Some(Commands::Report) => cmd_report(&paths),
        Some(Commands::Dropdown) => cmd_dropdown(&paths, &config),
        Some(Commands::Suggest {
            ingredients,
            cuisine,
            top,
        }) => cmd_suggest(&paths, &config, &ingredients, cuisine.as_deref(), top),
        Some(Commands::Server { host, port }) => cmd_server(&paths, &config, &host, port).await,
        None => {
            // No subcommand - show status by default
            cmd_status(&paths, json_mode)
        }
    }
}
