//! # CLI Command Implementations
//!
//! The pipeline commands. All file I/O for the data tree lives here; the
//! stages themselves are pure functions in `flavorgraph-core`.

use crate::api;
use crate::config::{DataPaths, FlavorConfig};
use flavorgraph_core::{
    AliasTable, CanonicalId, Canonicalizer, CuisineField, FlavorError, GraphRecord, Ingredient,
    IngredientField, IngredientMeta, Manifest, MineOptions, MineParams, PairRecord, Recipe,
    SourceKind, build,
    formats::{csv, graph, pair_table},
    match_recipes, merge, mine, parse_batch, report, suggest,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum input file size (100 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), FlavorError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| FlavorError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(FlavorError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input file path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it is a
/// regular file, so a path like "../../../etc/passwd" cannot slip through as
/// a relative surprise.
fn validate_input_path(path: &Path) -> Result<PathBuf, FlavorError> {
    let canonical = path
        .canonicalize()
        .map_err(|e| FlavorError::Io(format!("Invalid file path '{}': {}", path.display(), e)))?;

    if !canonical.is_file() {
        return Err(FlavorError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

// =============================================================================
// SHARED I/O HELPERS
// =============================================================================

fn read_text(path: &Path) -> Result<String, FlavorError> {
    std::fs::read_to_string(path)
        .map_err(|e| FlavorError::Io(format!("{}: {}", path.display(), e)))
}

/// Read a file that is allowed to be absent (absent -> empty string).
fn read_text_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Write a file, creating parent directories.
fn write_text(path: &Path, content: &str) -> Result<(), FlavorError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| FlavorError::Io(format!("{}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, content)
        .map_err(|e| FlavorError::Io(format!("{}: {}", path.display(), e)))
}

fn line_count(path: &Path) -> usize {
    read_text_or_empty(path)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count()
}

/// Load the canonicalizer for the configured alias table.
///
/// A missing alias file degrades to the singularization heuristic alone.
fn load_canonicalizer(config: &FlavorConfig) -> Result<Canonicalizer, FlavorError> {
    let path = config.alias_path();
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let table = AliasTable::from_json(&text)?;
            tracing::debug!(aliases = table.len(), path = %path.display(), "alias table loaded");
            Ok(Canonicalizer::new(table))
        }
        Err(_) => {
            tracing::debug!(path = %path.display(), "no alias table, using empty mapping");
            Ok(Canonicalizer::new(AliasTable::empty()))
        }
    }
}

/// Decode the pair table into coerced records, counting unresolvable rows.
fn load_pair_records(text: &str) -> Result<Vec<PairRecord>, FlavorError> {
    let raw = pair_table::decode(text)?;
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for row in &raw {
        match row.coerce() {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, "pair rows without identity skipped");
    }
    Ok(records)
}

/// Parse curated ingredient metadata rows (id/name columns).
fn parse_meta_rows(text: &str) -> Result<Vec<IngredientMeta>, FlavorError> {
    let rows = csv::parse_rows(text)?;
    let mut meta = Vec::with_capacity(rows.len());
    for row in rows {
        let id_cell = row.get("id").filter(|v| !v.is_empty()).cloned();
        let name_cell = row.get("name").filter(|v| !v.is_empty()).cloned();
        let (id, name) = match (id_cell, name_cell) {
            (Some(id), Some(name)) => (CanonicalId::from_slug(id), name),
            (Some(id), None) => {
                let name = id.clone();
                (CanonicalId::from_slug(id), name)
            }
            (None, Some(name)) => (CanonicalId::from_name(&name), name),
            (None, None) => continue,
        };
        meta.push(IngredientMeta { id, name });
    }
    Ok(meta)
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show pipeline artifact status.
pub fn cmd_status(paths: &DataPaths, json_mode: bool) -> Result<(), FlavorError> {
    let corpus = line_count(&paths.raw_corpus());
    let pairs = line_count(&paths.stage_pairings()).saturating_sub(1); // header
    let ingredients = line_count(&paths.ingredients_jsonl());
    let pairings = line_count(&paths.pairings_jsonl());
    let edges = line_count(&paths.edges_jsonl());

    if json_mode {
        let output = serde_json::json!({
            "corpus_recipes": corpus,
            "pair_rows": pairs,
            "graph": {
                "ingredients": ingredients,
                "pairings": pairings,
                "edges": edges
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Flavorgraph Pipeline Status");
    println!("===========================");
    println!("Corpus recipes: {}", corpus);
    println!("Pair rows:      {}", pairs);
    println!();
    println!("Graph:");
    println!("  Ingredients:  {}", ingredients);
    println!("  Pairings:     {}", pairings);
    println!("  Edges:        {}", edges);

    Ok(())
}

// =============================================================================
// INGEST COMMAND
// =============================================================================

/// Append recipe batches to the corpus, skipping duplicates and malformed
/// records.
pub fn cmd_ingest(paths: &DataPaths, files: &[PathBuf], json_mode: bool) -> Result<(), FlavorError> {
    // Classify every input up front: an unsupported file type must abort
    // before anything is written.
    let mut inputs: Vec<(PathBuf, SourceKind)> = Vec::with_capacity(files.len());
    for file in files {
        let canonical = validate_input_path(file)?;
        validate_file_size(&canonical, MAX_INPUT_FILE_SIZE)?;
        let kind = SourceKind::from_path(&canonical)?;
        inputs.push((canonical, kind));
    }

    let corpus_path = paths.raw_corpus();
    let existing = parse_batch(&read_text_or_empty(&corpus_path), SourceKind::Jsonl)
        .map(|batch| batch.recipes)
        .unwrap_or_default();
    let mut seen: BTreeSet<String> = existing
        .iter()
        .map(flavorgraph_core::fingerprint)
        .collect();

    let mut added = 0usize;
    let mut skipped = 0usize;
    let mut lines: Vec<String> = Vec::new();

    for (path, kind) in &inputs {
        let batch = parse_batch(&read_text(path)?, *kind)?;
        skipped += batch.skipped;
        for recipe in batch.recipes {
            let normalized = Recipe {
                title: recipe
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
                ingredients: IngredientField::List(recipe.mentions()),
                cuisine: recipe
                    .cuisine_tags()
                    .first()
                    .cloned()
                    .map(CuisineField::One),
            };
            let key = flavorgraph_core::fingerprint(&normalized);
            if !seen.insert(key) {
                skipped += 1;
                continue;
            }
            let line = serde_json::to_string(&normalized)
                .map_err(|e| FlavorError::Serialization(e.to_string()))?;
            lines.push(line);
            added += 1;
        }
    }

    if !lines.is_empty() {
        let mut content = read_text_or_empty(&corpus_path);
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&lines.join("\n"));
        content.push('\n');
        write_text(&corpus_path, &content)?;
    }

    if json_mode {
        println!(
            "{}",
            serde_json::json!({ "added": added, "skipped": skipped, "corpus": corpus_path.display().to_string() })
        );
    } else {
        println!("Ingest complete -> {}", corpus_path.display());
        println!("Added: {}  Skipped (dupes/invalid): {}", added, skipped);
    }
    Ok(())
}

// =============================================================================
// MINE COMMAND
// =============================================================================

/// Mine the recipe corpus into a ranked pair table.
#[allow(clippy::fn_params_excessive_bools)]
pub fn cmd_mine(
    paths: &DataPaths,
    config: &FlavorConfig,
    source: Option<PathBuf>,
    min_count: Option<u64>,
    top_n: Option<usize>,
    allow_any: bool,
    no_cuisine: bool,
    json_mode: bool,
) -> Result<(), FlavorError> {
    let source = source.unwrap_or_else(|| paths.raw_corpus());
    let canonical_source = validate_input_path(&source)?;
    validate_file_size(&canonical_source, MAX_INPUT_FILE_SIZE)?;
    let kind = SourceKind::from_path(&canonical_source)?;

    let batch = parse_batch(&read_text(&canonical_source)?, kind)?;
    if batch.skipped > 0 {
        tracing::warn!(skipped = batch.skipped, "malformed recipe records skipped");
    }

    let canon = load_canonicalizer(config)?;

    // The whitelist comes from curated metadata ids; --allow-any (or the
    // config flag) bypasses it, and so does a missing metadata table.
    let allow_any = allow_any || config.mining.allow_any.unwrap_or(false);
    let whitelist = if allow_any {
        None
    } else {
        let meta_text = read_text_or_empty(&paths.stage_ingredients());
        if meta_text.is_empty() {
            tracing::debug!("no ingredient metadata, mining without a whitelist");
            None
        } else {
            let ids: BTreeSet<CanonicalId> = parse_meta_rows(&meta_text)?
                .into_iter()
                .map(|m| m.id)
                .collect();
            Some(ids)
        }
    };

    let opts = MineOptions {
        whitelist,
        min_count: min_count.or(config.mining.min_count).unwrap_or(5),
        top_n: top_n.or(config.mining.top_n).unwrap_or(5000),
        cuisine_aware: !no_cuisine && config.mining.cuisine_aware.unwrap_or(true),
    };

    let rows = mine(&batch.recipes, &canon, &opts);
    let out_path = paths.stage_pairings();
    write_text(&out_path, &pair_table::encode(&rows))?;

    if json_mode {
        println!(
            "{}",
            serde_json::json!({
                "recipes": batch.recipes.len(),
                "skipped": batch.skipped,
                "pairs": rows.len(),
                "output": out_path.display().to_string()
            })
        );
    } else {
        println!(
            "Mined {} pairs from {} recipes -> {}",
            rows.len(),
            batch.recipes.len(),
            out_path.display()
        );
    }
    Ok(())
}

// =============================================================================
// DEDUPE COMMAND
// =============================================================================

/// Merge the pair table against the current alias table, in place.
pub fn cmd_dedupe(
    paths: &DataPaths,
    config: &FlavorConfig,
    json_mode: bool,
) -> Result<(), FlavorError> {
    let table_path = paths.stage_pairings();
    if !table_path.exists() {
        // Nothing to merge is a success, not a failure.
        println!("No pair table found, skipping");
        return Ok(());
    }

    let rows = pair_table::decode(&read_text(&table_path)?)?;
    let canon = load_canonicalizer(config)?;
    let merged = merge(&rows, &canon);
    write_text(&table_path, &pair_table::encode(&merged))?;

    if json_mode {
        println!(
            "{}",
            serde_json::json!({ "rows_in": rows.len(), "rows_out": merged.len() })
        );
    } else {
        println!(
            "Deduped {} -> {} rows. Updated {}",
            rows.len(),
            merged.len(),
            table_path.display()
        );
    }
    Ok(())
}

// =============================================================================
// BUILD COMMAND
// =============================================================================

/// Build the graph JSONL artifacts from the canonical pair table.
pub fn cmd_build(
    paths: &DataPaths,
    config: &FlavorConfig,
    json_mode: bool,
) -> Result<(), FlavorError> {
    let rows = load_pair_records(&read_text(&paths.stage_pairings())?)?;

    // Metadata is optional: a corpus-only graph is a first-class flow.
    let meta_text = read_text_or_empty(&paths.stage_ingredients());
    let meta = if meta_text.is_empty() {
        tracing::debug!("no ingredient metadata, building a corpus-only graph");
        Vec::new()
    } else {
        parse_meta_rows(&meta_text)?
    };

    let lexicon = config.lexicon()?;
    let flavor_graph = build(&meta, &rows, &lexicon);

    let ingredient_records: Vec<GraphRecord> = flavor_graph
        .ingredients
        .iter()
        .cloned()
        .map(GraphRecord::Ingredient)
        .collect();
    let pairing_records: Vec<GraphRecord> = flavor_graph
        .pairings
        .iter()
        .cloned()
        .map(GraphRecord::Pairing)
        .collect();
    let edge_records: Vec<GraphRecord> = flavor_graph
        .edges
        .iter()
        .cloned()
        .map(GraphRecord::Edge)
        .collect();

    write_text(
        &paths.ingredients_jsonl(),
        &graph::encode_lines(&ingredient_records)?,
    )?;
    write_text(
        &paths.pairings_jsonl(),
        &graph::encode_lines(&pairing_records)?,
    )?;
    write_text(&paths.edges_jsonl(), &graph::encode_lines(&edge_records)?)?;
    write_text(
        &paths.graph_jsonl(),
        &graph::encode_lines(&flavor_graph.records())?,
    )?;

    let counts = flavor_graph.counts();
    if json_mode {
        println!("{}", serde_json::json!({
            "ingredients": counts.ingredients,
            "pairings": counts.pairings,
            "edges": counts.edges
        }));
    } else {
        println!(
            "Wrote graph: {} ingredients, {} pairings, {} edges -> {}",
            counts.ingredients,
            counts.pairings,
            counts.edges,
            paths.graph_jsonl().display()
        );
    }
    Ok(())
}

// =============================================================================
// MANIFEST COMMAND
// =============================================================================

/// Write the provenance manifest next to the graph artifacts.
pub fn cmd_manifest(
    paths: &DataPaths,
    config: &FlavorConfig,
    source: Option<String>,
    min_count: Option<u64>,
    top_n: Option<usize>,
    allow_any: bool,
) -> Result<(), FlavorError> {
    let manifest = Manifest {
        generated_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        source_file: source,
        params: MineParams {
            min_count: min_count.or(config.mining.min_count).unwrap_or(5),
            top_n: top_n.or(config.mining.top_n).unwrap_or(5000),
            allow_any: allow_any || config.mining.allow_any.unwrap_or(false),
        },
        counts: flavorgraph_core::ArtifactCounts {
            ingredients: line_count(&paths.ingredients_jsonl()),
            pairings: line_count(&paths.pairings_jsonl()),
            edges: line_count(&paths.edges_jsonl()),
        },
        files: flavorgraph_core::ManifestFiles::default(),
    };

    let manifest_path = paths.manifest();
    write_text(&manifest_path, &manifest.to_json()?)?;
    println!("Wrote {}", manifest_path.display());
    Ok(())
}

// =============================================================================
// REPORT COMMAND
// =============================================================================

/// Render the top-pairs HTML report.
pub fn cmd_report(paths: &DataPaths) -> Result<(), FlavorError> {
    let rows = load_pair_records(&read_text(&paths.stage_pairings())?)?;

    let overall = report::top_overall(&rows, 50);
    let by_cuisine = report::top_by_cuisine(&rows, 30);

    let html = render_report(&overall, &by_cuisine);
    let out_path = paths.report_html();
    write_text(&out_path, &html)?;
    println!("Wrote {}", out_path.display());
    Ok(())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_table(rows: &[PairRecord]) -> String {
    let mut body = String::new();
    for r in rows {
        let key = format!("{} {}", r.a, r.b).to_lowercase();
        let score = report::pair_score(r.lift, r.count);
        let pills = r
            .cuisines
            .iter()
            .map(|c| format!("<span class='pill'>{}</span>", escape_html(c)))
            .collect::<Vec<_>>()
            .join("");
        body.push_str(&format!(
            "<tr data-k=\"{key}\"><td><strong>{a}</strong> + <strong>{b}</strong></td>\
             <td class=\"muted\">{a_id} → {b_id}</td><td>{count}</td><td>{lift:.2}</td>\
             <td>{score:.2}</td><td>{pills}</td></tr>\n",
            key = escape_html(&key),
            a = escape_html(&r.a),
            b = escape_html(&r.b),
            a_id = r.a_id,
            b_id = r.b_id,
            count = r.count,
            lift = r.lift,
            score = score,
        ));
    }
    format!(
        "<table><thead><tr><th>Pair</th><th class=\"muted\">IDs</th><th>Count</th>\
         <th>Lift</th><th>Score</th><th>Cuisines</th></tr></thead><tbody>\n{body}</tbody></table>"
    )
}

fn render_report(overall: &[PairRecord], by_cuisine: &[report::CuisineSection]) -> String {
    let sections = by_cuisine
        .iter()
        .map(|sec| {
            format!(
                "<div><h3>{}</h3>{}</div>",
                escape_html(&sec.cuisine),
                render_table(&sec.rows)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8"/>
<title>Flavorgraph — Top Pairings</title>
<style>
 body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Inter,Arial,sans-serif;margin:24px;}}
 h1,h2{{margin:0 0 12px}}
 table{{border-collapse:collapse;width:100%;margin:12px 0}}
 th,td{{border:1px solid #e5e7eb;padding:8px 10px;font-size:14px}}
 th{{background:#f9fafb;text-align:left}}
 .grid{{display:grid;grid-template-columns:1fr;gap:24px}}
 .pill{{display:inline-block;background:#eef2ff;color:#3730a3;padding:2px 8px;border-radius:999px;font-size:12px;margin-right:6px}}
 #q{{padding:8px 10px;width:320px;border:1px solid #e5e7eb;border-radius:8px}}
 .muted{{color:#6b7280}}
</style>
</head>
<body>
<h1>Flavorgraph — Top Pairings</h1>
<input id="q" placeholder="Filter pairs by token…"/>
<section>
  <h2>Overall (top 50)</h2>
  {overall_table}
</section>
<section>
  <h2>By Cuisine</h2>
  <div class="grid">
    {sections}
  </div>
</section>
<script>
const q = document.getElementById('q');
q.addEventListener('input', () => {{
  const term = q.value.trim().toLowerCase();
  document.querySelectorAll('tbody tr').forEach(tr => {{
    const text = tr.dataset.k || '';
    tr.style.display = !term || text.includes(term) ? '' : 'none';
  }});
}});
</script>
</body></html>
"#,
        overall_table = render_table(overall),
        sections = sections,
    )
}

// =============================================================================
// DROPDOWN COMMAND
// =============================================================================

/// Export active ingredients (those appearing on the ingredient side of an
/// edge) for UI dropdowns.
pub fn cmd_dropdown(paths: &DataPaths, config: &FlavorConfig) -> Result<(), FlavorError> {
    let pair_text = read_text_or_empty(&paths.stage_pairings());
    let mut active: BTreeSet<CanonicalId> = BTreeSet::new();
    if !pair_text.is_empty() {
        for record in load_pair_records(&pair_text)? {
            active.insert(record.a_id);
        }
    }

    let meta_text = read_text_or_empty(&paths.stage_ingredients());
    let lexicon = config.lexicon()?;
    let mut records: Vec<GraphRecord> = Vec::new();
    if !meta_text.is_empty() {
        let rows = csv::parse_rows(&meta_text)?;
        let mut seen: BTreeSet<CanonicalId> = BTreeSet::new();
        let mut ingredients: Vec<Ingredient> = Vec::new();
        for row in rows {
            let name = row.get("name").filter(|v| !v.is_empty()).cloned();
            let id = match row.get("id").filter(|v| !v.is_empty()) {
                Some(id) => CanonicalId::from_slug(id.clone()),
                None => match &name {
                    Some(n) => CanonicalId::from_name(n),
                    None => continue,
                },
            };
            if !active.contains(&id) || !seen.insert(id.clone()) {
                continue;
            }
            let name = name.unwrap_or_else(|| id.to_spaced_name());
            let default_cuisine = row
                .get("default_cuisine")
                .or_else(|| row.get("cuisines"))
                .filter(|v| !v.is_empty())
                .cloned();
            ingredients.push(Ingredient {
                id,
                category: lexicon.ingredient_category(&name),
                name,
                default_cuisine,
                notes: None,
            });
        }
        ingredients.sort_by(|x, y| x.id.cmp(&y.id));
        records = ingredients.into_iter().map(GraphRecord::Ingredient).collect();
    }

    let out_path = paths.dropdown_jsonl();
    write_text(&out_path, &graph::encode_lines(&records)?)?;
    println!(
        "Wrote {} ({} active ingredients)",
        out_path.display(),
        records.len()
    );
    Ok(())
}

// =============================================================================
// SUGGEST COMMAND
// =============================================================================

/// Suggest pairings for a set of ingredients, with overlapping corpus
/// recipes.
pub fn cmd_suggest(
    paths: &DataPaths,
    config: &FlavorConfig,
    ingredients: &[String],
    cuisine: Option<&str>,
    top: usize,
) -> Result<(), FlavorError> {
    let canon = load_canonicalizer(config)?;
    let wanted: BTreeSet<CanonicalId> = ingredients
        .iter()
        .filter_map(|raw| flavorgraph_core::normalize_mention(raw))
        .map(|token| canon.canonical_id(&token))
        .filter(|id| !id.is_empty())
        .collect();
    if wanted.is_empty() {
        return Err(FlavorError::Config(
            "no usable ingredient names given".to_string(),
        ));
    }

    let pair_text = read_text_or_empty(&paths.stage_pairings());
    let rows = if pair_text.is_empty() {
        Vec::new()
    } else {
        load_pair_records(&pair_text)?
    };
    let suggestions = suggest(&rows, &wanted, cuisine, top);

    // Recipe matches consider the wanted set plus the strongest suggestions.
    let mut chosen = wanted.clone();
    chosen.extend(suggestions.iter().take(5).map(|s| s.ingredient.clone()));
    let corpus = parse_batch(&read_text_or_empty(&paths.raw_corpus()), SourceKind::Jsonl)
        .map(|batch| batch.recipes)
        .unwrap_or_default();
    let matches = match_recipes(&corpus, &chosen, &canon, 10);

    let output = serde_json::json!({
        "input": wanted.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "cuisine": cuisine,
        "suggestions": suggestions,
        "recipe_matches": matches,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server over the built graph.
pub async fn cmd_server(
    paths: &DataPaths,
    config: &FlavorConfig,
    host: &str,
    port: u16,
) -> Result<(), FlavorError> {
    let state = api::ServedState::load(paths, config)?;

    println!("Flavorgraph API Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!("  Data:     {}", paths.graph_jsonl().display());
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /status   - Graph collection counts");
    println!("  GET  /manifest - Provenance manifest");
    println!("  POST /suggest  - Pairing suggestions");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, state).await
}
