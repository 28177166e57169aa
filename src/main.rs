//! spanlocate - locate an ordered set of text fragments in a document
//!
//! Reads the haystack from a file (or stdin with `-`), locates the fragments
//! given on the command line and prints the match as JSON, or `null` when no
//! span holds them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use spanlocate::{split_needle, LocateConfig, Locator, LoggingYamlConfig, SpanlocateConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File holding the text to search; `-` reads stdin
    #[arg(long)]
    haystack: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip fragments after the first that cannot be placed
    #[arg(long)]
    allow_missing: bool,

    /// Only consider the first N occurrences of the first fragment
    #[arg(long)]
    max_candidates: Option<usize>,

    /// Treat the fragments as copy/paste text and split them into words
    #[arg(long)]
    words: bool,

    /// Include per-fragment placements and candidate counts
    #[arg(long)]
    explain: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Ordered fragments to locate
    #[arg(required = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SpanlocateConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SpanlocateConfig::default(),
    };
    init_tracing(&config.logging);

    let locator = Locator::new(resolve_locate_config(
        &config,
        args.allow_missing,
        args.max_candidates,
    ))?;

    let haystack = read_haystack(&args.haystack)?;
    let tokens = prepare_tokens(args.tokens, args.words);

    info!(
        tokens = tokens.len(),
        haystack_len = haystack.len(),
        explain = args.explain,
        "spanlocate_start"
    );

    let rendered = render_output(&locator, &haystack, &tokens, args.explain, args.pretty)?;
    println!("{rendered}");

    Ok(())
}

/// Locator settings from the YAML file, with command-line flags on top.
fn resolve_locate_config(
    config: &SpanlocateConfig,
    allow_missing: bool,
    max_candidates: Option<usize>,
) -> LocateConfig {
    let mut locate_cfg = config.locate_config();
    if allow_missing {
        locate_cfg.allow_missing_tokens = true;
    }
    if max_candidates.is_some() {
        locate_cfg.max_candidates = max_candidates;
    }
    locate_cfg
}

/// With `words`, the arguments are joined and re-split on whitespace.
fn prepare_tokens(tokens: Vec<String>, words: bool) -> Vec<String> {
    if !words {
        return tokens;
    }
    split_needle(&tokens.join(" "))
        .into_iter()
        .map(|word| word.text)
        .collect()
}

/// JSON for the match (or explanation); `null` when nothing was found.
fn render_output(
    locator: &Locator,
    haystack: &str,
    tokens: &[String],
    explain: bool,
    pretty: bool,
) -> anyhow::Result<String> {
    let output = if explain {
        serde_json::to_value(locator.explain(haystack, tokens))?
    } else {
        serde_json::to_value(locator.locate(haystack, tokens))?
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

fn read_haystack(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("reading haystack from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("reading haystack {}", path.display()))
}

fn init_tracing(logging: &LoggingYamlConfig) {
    // RUST_LOG wins over the configured level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
