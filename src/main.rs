//! Site Keyword Scanner main entry point
//!
//! This is the command-line interface for the same-site keyword crawler.

use anyhow::Context;
use clap::Parser;
use site_keyword_scanner::config::{build_config, load_settings, Overrides, SettingsFile};
use site_keyword_scanner::crawler::scan;
use site_keyword_scanner::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site Keyword Scanner: count keywords across a web site
///
/// Crawls pages and linked documents (PDF, DOCX, TXT) on the same host as
/// the starting URL and appends every keyword match to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "site-keyword-scanner")]
#[command(version = "1.0.0")]
#[command(about = "Scan a web site for keywords", long_about = None)]
struct Cli {
    /// Starting URL of the scan
    #[arg(value_name = "URL")]
    url: String,

    /// Keywords to count (matched case-insensitively)
    #[arg(value_name = "KEYWORD", required = true)]
    keywords: Vec<String>,

    /// Scan only the starting URL without following links
    #[arg(long)]
    single: bool,

    /// Maximum link depth from the starting URL
    #[arg(long, value_name = "N")]
    max_depth: Option<u32>,

    /// Maximum number of URLs to process
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Path to a TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the CSV results file is written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            load_settings(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?
        }
        None => SettingsFile::default(),
    };

    let overrides = Overrides {
        max_depth: cli.max_depth,
        max_pages: cli.max_pages,
        output_directory: cli.output_dir,
    };

    let config = build_config(&cli.url, &cli.keywords, cli.single, settings, overrides)
        .context("Invalid scan configuration")?;

    let report = match scan(&config, tokio::signal::ctrl_c()).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            return Err(e.into());
        }
    };

    print_summary(&report);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_keyword_scanner=info,warn"),
            1 => EnvFilter::new("site_keyword_scanner=debug,info"),
            2 => EnvFilter::new("site_keyword_scanner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
