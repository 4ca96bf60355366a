//! Crawler module for site traversal and keyword scanning
//!
//! This module contains the core crawling logic:
//! - Frontier traversal under depth and page budgets
//! - Content-type dispatch to the text extractors
//! - Keyword scoring and match emission
//! - Same-origin link discovery with documents queued first

mod engine;

pub use crate::output::CrawlReport;
pub use engine::Crawler;

use crate::config::ScanConfig;
use crate::output::CsvSink;
use crate::ScanError;
use chrono::Local;
use std::future::Future;
use std::path::Path;

/// Runs a complete scan writing matches to a fresh per-run CSV file
///
/// This is the main entry point for starting a scan. It will:
/// 1. Name the CSV file after the seed host and the current time
/// 2. Build the HTTP client
/// 3. Crawl (or scan the single page) until done or `shutdown` resolves
///
/// # Arguments
///
/// * `config` - The validated scan configuration
/// * `shutdown` - Future that resolves when the run should stop
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Scan finished or was interrupted
/// * `Err(ScanError)` - Setup failed or a record could not be written
///
/// # Example
///
/// ```no_run
/// use site_keyword_scanner::config::{build_config, Overrides, SettingsFile};
/// use site_keyword_scanner::crawler::scan;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = build_config(
///     "https://example.com/",
///     &["keyword".to_string()],
///     false,
///     SettingsFile::default(),
///     Overrides::default(),
/// )?;
/// let report = scan(&config, tokio::signal::ctrl_c()).await?;
/// println!("{} match(es) saved", report.matches_saved);
/// # Ok(())
/// # }
/// ```
pub async fn scan<F: Future>(config: &ScanConfig, shutdown: F) -> Result<CrawlReport, ScanError> {
    let sink = CsvSink::for_run(Path::new(&config.output.directory), &config.seed_url, Local::now());
    let output_path = sink.path().to_path_buf();

    tracing::debug!("Writing matches to {}", output_path.display());

    let mut crawler = Crawler::new(config, sink)?.with_output_path(output_path);
    crawler.run(shutdown).await
}
