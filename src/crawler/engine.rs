//! Crawl engine - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Managing the frontier queue and visited set
//! - Classifying, extracting and scoring each resource
//! - Emitting match records to the sink
//! - Discovering same-origin links and enforcing the depth and page budgets
//! - Stopping cleanly on the shutdown signal

use crate::config::{CrawlBudgets, ScanConfig};
use crate::extract::Extractor;
use crate::keywords::count_keywords;
use crate::output::{CrawlReport, MatchRecord, MatchSink};
use crate::state::{FrontierEntry, RunState};
use crate::url::{classify, extract_netloc, is_same_origin, normalize_url, ContentType};
use crate::ScanError;
use std::future::Future;
use std::path::PathBuf;

/// Single-threaded crawler owning all state of one run
pub struct Crawler<S> {
    /// Normalized seed URL
    seed_url: String,

    /// Network location links must share with the seed to be followed
    origin: Option<String>,

    keywords: Vec<String>,
    budgets: CrawlBudgets,
    single_page: bool,
    extractor: Extractor,
    sink: S,
    state: RunState,
    matches_saved: usize,
    output_path: Option<PathBuf>,
}

impl<S: MatchSink> Crawler<S> {
    /// Creates a new crawler for one run
    ///
    /// # Arguments
    ///
    /// * `config` - The validated scan configuration
    /// * `sink` - Where match records are written
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(ScanError)` - The HTTP client could not be built
    pub fn new(config: &ScanConfig, sink: S) -> Result<Self, ScanError> {
        let extractor = Extractor::new(&config.fetch)?;
        Ok(Self::with_extractor(config, extractor, sink))
    }

    /// Creates a crawler around an existing extractor
    pub fn with_extractor(config: &ScanConfig, extractor: Extractor, sink: S) -> Self {
        let seed_url = normalize_url(&config.seed_url);
        let origin = extract_netloc(&seed_url);

        Self {
            state: RunState::seeded(&seed_url),
            seed_url,
            origin,
            keywords: config.keywords.clone(),
            budgets: config.budgets,
            single_page: config.single_page,
            extractor,
            sink,
            matches_saved: 0,
            output_path: None,
        }
    }

    /// Records where the sink writes, for the run report
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Runs the scan in the configured mode until done or `shutdown` resolves
    ///
    /// Records written before the shutdown signal stay written; the report
    /// then has `interrupted` set.
    pub async fn run<F: Future>(&mut self, shutdown: F) -> Result<CrawlReport, ScanError> {
        if self.single_page {
            self.scan_single(shutdown).await
        } else {
            self.crawl(shutdown).await
        }
    }

    /// Breadth-first crawl from the seed under the depth and page budgets
    ///
    /// The page budget is checked once per iteration, so a page being
    /// processed always completes with all its matches.
    pub async fn crawl<F: Future>(&mut self, shutdown: F) -> Result<CrawlReport, ScanError> {
        tokio::pin!(shutdown);

        tracing::info!(
            "Starting crawl of {} (max depth {}, max pages {})",
            self.seed_url,
            self.budgets.max_depth,
            self.budgets.max_pages
        );

        let mut interrupted = false;

        while self.state.pages_processed() < self.budgets.max_pages {
            let Some(entry) = self.state.frontier_mut().pop() else {
                tracing::debug!("Frontier is empty, crawl complete");
                break;
            };

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    interrupted = true;
                    break;
                }
                result = self.process_entry(entry) => result?,
            }
        }

        tracing::info!(
            "Crawl finished: {} page(s) processed, {} still queued",
            self.state.pages_processed(),
            self.state.frontier().len()
        );

        Ok(self.report(interrupted))
    }

    /// Scans only the seed URL, with no link discovery
    pub async fn scan_single<F: Future>(&mut self, shutdown: F) -> Result<CrawlReport, ScanError> {
        tokio::pin!(shutdown);

        let url = self.seed_url.clone();
        let mut interrupted = false;

        if self.state.begin_page(&url) {
            tracing::info!("Single mode processing: {}", url);

            tokio::select! {
                biased;
                _ = &mut shutdown => interrupted = true,
                result = self.scan_resource(&url) => {
                    result?;
                }
            }
        }

        Ok(self.report(interrupted))
    }

    /// Processes one dequeued frontier entry
    async fn process_entry(&mut self, entry: FrontierEntry) -> Result<(), ScanError> {
        let url = normalize_url(&entry.url);

        if !self.state.begin_page(&url) {
            tracing::trace!("Already visited: {}", url);
            return Ok(());
        }

        tracing::info!("Processing (depth {}): {}", entry.depth, url);

        let content_type = self.scan_resource(&url).await?;

        if content_type == ContentType::Html
            && entry.depth < self.budgets.max_depth
            && self.state.pages_processed() < self.budgets.max_pages
        {
            self.discover_links(&url, entry.depth).await;
        }

        Ok(())
    }

    /// Classifies, extracts and scores one resource, writing its matches
    async fn scan_resource(&mut self, url: &str) -> Result<ContentType, ScanError> {
        let content_type = classify(url);
        let text = self.extractor.extract(url, content_type).await;

        if text.is_empty() {
            tracing::info!("No text extracted from: {}", url);
            return Ok(content_type);
        }

        let counts = count_keywords(&text, &self.keywords);
        let mut found = 0;

        for (keyword, occurrences) in counts.matches() {
            tracing::info!("Found '{}' {} time(s) in: {}", keyword, occurrences, url);
            let record = MatchRecord::new(url, content_type, keyword, occurrences);
            self.sink.append(&record)?;
            self.matches_saved += 1;
            found += 1;
        }

        if found == 0 {
            tracing::info!("No keyword found in: {}", url);
        }

        Ok(content_type)
    }

    /// Queues the same-origin links of an HTML page at `depth + 1`
    ///
    /// Stops mid-list once visited plus queued URLs reach the page budget.
    async fn discover_links(&mut self, page_url: &str, depth: u32) {
        let Some(origin) = self.origin.clone() else {
            return;
        };

        let links = self.extractor.fetch_links(page_url).await;
        for link in links {
            let link = normalize_url(&link);

            if !is_same_origin(&link, &origin) {
                tracing::trace!("Skipping cross-origin link: {}", link);
                continue;
            }

            if self.state.is_visited(&link) {
                continue;
            }

            let to_front = self
                .state
                .frontier_mut()
                .enqueue(FrontierEntry::new(link.as_str(), depth + 1));
            tracing::debug!(
                "Queued {} at depth {} ({})",
                link,
                depth + 1,
                if to_front { "front" } else { "back" }
            );

            if self.state.known_count() >= self.budgets.max_pages {
                tracing::debug!("Page budget reached, not queueing more links");
                break;
            }
        }
    }

    fn report(&self, interrupted: bool) -> CrawlReport {
        CrawlReport {
            pages_processed: self.state.pages_processed(),
            matches_saved: self.matches_saved,
            interrupted,
            output_path: self.output_path.clone(),
        }
    }

    /// Normalized seed URL of this run
    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    /// Current run state
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Sink receiving this run's match records
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the crawler, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
