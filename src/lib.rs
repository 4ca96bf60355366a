//! Site Keyword Scanner: a same-site keyword crawler
//!
//! This crate crawls a web site from a seed URL, extracts text from every
//! reachable page and linked document (HTML, PDF, DOCX, TXT), counts
//! occurrences of user-supplied keywords and appends the matches to a CSV file.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod keywords;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for scanner setup and result persistence
///
/// Per-resource fetch and parse failures never surface here; they degrade to
/// "no text extracted" inside the extractors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlBudgets, ScanConfig};
pub use crawler::{CrawlReport, Crawler};
pub use keywords::count_keywords;
pub use output::{CsvSink, MatchRecord, MatchSink, MemorySink};
pub use url::{classify, normalize_url, ContentType};
