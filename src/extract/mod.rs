//! Text extraction for crawled resources
//!
//! This module turns a URL into lowercase plain text, one extractor per
//! content type:
//! - HTML: visible text nodes joined with spaces
//! - PDF: per-page text joined with spaces
//! - DOCX: paragraph text joined with spaces
//! - TXT: the raw body
//!
//! Every extractor performs exactly one fetch. Fetch, parse and decode
//! failures are logged and yield empty text; they never abort a crawl.

mod docx;
mod fetch;
mod html;
mod pdf;

pub use docx::docx_to_text;
pub use fetch::{build_http_client, fetch_bytes, fetch_text, FetchError};
pub use html::{extract_links, html_to_text};
pub use pdf::pdf_to_text;

use crate::config::FetchConfig;
use crate::url::ContentType;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur while extracting text from one resource
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Join(String),
}

/// Fetches resources and dispatches them to the matching extractor
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
    html_timeout: Duration,
    document_timeout: Duration,
}

impl Extractor {
    /// Creates an extractor with its own HTTP client
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates an extractor around an existing HTTP client
    pub fn with_client(client: Client, config: &FetchConfig) -> Self {
        Self {
            client,
            html_timeout: Duration::from_secs(config.html_timeout_secs),
            document_timeout: Duration::from_secs(config.document_timeout_secs),
        }
    }

    /// Returns the fetch timeout used for a content type
    pub fn timeout_for(&self, content_type: ContentType) -> Duration {
        if content_type.is_document() {
            self.document_timeout
        } else {
            self.html_timeout
        }
    }

    /// Extracts lowercase text from `url`, or an empty string on any failure
    pub async fn extract(&self, url: &str, content_type: ContentType) -> String {
        let timeout = self.timeout_for(content_type);
        let result = match content_type {
            ContentType::Html => self.extract_html(url, timeout).await,
            ContentType::Pdf => self.extract_pdf(url, timeout).await,
            ContentType::Docx => self.extract_docx(url, timeout).await,
            ContentType::Txt => self.extract_txt(url, timeout).await,
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {}: {} - {}", content_type, url, e);
                String::new()
            }
        }
    }

    /// Fetches an HTML page and returns the absolute links it contains
    ///
    /// A failed fetch is logged and yields no links.
    pub async fn fetch_links(&self, url: &str) -> Vec<String> {
        let base_url = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("Cannot resolve links against {}: {}", url, e);
                return Vec::new();
            }
        };

        match fetch_text(&self.client, url, self.html_timeout).await {
            Ok(body) => extract_links(&body, &base_url),
            Err(e) => {
                tracing::warn!("Failed to fetch HTML: {} - {}", url, e);
                Vec::new()
            }
        }
    }

    async fn extract_html(&self, url: &str, timeout: Duration) -> Result<String, ExtractError> {
        let body = fetch_text(&self.client, url, timeout).await?;
        Ok(html_to_text(&body))
    }

    async fn extract_txt(&self, url: &str, timeout: Duration) -> Result<String, ExtractError> {
        let body = fetch_text(&self.client, url, timeout).await?;
        Ok(body.to_lowercase())
    }

    async fn extract_pdf(&self, url: &str, timeout: Duration) -> Result<String, ExtractError> {
        let bytes = fetch_bytes(&self.client, url, timeout).await?;
        run_blocking(move || pdf_to_text(&bytes)).await
    }

    async fn extract_docx(&self, url: &str, timeout: Duration) -> Result<String, ExtractError> {
        let bytes = fetch_bytes(&self.client, url, timeout).await?;
        run_blocking(move || docx_to_text(&bytes)).await
    }
}

/// Runs a document parser off the async runtime
///
/// A panic inside the parser surfaces as [`ExtractError::Join`].
async fn run_blocking<F>(parse: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| ExtractError::Join(e.to_string()))?
}
