//! HTTP fetching for the extractors
//!
//! This module handles all HTTP requests for the scanner, including:
//! - Building the HTTP client with the configured user agent
//! - GET requests with a per-request timeout
//! - Error classification (status, timeout, connection, other)
//!
//! There is no retry logic: a failed fetch is reported once and the caller
//! treats it as "no text".

use crate::config::FetchConfig;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;

/// Failure of a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Per-request timeouts are applied by the fetch functions; the client only
/// carries the connect timeout.
///
/// # Example
///
/// ```
/// use site_keyword_scanner::config::FetchConfig;
/// use site_keyword_scanner::extract::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and decodes the body as text (charset from headers)
pub async fn fetch_text(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let response = send(client, url, timeout).await?;
    Ok(response.text().await?)
}

/// Fetches a URL and returns the raw body bytes
pub async fn fetch_bytes(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    let response = send(client, url, timeout).await?;
    Ok(response.bytes().await?.to_vec())
}

/// Sends a GET request, rejecting non-2xx responses
async fn send(client: &Client, url: &str, timeout: Duration) -> Result<Response, FetchError> {
    let response = client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response)
}
