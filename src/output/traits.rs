//! Result sink traits and types
//!
//! This module defines the trait interface for match sinks and the match
//! record they persist.

use crate::url::ContentType;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One keyword found in one resource
///
/// Only produced for keywords with at least one occurrence. Field names are
/// the CSV column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Normalized URL of the resource
    #[serde(rename = "URL")]
    pub url: String,

    /// Content type the resource was extracted as
    #[serde(rename = "Type")]
    pub content_type: ContentType,

    /// Keyword as searched (lowercase)
    #[serde(rename = "Keyword")]
    pub keyword: String,

    /// Number of non-overlapping occurrences, always > 0
    #[serde(rename = "Occurrences")]
    pub occurrences: usize,
}

impl MatchRecord {
    pub fn new(url: &str, content_type: ContentType, keyword: &str, occurrences: usize) -> Self {
        Self {
            url: url.to_string(),
            content_type,
            keyword: keyword.to_string(),
            occurrences,
        }
    }
}

/// Trait for match sinks
///
/// A sink receives match records one at a time, in crawl order. A record
/// must be durable once `append` returns, since a run may be interrupted at
/// any point.
pub trait MatchSink {
    /// Persists one match record
    fn append(&mut self, record: &MatchRecord) -> OutputResult<()>;
}

impl<S: MatchSink + ?Sized> MatchSink for &mut S {
    fn append(&mut self, record: &MatchRecord) -> OutputResult<()> {
        (**self).append(record)
    }
}

impl<S: MatchSink + ?Sized> MatchSink for Box<S> {
    fn append(&mut self, record: &MatchRecord) -> OutputResult<()> {
        (**self).append(record)
    }
}

/// Sink that keeps records in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<MatchRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended so far, in order
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }
}

impl MatchSink for MemorySink {
    fn append(&mut self, record: &MatchRecord) -> OutputResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
