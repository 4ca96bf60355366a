//! Output module for persisting matches and reporting runs
//!
//! This module handles:
//! - The match record and the sink trait records are written through
//! - The per-run CSV file sink
//! - The end-of-run summary

mod csv_sink;
pub mod stats;
mod traits;

pub use csv_sink::{results_filename, CsvSink};
pub use stats::{format_summary, print_summary, CrawlReport};
pub use traits::{MatchRecord, MatchSink, MemorySink, OutputError, OutputResult};
