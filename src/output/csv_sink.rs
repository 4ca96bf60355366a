//! CSV match sink
//!
//! One file per run, named after the seed host and the run start time.
//! Every append opens the file, writes one row and flushes, so rows written
//! before an interruption survive it.

use crate::output::traits::{MatchRecord, MatchSink, OutputResult};
use crate::url::extract_netloc;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Timestamp format used in result filenames
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Append-only CSV file sink
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Creates a sink writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the sink for a run started at `started_at` from `seed_url`
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use site_keyword_scanner::output::CsvSink;
    /// use std::path::Path;
    ///
    /// let started = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    /// let sink = CsvSink::for_run(Path::new("csv"), "https://www.example.com/", started);
    /// assert_eq!(
    ///     sink.path(),
    ///     Path::new("csv/example_com_results_20240309_140507.csv")
    /// );
    /// ```
    pub fn for_run(directory: &Path, seed_url: &str, started_at: DateTime<Local>) -> Self {
        Self::new(directory.join(results_filename(seed_url, started_at)))
    }

    /// Destination file of this sink
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchSink for CsvSink {
    fn append(&mut self, record: &MatchRecord) -> OutputResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // The header goes in only when this append creates the file
        let file_exists = self.path.is_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        Ok(())
    }
}

/// Builds `<host>_results_<YYYYMMDD_HHMMSS>.csv` for a seed URL
///
/// The host drops any `www.` and has `.` and `:` replaced by `_`.
pub fn results_filename(seed_url: &str, started_at: DateTime<Local>) -> String {
    let host = extract_netloc(seed_url)
        .map(|netloc| netloc.replace("www.", "").replace(['.', ':'], "_"))
        .unwrap_or_else(|| "site".to_string());

    format!(
        "{}_results_{}.csv",
        host,
        started_at.format(TIMESTAMP_FORMAT)
    )
}
