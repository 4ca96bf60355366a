//! Run report and end-of-run summary

use std::path::PathBuf;

/// Outcome of one scan run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Pages and documents dequeued and processed
    pub pages_processed: usize,

    /// Match records written to the sink
    pub matches_saved: usize,

    /// True if the run was stopped by the shutdown signal
    pub interrupted: bool,

    /// Destination of the match records, when file-backed
    pub output_path: Option<PathBuf>,
}

/// Formats the final summary line for a run
///
/// # Example
///
/// ```
/// use site_keyword_scanner::output::{format_summary, CrawlReport};
///
/// let report = CrawlReport::default();
/// assert_eq!(format_summary(&report), "No keyword matches saved.");
/// ```
pub fn format_summary(report: &CrawlReport) -> String {
    if report.matches_saved == 0 {
        return "No keyword matches saved.".to_string();
    }

    match &report.output_path {
        Some(path) => format!(
            "Total {} match(es) saved to: {}",
            report.matches_saved,
            path.display()
        ),
        None => format!("Total {} match(es) saved", report.matches_saved),
    }
}

/// Prints the run summary to stdout
pub fn print_summary(report: &CrawlReport) {
    if report.interrupted {
        println!("\nInterrupted by user. Exiting...");
    }
    println!("{}", format_summary(report));
}
