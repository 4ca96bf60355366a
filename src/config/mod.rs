//! Configuration module
//!
//! This module builds the per-run scan configuration from command-line
//! values and an optional TOML settings file, then validates it.
//!
//! # Example
//!
//! ```no_run
//! use site_keyword_scanner::config::{build_config, load_settings, Overrides};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("scanner.toml")).unwrap();
//! let config = build_config(
//!     "https://example.com/",
//!     &["keyword".to_string()],
//!     false,
//!     settings,
//!     Overrides::default(),
//! )
//! .unwrap();
//! println!("Scanner will use max depth: {}", config.budgets.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlBudgets, FetchConfig, OutputConfig, ScanConfig, SettingsFile};

// Re-export parser functions
pub use parser::{build_config, load_settings, Overrides};
pub use validation::validate;
