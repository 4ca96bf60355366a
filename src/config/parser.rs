use crate::config::types::{CrawlBudgets, OutputConfig, ScanConfig, SettingsFile};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Values supplied on the command line; `None` leaves the settings-file or
/// built-in default in place
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_depth: Option<u32>,
    pub max_pages: Option<usize>,
    pub output_directory: Option<String>,
}

/// Loads and parses an optional settings file
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(SettingsFile)` - Successfully loaded settings
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: SettingsFile = toml::from_str(&content)?;
    Ok(settings)
}

/// Builds and validates the configuration for one scan run
///
/// Keywords are lowercased here so matching downstream is case-insensitive.
///
/// # Example
///
/// ```
/// use site_keyword_scanner::config::{build_config, Overrides, SettingsFile};
///
/// let config = build_config(
///     "https://example.com/",
///     &["Rust".to_string()],
///     false,
///     SettingsFile::default(),
///     Overrides::default(),
/// )
/// .unwrap();
/// assert_eq!(config.keywords, vec!["rust".to_string()]);
/// assert_eq!(config.budgets.max_depth, 2);
/// ```
pub fn build_config(
    seed_url: &str,
    keywords: &[String],
    single_page: bool,
    settings: SettingsFile,
    overrides: Overrides,
) -> Result<ScanConfig, ConfigError> {
    let SettingsFile {
        crawl,
        fetch,
        output,
    } = settings;

    let budgets = CrawlBudgets {
        max_depth: overrides.max_depth.unwrap_or(crawl.max_depth),
        max_pages: overrides.max_pages.unwrap_or(crawl.max_pages),
    };

    let output = OutputConfig {
        directory: overrides.output_directory.unwrap_or(output.directory),
    };

    let config = ScanConfig {
        seed_url: seed_url.trim().to_string(),
        keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        single_page,
        budgets,
        fetch,
        output,
    };

    validate(&config)?;

    Ok(config)
}
