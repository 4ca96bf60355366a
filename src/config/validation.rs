use crate::config::types::{CrawlBudgets, FetchConfig, OutputConfig, ScanConfig};
use crate::url::extract_netloc;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &ScanConfig) -> Result<(), ConfigError> {
    validate_seed_url(&config.seed_url)?;
    validate_keywords(&config.keywords)?;
    validate_budgets(&config.budgets)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the seed URL: it must resolve to a host
fn validate_seed_url(seed_url: &str) -> Result<(), ConfigError> {
    if seed_url.is_empty() {
        return Err(ConfigError::Validation("start URL cannot be empty".to_string()));
    }

    if extract_netloc(seed_url).is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "start URL '{}' has no host",
            seed_url
        )));
    }

    Ok(())
}

/// Validates keywords: at least one, none blank
fn validate_keywords(keywords: &[String]) -> Result<(), ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation("keywords cannot be blank".to_string()));
    }

    Ok(())
}

/// Validates crawl budgets
fn validate_budgets(budgets: &CrawlBudgets) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if budgets.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            budgets.max_pages
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation("user_agent cannot be empty".to_string()));
    }

    for (name, value) in [
        ("html_timeout", config.html_timeout_secs),
        ("document_timeout", config.document_timeout_secs),
        ("connect_timeout", config.connect_timeout_secs),
    ] {
        if value == 0 {
            return Err(ConfigError::Validation(format!(
                "{} must be > 0 seconds",
                name
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}
