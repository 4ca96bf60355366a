use serde::Deserialize;

/// Complete configuration for one scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Start URL (or the single URL in single-page mode)
    pub seed_url: String,

    /// Keywords to count, lowercased
    pub keywords: Vec<String>,

    /// Scan only the seed URL, without link discovery
    pub single_page: bool,

    pub budgets: CrawlBudgets,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Crawl limits, fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CrawlBudgets {
    /// Maximum link depth from the seed
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of pages and documents to process
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for CrawlBudgets {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_pages: default_max_pages(),
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for HTML and TXT fetches (seconds)
    #[serde(rename = "html-timeout", default = "default_html_timeout")]
    pub html_timeout_secs: u64,

    /// Timeout for PDF and DOCX fetches (seconds)
    #[serde(rename = "document-timeout", default = "default_document_timeout")]
    pub document_timeout_secs: u64,

    /// TCP connect timeout (seconds)
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            html_timeout_secs: default_html_timeout(),
            document_timeout_secs: default_document_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives the per-run CSV file
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Optional settings file; every table and key may be omitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub crawl: CrawlBudgets,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_max_depth() -> u32 {
    2
}

fn default_max_pages() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_html_timeout() -> u64 {
    10
}

fn default_document_timeout() -> u64 {
    15
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_output_directory() -> String {
    "csv".to_string()
}
