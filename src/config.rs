//! Configuration types and application constants.

use std::path::PathBuf;

use clap::ValueEnum;

// Site layout
pub const DEFAULT_BASE_URL: &str = "https://www.kickstarter.com/";
pub const DEFAULT_CATEGORY: &str = "video-games";

// Persisted record collection
pub const DEFAULT_RECORDS_PATH: &str = "./projects.json";

// Analytics defaults
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_THRESHOLD: f64 = 5000.0;

// Fetch behavior
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Uses a generic Chrome-like string without pinning to a specific minor
/// version. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 1000;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 20;
/// Maximum number of retries per page fetch
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which reporting view(s) to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportView {
    /// Average pledge per backer, ranked descending
    Averages,
    /// High-value contribution coverage above the threshold
    Contributions,
    /// Funding completion per campaign, all currencies
    FundStatus,
    /// Per-reward-bracket contribution segmentation
    RewardLevels,
    /// All four views
    All,
}

/// Scrape configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use campaign_stats::Config;
///
/// let config = Config {
///     category: "tabletop-games".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Category slug whose listing page is scanned
    pub category: String,

    /// Output path for the persisted record collection (JSON)
    pub output: PathBuf,

    /// Site base URL; campaign URLs from the listing are joined against it
    pub base_url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            output: PathBuf::from(DEFAULT_RECORDS_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Report configuration (no CLI dependencies).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path of the persisted record collection to load
    pub input: PathBuf,

    /// Target currency for the currency-filtered views
    pub currency: String,

    /// Minimum bracket for the high-value contribution view
    pub threshold: f64,

    /// Which view(s) to print
    pub view: ReportView,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_RECORDS_PATH),
            currency: DEFAULT_CURRENCY.to_string(),
            threshold: DEFAULT_THRESHOLD,
            view: ReportView::All,
        }
    }
}
