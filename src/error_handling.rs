//! Error taxonomy and batch failure accounting.
//!
//! Extraction failures abort the single campaign's record construction and
//! propagate to the caller, who decides whether to skip-and-continue across
//! the batch. Analytics failures indicate malformed input data and are never
//! masked with sentinel values.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{info, SetLoggerError};
use reqwest::StatusCode;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;
use tokio_retry::strategy::ExponentialBackoff;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Errors raised while extracting a record from a page.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// An expected markup substructure is absent. The page layout no longer
    /// matches the selector set; this must surface, never be ignored.
    #[error("expected page structure not found: {0}")]
    StructureNotFound(&'static str),

    /// Text was present but did not match the expected grammar.
    #[error("failed to parse {what} from {input:?}")]
    ParseError { what: &'static str, input: String },
}

/// Errors raised by the analytics engine.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Average pledge requires at least one backer.
    #[error("campaign {title:?} has zero backers; average pledge is undefined")]
    ZeroBackers { title: String },

    /// Funding completion requires a positive goal.
    #[error("campaign {title:?} has a zero funding goal")]
    ZeroGoal { title: String },

    /// Segment percentages require a positive pledged total.
    #[error("campaign {title:?} has zero pledged; reward segmentation is undefined")]
    ZeroPledged { title: String },

    /// Segmentation needs at least one declared tier to establish the
    /// initial upper bound.
    #[error("campaign {title:?} declares no reward tiers")]
    EmptyBreakdown { title: String },
}

/// Errors from the fetch layer. Non-2xx statuses are surfaced before any
/// extraction is attempted.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request itself failed (connect, timeout, body, decode).
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: StatusCode },

    /// A URL could not be parsed or joined against the base.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },
}

/// Errors from the persisted record collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record file I/O error.
    #[error("record file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization error.
    #[error("record serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single campaign's scrape failure: either the fetch or the extraction.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Failure categories tracked while scraping a batch of campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    CampaignFetchError,
    StructureNotFoundError,
    FieldParseError,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::CampaignFetchError => "Campaign fetch error",
            ErrorType::StructureNotFoundError => "Page structure mismatch",
            ErrorType::FieldParseError => "Field parse error",
        }
    }
}

impl From<&ScrapeError> for ErrorType {
    fn from(error: &ScrapeError) -> Self {
        match error {
            ScrapeError::Fetch(_) => ErrorType::CampaignFetchError,
            ScrapeError::Extract(ExtractError::StructureNotFound(_)) => {
                ErrorType::StructureNotFoundError
            }
            ScrapeError::Extract(ExtractError::ParseError { .. }) => ErrorType::FieldParseError,
        }
    }
}

/// Thread-safe error statistics tracker.
///
/// Tracks the count of each error type using atomic counters. All error
/// types are initialized to zero on creation.
pub struct ErrorStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ErrorStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    pub fn increment(&self, error: ErrorType) {
        // All ErrorType variants are initialized in new()
        if let Some(count) = self.errors.get(&error) {
            count.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map_or(0, |count| count.load(Ordering::SeqCst))
    }

    pub fn total(&self) -> usize {
        ErrorType::iter().map(|e| self.get_count(e)).sum()
    }

    /// Logs a per-category summary of recorded failures.
    pub fn log_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        info!("Error Counts ({} total):", total);
        for error_type in ErrorType::iter() {
            let count = self.get_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an exponential backoff retry strategy for page fetches.
///
/// Initial delay `RETRY_INITIAL_DELAY_MS`, doubling up to
/// `RETRY_MAX_DELAY_SECS`; callers cap the attempt count.
pub fn get_retry_strategy() -> ExponentialBackoff {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
}
