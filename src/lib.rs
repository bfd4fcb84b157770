//! campaign_stats library: crowdfunding campaign scraping and pledge analytics.
//!
//! The crate splits into two phases joined by a persisted record collection.
//! The scrape phase maps each campaign page into one typed
//! [`models::CampaignRecord`] using precompiled structural queries and
//! explicit field parsers; the report phase derives four ranked/segmented
//! views over the collection via [`analytics::Analytics`].
//!
//! # Example
//!
//! ```no_run
//! use campaign_stats::{run_scrape, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     category: "video-games".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_scrape(config).await?;
//! println!(
//!     "Scraped {} of {} campaigns ({} skipped)",
//!     report.successful, report.total, report.failed
//! );
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod config;
pub mod error_handling;
pub mod extract;
mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod report;
pub mod selectors;
pub mod storage;

// Re-export public API
pub use analytics::Analytics;
pub use config::{Config, LogFormat, LogLevel, ReportConfig, ReportView};
pub use models::{CampaignRecord, CampaignSummary, CategoryListingEntry, RewardTier};
pub use run::{run_report, run_scrape, ScrapeReport};

// Internal run module (scrape and report orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use scraper::Html;

    use crate::analytics::Analytics;
    use crate::config::{Config, ReportConfig};
    use crate::error_handling::{ErrorStats, ErrorType, ScrapeError};
    use crate::extract::{extract_all, extract_listing};
    use crate::fetch::{campaign_url, category_url, fetch_page};
    use crate::initialization::init_client;
    use crate::models::{CampaignRecord, CategoryListingEntry};
    use crate::report::print_view;
    use crate::storage::{load_records, save_records};

    /// Results of a scrape run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Number of campaigns listed on the category page
        pub total: usize,
        /// Number of campaigns successfully extracted
        pub successful: usize,
        /// Number of campaigns skipped after a fetch or extraction failure
        pub failed: usize,
        /// Path of the saved record collection
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Scrapes one category listing and saves the extracted records.
    ///
    /// Campaigns are fetched and extracted sequentially, one at a time. A
    /// failed campaign is logged, counted, and skipped; it never prevents
    /// the remaining campaigns from being processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the category listing itself cannot be fetched or
    /// extracted, or if the record collection cannot be saved. Per-campaign
    /// failures are skip-and-continue and reported via [`ScrapeReport`].
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let start = Instant::now();
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let listing_url = category_url(&config.base_url, &config.category)?;
        info!("Scanning category listing: {listing_url}");
        let body = fetch_page(&client, &listing_url)
            .await
            .context("Failed to fetch category listing")?;
        let listing = {
            let document = Html::parse_document(&body);
            extract_listing(&document).context("Failed to extract category listing")?
        };
        info!("Category listing yielded {} project(s)", listing.len());

        let stats = ErrorStats::new();
        let mut records = Vec::with_capacity(listing.len());
        let mut failed = 0usize;
        for entry in &listing {
            match scrape_campaign(&client, &config.base_url, entry).await {
                Ok(record) => {
                    info!("Extracted campaign: {}", record.title);
                    records.push(record);
                }
                Err(e) => {
                    failed += 1;
                    stats.increment(ErrorType::from(&e));
                    warn!("Skipping campaign {:?}: {e}", entry.title);
                }
            }
        }

        save_records(&config.output, &records).context("Failed to save campaign records")?;
        stats.log_summary();

        Ok(ScrapeReport {
            total: listing.len(),
            successful: records.len(),
            failed,
            output: config.output,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    async fn scrape_campaign(
        client: &reqwest::Client,
        base_url: &str,
        entry: &CategoryListingEntry,
    ) -> Result<CampaignRecord, ScrapeError> {
        let url = campaign_url(base_url, &entry.url)?;
        let body = fetch_page(client, &url).await?;
        let document = Html::parse_document(&body);
        Ok(extract_all(&document)?)
    }

    /// Loads a saved record collection and prints the selected view(s).
    ///
    /// Analytics failures (zero backers, zero goal, empty breakdown)
    /// indicate malformed input data and propagate unmasked.
    pub fn run_report(config: &ReportConfig) -> Result<()> {
        let records = load_records(&config.input).with_context(|| {
            format!(
                "Failed to load campaign records from {}",
                config.input.display()
            )
        })?;
        info!("Loaded {} campaign record(s)", records.len());

        let analytics = Analytics::new(records, config.currency.clone());
        print_view(&analytics, config.view, config.threshold)
    }
}
