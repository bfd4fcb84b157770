//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `campaign_stats` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use campaign_stats::config::{
    DEFAULT_BASE_URL, DEFAULT_CATEGORY, DEFAULT_CURRENCY, DEFAULT_RECORDS_PATH,
    DEFAULT_THRESHOLD, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use campaign_stats::initialization::init_logger_with;
use campaign_stats::{
    run_report, run_scrape, Config, LogFormat, LogLevel, ReportConfig, ReportView,
};

#[derive(Debug, Parser)]
#[command(
    name = "campaign_stats",
    about = "Scrapes crowdfunding campaigns and reports pledge analytics."
)]
enum Cli {
    /// Scrape a category listing and save the campaign records
    Scrape(ScrapeArgs),
    /// Compute analytics views over saved campaign records
    Report(ReportArgs),
}

#[derive(Debug, clap::Args)]
struct ScrapeArgs {
    /// Category slug whose listing page is scanned
    #[arg(default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Output path for the record collection (JSON)
    #[arg(long, value_parser, default_value = DEFAULT_RECORDS_PATH)]
    output: PathBuf,

    /// Site base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, clap::Args)]
struct ReportArgs {
    /// Path of the saved record collection
    #[arg(long, value_parser, default_value = DEFAULT_RECORDS_PATH)]
    input: PathBuf,

    /// Target currency for the currency-filtered views
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Minimum bracket for the contribution coverage view
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Which view to print
    #[arg(long, value_enum, default_value_t = ReportView::All)]
    view: ReportView,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse() {
        Cli::Scrape(args) => {
            init_logger_with(args.log_level.clone().into(), args.log_format.clone())
                .context("Failed to initialize logger")?;

            let config = Config {
                category: args.category,
                output: args.output,
                base_url: args.base_url,
                log_level: args.log_level,
                log_format: args.log_format,
                timeout_seconds: args.timeout_seconds,
                user_agent: args.user_agent,
            };

            match run_scrape(config).await {
                Ok(report) => {
                    println!(
                        "Scraped {} campaign{} ({} extracted, {} skipped) in {:.1}s",
                        report.total,
                        if report.total == 1 { "" } else { "s" },
                        report.successful,
                        report.failed,
                        report.elapsed_seconds
                    );
                    println!("Records saved in {}", report.output.display());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("campaign_stats error: {:#}", e);
                    process::exit(1);
                }
            }
        }
        Cli::Report(args) => {
            init_logger_with(args.log_level.into(), args.log_format)
                .context("Failed to initialize logger")?;

            let config = ReportConfig {
                input: args.input,
                currency: args.currency,
                threshold: args.threshold,
                view: args.view,
            };

            if let Err(e) = run_report(&config) {
                eprintln!("campaign_stats error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}
