//! Reporting surface: the four tabular views.
//!
//! Printing only. The computed values, sort order, and column semantics all
//! come from the analytics engine; this module just lays them out.

use anyhow::Result;

use crate::analytics::Analytics;
use crate::config::ReportView;

/// Average pledge per backer, ranked descending.
pub fn print_averages(analytics: &Analytics) -> Result<()> {
    println!(
        "Average contributions by project in {}:",
        analytics.currency()
    );
    for row in analytics.list_averages()? {
        println!("  {:<60}{:>13.2}", row.title, row.average);
    }
    Ok(())
}

/// Contribution coverage above the threshold, ranked descending by ratio.
pub fn print_contributions_above(analytics: &Analytics, threshold: f64) {
    println!(
        "Contributions above {:.2} {}:",
        threshold,
        analytics.currency()
    );
    for row in analytics.list_contributions_greater(threshold) {
        println!(
            "  {:<60}{:>13.2} out of {:.2} ({:.0} %)",
            row.title,
            row.actual,
            row.max,
            row.ratio * 100.0
        );
    }
}

/// Funding completion per campaign, all currencies, ranked descending.
pub fn print_fund_status(analytics: &Analytics) -> Result<()> {
    println!("Funded in percent:");
    for row in analytics.list_fund_status()? {
        println!(
            "  {:<60}{:>13.2} out of {:.2} ({:.0} %)",
            row.title,
            row.pledged,
            row.goal,
            row.ratio * 100.0
        );
    }
    Ok(())
}

/// Per-reward-bracket segmentation, synthetic below-lowest segment first.
pub fn print_reward_levels(analytics: &Analytics) -> Result<()> {
    println!("Contributions per reward level:");
    for report in analytics.list_reward_levels()? {
        println!("  {} ({:.2})", report.title, report.pledged);
        for segment in &report.segments {
            println!(
                "    {:>10.2} - {:<10.2}  {:>10.2}  {:>8.2} %",
                segment.lower,
                segment.upper,
                segment.total,
                segment.pct * 100.0
            );
        }
    }
    Ok(())
}

/// Prints the selected view, or all four separated by blank lines.
pub fn print_view(analytics: &Analytics, view: ReportView, threshold: f64) -> Result<()> {
    match view {
        ReportView::Averages => print_averages(analytics)?,
        ReportView::Contributions => print_contributions_above(analytics, threshold),
        ReportView::FundStatus => print_fund_status(analytics)?,
        ReportView::RewardLevels => print_reward_levels(analytics)?,
        ReportView::All => {
            print_averages(analytics)?;
            println!();
            print_contributions_above(analytics, threshold);
            println!();
            print_fund_status(analytics)?;
            println!();
            print_reward_levels(analytics)?;
        }
    }
    Ok(())
}
