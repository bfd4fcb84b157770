//! Analytics engine tests over hand-built record collections.

use campaign_stats::error_handling::AnalyticsError;
use campaign_stats::{Analytics, CampaignRecord, CampaignSummary, RewardTier};

fn record(
    title: &str,
    backers: u32,
    pledged: f64,
    goal: f64,
    currency: &str,
    breakdown: Vec<RewardTier>,
) -> CampaignRecord {
    CampaignRecord {
        title: title.to_string(),
        summary: CampaignSummary {
            backers,
            goal,
            pledged,
            currency: currency.to_string(),
        },
        breakdown,
    }
}

fn tier(bracket: f64, backers: u32, limit: Option<u32>) -> RewardTier {
    RewardTier {
        bracket,
        backers,
        limit,
    }
}

fn mixed_currency_collection() -> Vec<CampaignRecord> {
    vec![
        record(
            "A",
            10,
            1000.0,
            2000.0,
            "USD",
            vec![tier(10.0, 5, None), tier(50.0, 3, Some(10))],
        ),
        record(
            "B",
            4,
            800.0,
            500.0,
            "USD",
            vec![tier(25.0, 4, Some(100))],
        ),
        record(
            "C",
            8,
            4000.0,
            10000.0,
            "GBP",
            vec![tier(100.0, 8, None)],
        ),
    ]
}

#[test]
fn test_worked_example_average_and_fund_status() {
    let analytics = Analytics::new(mixed_currency_collection(), "USD");

    let averages = analytics.list_averages().unwrap();
    let a = averages.iter().find(|r| r.title == "A").unwrap();
    assert_eq!(a.average, 100.0);

    let fund = analytics.list_fund_status().unwrap();
    let a = fund.iter().find(|r| r.title == "A").unwrap();
    assert_eq!(a.ratio, 0.5);
}

#[test]
fn test_worked_example_segmentation_rows() {
    let analytics = Analytics::new(mixed_currency_collection(), "USD");
    let reports = analytics.list_reward_levels().unwrap();
    let a = reports.iter().find(|r| r.title == "A").unwrap();

    assert_eq!(a.segments.len(), 3);

    // [0, 10): 1000 - (10*5 + 50*3) = 800, 80%
    assert_eq!(a.segments[0].lower, 0.0);
    assert_eq!(a.segments[0].upper, 10.0);
    assert_eq!(a.segments[0].total, 800.0);
    assert_eq!(a.segments[0].pct, 0.8);

    // [10, 50): 50, 5%
    assert_eq!(a.segments[1].total, 50.0);
    assert_eq!(a.segments[1].pct, 0.05);

    // [50, inf): 150, 15%
    assert!(a.segments[2].upper.is_infinite());
    assert_eq!(a.segments[2].total, 150.0);
    assert_eq!(a.segments[2].pct, 0.15);
}

#[test]
fn test_segment_totals_and_percentages_sum() {
    let analytics = Analytics::new(mixed_currency_collection(), "USD");
    for report in analytics.list_reward_levels().unwrap() {
        let total: f64 = report.segments.iter().map(|s| s.total).sum();
        assert!(
            (total - report.pledged).abs() < 1e-9,
            "segments of {} must sum to pledged",
            report.title
        );
        let pct: f64 = report.segments.iter().map(|s| s.pct).sum();
        assert!((pct - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_rankings_are_non_increasing() {
    let analytics = Analytics::new(mixed_currency_collection(), "USD");

    let averages = analytics.list_averages().unwrap();
    for pair in averages.windows(2) {
        assert!(pair[0].average >= pair[1].average);
    }

    let coverage = analytics.list_contributions_greater(20.0);
    for pair in coverage.windows(2) {
        assert!(pair[0].ratio >= pair[1].ratio);
    }

    let fund = analytics.list_fund_status().unwrap();
    for pair in fund.windows(2) {
        assert!(pair[0].ratio >= pair[1].ratio);
    }
}

#[test]
fn test_currency_filter_asymmetry() {
    let analytics = Analytics::new(mixed_currency_collection(), "USD");

    // Filtered views never include the GBP record
    assert!(analytics
        .list_averages()
        .unwrap()
        .iter()
        .all(|r| r.title != "C"));
    assert!(analytics
        .list_contributions_greater(0.0)
        .iter()
        .all(|r| r.title != "C"));
    assert!(analytics
        .list_reward_levels()
        .unwrap()
        .iter()
        .all(|r| r.title != "C"));

    // Fund status includes every currency present in the input
    let fund = analytics.list_fund_status().unwrap();
    assert!(fund.iter().any(|r| r.title == "C"));
    assert_eq!(fund.len(), 3);
}

#[test]
fn test_unbounded_qualifying_tiers_yield_zero_ratio() {
    let records = vec![record(
        "open-ended",
        10,
        50000.0,
        1.0,
        "USD",
        vec![tier(5000.0, 4, None), tier(10000.0, 1, None)],
    )];
    let analytics = Analytics::new(records, "USD");
    let rows = analytics.list_contributions_greater(5000.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].actual, 30000.0);
    assert!(rows[0].max.is_infinite());
    assert_eq!(rows[0].ratio, 0.0);
}

#[test]
fn test_empty_breakdown_fails_segmentation() {
    let records = vec![record("tierless", 10, 100.0, 200.0, "USD", vec![])];
    let analytics = Analytics::new(records, "USD");
    assert!(matches!(
        analytics.list_reward_levels(),
        Err(AnalyticsError::EmptyBreakdown { .. })
    ));
}

#[test]
fn test_zero_backers_fails_averages() {
    let records = vec![record("ghost-town", 0, 0.0, 100.0, "USD", vec![])];
    let analytics = Analytics::new(records, "USD");
    assert!(matches!(
        analytics.list_averages(),
        Err(AnalyticsError::ZeroBackers { .. })
    ));
}
