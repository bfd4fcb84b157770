//! Derived analytics over a collection of campaign records.
//!
//! The engine does not depend on how records were produced; it consumes the
//! persisted collection and derives four ranked/segmented views. Three views
//! only see records in the target currency; funding completion sees every
//! record regardless of currency. That asymmetry is intentional.
//!
//! Failures here mean malformed input data and propagate immediately; no
//! sentinel values.

use crate::error_handling::AnalyticsError;
use crate::models::{CampaignRecord, RewardTier};

/// One row of the average-pledge view.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragePledge {
    pub title: String,
    /// `pledged / backers`
    pub average: f64,
}

/// One row of the high-value contribution coverage view.
///
/// `max` is the aggregate capacity of the qualifying tiers; it is
/// `f64::INFINITY` when any qualifying tier is unbounded, in which case
/// `ratio` is `0.0` (a finite numerator over an infinite denominator).
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionCoverage {
    pub title: String,
    /// Observed contributions: `Σ backers · bracket` over qualifying tiers
    pub actual: f64,
    /// Capacity: `Σ limit · bracket`, or infinity if any tier is unbounded
    pub max: f64,
    /// `actual / max`
    pub ratio: f64,
}

/// One row of the funding completion view.
#[derive(Debug, Clone, PartialEq)]
pub struct FundStatus {
    pub title: String,
    pub pledged: f64,
    pub goal: f64,
    /// `pledged / goal`
    pub ratio: f64,
}

/// A contribution range `[lower, upper)` with its aggregate pledged amount
/// and share of the campaign total. The last declared segment's `upper` is
/// `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSegment {
    pub lower: f64,
    pub upper: f64,
    pub total: f64,
    /// `total / pledged`
    pub pct: f64,
}

/// Per-campaign reward-bracket segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardLevelReport {
    pub title: String,
    pub pledged: f64,
    /// Synthetic below-lowest-bracket segment first, then declared tiers
    /// ascending by bracket.
    pub segments: Vec<RewardSegment>,
}

/// Analytics engine over a collection of campaign records.
pub struct Analytics {
    records: Vec<CampaignRecord>,
    currency: String,
}

impl Analytics {
    pub fn new(records: Vec<CampaignRecord>, currency: impl Into<String>) -> Self {
        Self {
            records,
            currency: currency.into(),
        }
    }

    /// The target currency for the currency-filtered views.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    // Scope for the three currency-filtered views. list_fund_status
    // intentionally bypasses this.
    fn in_scope(&self) -> impl Iterator<Item = &CampaignRecord> {
        self.records
            .iter()
            .filter(|record| record.summary.currency == self.currency)
    }

    /// Average pledge per backer, ranked descending.
    ///
    /// `backers > 0` is a data precondition; a zero-backer record is
    /// malformed input and fails the whole view.
    pub fn list_averages(&self) -> Result<Vec<AveragePledge>, AnalyticsError> {
        let mut rows = Vec::new();
        for record in self.in_scope() {
            if record.summary.backers == 0 {
                return Err(AnalyticsError::ZeroBackers {
                    title: record.title.clone(),
                });
            }
            rows.push(AveragePledge {
                title: record.title.clone(),
                average: record.summary.pledged / f64::from(record.summary.backers),
            });
        }
        rows.sort_by(|a, b| b.average.total_cmp(&a.average));
        Ok(rows)
    }

    /// High-value contribution coverage above `threshold`, ranked descending
    /// by coverage ratio.
    ///
    /// Campaigns with no tier at or above the threshold are omitted: they
    /// have no capacity to measure. When any qualifying tier is unbounded
    /// the campaign's capacity is infinite and its ratio is `0.0`.
    pub fn list_contributions_greater(&self, threshold: f64) -> Vec<ContributionCoverage> {
        let mut rows = Vec::new();
        for record in self.in_scope() {
            let qualifying: Vec<&RewardTier> = record
                .breakdown
                .iter()
                .filter(|tier| tier.bracket >= threshold)
                .collect();
            if qualifying.is_empty() {
                continue;
            }

            let mut actual = 0.0;
            let mut max = 0.0;
            for tier in qualifying {
                actual += f64::from(tier.backers) * tier.bracket;
                match tier.limit {
                    Some(limit) => max += f64::from(limit) * tier.bracket,
                    None => max = f64::INFINITY,
                }
            }

            rows.push(ContributionCoverage {
                title: record.title.clone(),
                actual,
                max,
                ratio: actual / max,
            });
        }
        rows.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        rows
    }

    /// Funding completion per campaign, ranked descending. No currency
    /// filter: every record participates.
    pub fn list_fund_status(&self) -> Result<Vec<FundStatus>, AnalyticsError> {
        let mut rows = Vec::new();
        for record in &self.records {
            if record.summary.goal == 0.0 {
                return Err(AnalyticsError::ZeroGoal {
                    title: record.title.clone(),
                });
            }
            rows.push(FundStatus {
                title: record.title.clone(),
                pledged: record.summary.pledged,
                goal: record.summary.goal,
                ratio: record.summary.pledged / record.summary.goal,
            });
        }
        rows.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        Ok(rows)
    }

    /// Per-reward-bracket segmentation for each in-scope campaign.
    pub fn list_reward_levels(&self) -> Result<Vec<RewardLevelReport>, AnalyticsError> {
        self.in_scope()
            .map(|record| {
                Ok(RewardLevelReport {
                    title: record.title.clone(),
                    pledged: record.summary.pledged,
                    segments: segment_rewards(record)?,
                })
            })
            .collect()
    }
}

/// Segments one campaign's pledges by reward bracket.
///
/// Declared tiers are sorted ascending by bracket; segment `i` spans
/// `[bracket_i, bracket_{i+1})` (infinity for the last) and holds
/// `bracket_i · backers_i`. A synthetic `[0, lowest bracket)` segment is
/// prepended with the unattributed remainder: large individual pledges or
/// fees not itemized as tiers. The remainder may be negative when declared
/// tiers oversubscribe the total.
fn segment_rewards(record: &CampaignRecord) -> Result<Vec<RewardSegment>, AnalyticsError> {
    // At least one declared tier is needed to establish the initial upper
    // bound; an empty breakdown must fail, not yield an empty list.
    if record.breakdown.is_empty() {
        return Err(AnalyticsError::EmptyBreakdown {
            title: record.title.clone(),
        });
    }
    let pledged = record.summary.pledged;
    if pledged == 0.0 {
        return Err(AnalyticsError::ZeroPledged {
            title: record.title.clone(),
        });
    }

    let mut tiers: Vec<&RewardTier> = record.breakdown.iter().collect();
    tiers.sort_by(|a, b| a.bracket.total_cmp(&b.bracket));

    let mut segments = Vec::with_capacity(tiers.len() + 1);
    let mut attributed = 0.0;
    for (idx, tier) in tiers.iter().enumerate() {
        let upper = tiers.get(idx + 1).map_or(f64::INFINITY, |next| next.bracket);
        let total = tier.bracket * f64::from(tier.backers);
        attributed += total;
        segments.push(RewardSegment {
            lower: tier.bracket,
            upper,
            total,
            pct: total / pledged,
        });
    }

    let remainder = pledged - attributed;
    segments.insert(
        0,
        RewardSegment {
            lower: 0.0,
            upper: tiers[0].bracket,
            total: remainder,
            pct: remainder / pledged,
        },
    );
    Ok(segments)
}
