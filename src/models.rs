//! Campaign record model.
//!
//! These types are pure snapshots of a campaign page at extraction time.
//! A record is immutable once built; the persisted collection of records is
//! the only state shared between the scrape phase and the report phase.

use serde::{Deserialize, Serialize};

/// Headline funding numbers from a campaign's money-raised box.
///
/// `backers` and `pledged` are independently observed from the same page
/// snapshot; either may be zero, neither may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    /// Number of backers at snapshot time.
    pub backers: u32,
    /// Funding goal in `currency` units.
    pub goal: f64,
    /// Amount pledged so far in `currency` units.
    pub pledged: f64,
    /// Currency code, passed through from the page unchanged.
    pub currency: String,
}

/// One reward tier of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardTier {
    /// Minimum pledge to qualify for this tier.
    pub bracket: f64,
    /// Number of backers who pledged at this tier.
    pub backers: u32,
    /// Remaining slots; `None` means the tier has no declared cap
    /// (unbounded) and serializes as JSON `null`.
    pub limit: Option<u32>,
}

/// A fully extracted campaign.
///
/// `breakdown` keeps the tiers in the order they appear in the markup.
/// Duplicate brackets are not deduplicated; they are independent tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub title: String,
    pub summary: CampaignSummary,
    pub breakdown: Vec<RewardTier>,
}

/// One project card from a category listing page.
///
/// `url` is relative to the site base with any query string stripped.
/// Listing entries only drive the per-campaign scrape; they are not part of
/// the persisted record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListingEntry {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_limit_serializes_as_null() {
        let tier = RewardTier {
            bracket: 10.0,
            backers: 5,
            limit: None,
        };
        let value = serde_json::to_value(&tier).unwrap();
        assert!(value["limit"].is_null());
    }

    #[test]
    fn test_bounded_limit_serializes_as_number() {
        let tier = RewardTier {
            bracket: 50.0,
            backers: 3,
            limit: Some(10),
        };
        let value = serde_json::to_value(&tier).unwrap();
        assert_eq!(value["limit"], 10);
    }

    #[test]
    fn test_null_limit_deserializes_as_unbounded() {
        let tier: RewardTier =
            serde_json::from_str(r#"{"bracket": 25.0, "backers": 7, "limit": null}"#).unwrap();
        assert_eq!(tier.limit, None);
    }
}
