//! Campaign page extraction.

use scraper::Html;

use crate::error_handling::ExtractError;
use crate::models::{CampaignRecord, CampaignSummary, RewardTier};
use crate::parse;
use crate::selectors::{
    self, BACKERS_COUNT, MONEY_RAISED, PLEDGED, REWARD, REWARD_BACKERS, REWARD_HEADING,
    REWARD_LIMIT, TITLE,
};

use super::data_attrs::DataAttrs;

/// Extracts the campaign title: the unique title heading, trimmed.
pub fn extract_title(document: &Html) -> Result<String, ExtractError> {
    let heading = selectors::require_one(document.root_element(), &TITLE, "campaign title heading")?;
    Ok(heading.text().collect::<String>().trim().to_string())
}

/// Extracts the money-raised summary.
///
/// Locates the unique money-raised box, then the backers-count and
/// pledged/goal nodes within it, and reads their merged `data-*` fields.
/// A missing box or sub-node means the page layout no longer matches the
/// selector set and fails with `StructureNotFound`.
pub fn extract_summary(document: &Html) -> Result<CampaignSummary, ExtractError> {
    let money_box = selectors::require_one(document.root_element(), &MONEY_RAISED, "money-raised box")?;
    let backers_node = selectors::require_one(money_box, &BACKERS_COUNT, "backers-count node")?;
    let pledged_node = selectors::require_one(money_box, &PLEDGED, "pledged node")?;

    let backers_attrs = DataAttrs::collect(backers_node);
    let pledged_attrs = DataAttrs::collect(pledged_node);

    Ok(CampaignSummary {
        backers: parse_data_int(backers_attrs.value.as_deref(), "backers data-value attribute")?,
        goal: parse_data_float(pledged_attrs.goal.as_deref(), "goal data attribute")?,
        pledged: parse_data_float(pledged_attrs.pledged.as_deref(), "pledged data attribute")?,
        currency: pledged_attrs
            .currency
            .ok_or(ExtractError::StructureNotFound("currency data attribute"))?,
    })
}

/// Extracts every reward tier, in markup order.
///
/// A tier heading that does not declare a pledge bracket is a hard failure;
/// an absent remaining-slots node is a normal, unbounded tier, while a
/// present but malformed one fails.
pub fn extract_breakdown(document: &Html) -> Result<Vec<RewardTier>, ExtractError> {
    let mut tiers = Vec::new();
    for reward in document.root_element().select(&REWARD) {
        let heading = selectors::require_one(reward, &REWARD_HEADING, "reward tier heading")?;
        let bracket = parse::pledge_bracket(&heading.text().collect::<String>())?;

        let backers_node = selectors::require_one(reward, &REWARD_BACKERS, "reward backer count")?;
        let backers = parse::parse_embedded_int(&backers_node.text().collect::<String>())?;

        let limit = match selectors::select_one(reward, &REWARD_LIMIT) {
            Some(node) => Some(parse::parse_limit(&node.text().collect::<String>())?),
            None => None,
        };

        tiers.push(RewardTier {
            bracket,
            backers,
            limit,
        });
    }
    Ok(tiers)
}

/// Extracts one full campaign record.
///
/// Partial success is not supported: any sub-extraction failure aborts the
/// whole record.
pub fn extract_all(document: &Html) -> Result<CampaignRecord, ExtractError> {
    Ok(CampaignRecord {
        title: extract_title(document)?,
        summary: extract_summary(document)?,
        breakdown: extract_breakdown(document)?,
    })
}

// A named data attribute missing from the subtree is a layout mismatch; one
// that is present but unparseable is a grammar failure.
fn parse_data_int(value: Option<&str>, what: &'static str) -> Result<u32, ExtractError> {
    let raw = value.ok_or(ExtractError::StructureNotFound(what))?;
    raw.trim().parse::<u32>().map_err(|_| ExtractError::ParseError {
        what,
        input: raw.to_string(),
    })
}

fn parse_data_float(value: Option<&str>, what: &'static str) -> Result<f64, ExtractError> {
    let raw = value.ok_or(ExtractError::StructureNotFound(what))?;
    raw.trim().parse::<f64>().map_err(|_| ExtractError::ParseError {
        what,
        input: raw.to_string(),
    })
}
