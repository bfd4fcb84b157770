//! Category listing extraction.

use scraper::Html;

use crate::error_handling::ExtractError;
use crate::models::CategoryListingEntry;
use crate::selectors::{self, CARD_TITLE, PROJECT_CARD};

/// Extracts every project card from a category listing page.
///
/// The anchor text becomes the title and its `href`, with any query string
/// stripped, becomes the url. A card without an anchor or `href` is a
/// layout mismatch.
pub fn extract_listing(document: &Html) -> Result<Vec<CategoryListingEntry>, ExtractError> {
    let mut entries = Vec::new();
    for card in document.root_element().select(&PROJECT_CARD) {
        let anchor = selectors::require_one(card, &CARD_TITLE, "project card anchor")?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or(ExtractError::StructureNotFound("project card href"))?;
        let url = href.split('?').next().unwrap_or(href).to_string();
        let title = anchor.text().collect::<String>().trim().to_string();
        entries.push(CategoryListingEntry { title, url });
    }
    Ok(entries)
}
