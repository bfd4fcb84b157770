//! Persisted record collection: a JSON file of campaign records.
//!
//! The scrape phase writes the collection; the report phase reads it back.
//! This file is the only state shared between the two phases. Unbounded
//! tier limits serialize as `null`.

use std::fs;
use std::path::Path;

use log::info;

use crate::error_handling::StorageError;
use crate::models::CampaignRecord;

/// Writes the record collection as a pretty-printed JSON array.
pub fn save_records(path: &Path, records: &[CampaignRecord]) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    info!(
        "Saved {} campaign record(s) to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Reads a record collection back from disk.
pub fn load_records(path: &Path) -> Result<Vec<CampaignRecord>, StorageError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
