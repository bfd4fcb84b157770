//! Campaign and category-page extraction.
//!
//! Composes the selector set, the field parsers, and the data-attribute
//! collection into typed records. Extraction is fail-fast per campaign:
//! any sub-extraction failure aborts the whole record, and skip-and-continue
//! decisions belong to the caller.

mod campaign;
mod data_attrs;
mod listing;

// Re-export public API
pub use campaign::{extract_all, extract_breakdown, extract_summary, extract_title};
pub use data_attrs::DataAttrs;
pub use listing::extract_listing;
