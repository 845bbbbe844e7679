//! Derived views over the register returned to the view flow.

use serde::{Deserialize, Serialize};

use super::Entry;

/// A filtered view of the register with its record-count summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryListing {
    pub entries: Vec<Entry>,
    pub shown: usize,
    pub total: usize,
    pub summary: String,
    /// All matching entries are returned on a single page.
    pub page: u32,
    pub page_count: u32,
}

impl EntryListing {
    pub fn new(entries: Vec<Entry>, total: usize) -> Self {
        let shown = entries.len();
        Self {
            entries,
            shown,
            total,
            summary: format!("Showing {} of {} records", shown, total),
            page: 1,
            page_count: 1,
        }
    }
}

/// Snapshot of the persisted collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub storage_key: String,
    pub generated_at: String,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing_summary() {
        let listing = EntryListing::new(Vec::new(), 0);
        assert_eq!(listing.summary, "Showing 0 of 0 records");
        assert_eq!(listing.page, 1);
        assert_eq!(listing.page_count, 1);
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let value = serde_json::to_value(EntryListing::new(Vec::new(), 3)).unwrap();
        assert_eq!(value["pageCount"], 1);
        assert_eq!(value["total"], 3);
        assert_eq!(value["shown"], 0);
    }
}
