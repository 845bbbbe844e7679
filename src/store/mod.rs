//! The entry store: CRUD and queries over the persisted register.
//!
//! The whole collection is one JSON array under a single storage key. Every
//! operation re-reads that blob; mutations rewrite it whole.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::KeyValueStorage;
use crate::errors::AppError;
use crate::models::{Entry, EntryListing};
use crate::search::EntryFilter;

/// Storage key used by the browser client.
pub const DEFAULT_STORAGE_KEY: &str = "daakEntries";

/// Service over the persisted register, shared by the add, track and view flows.
pub struct EntryStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl EntryStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the full collection. An absent blob is an empty register.
    pub async fn list(&self) -> Result<Vec<Entry>, AppError> {
        match self.storage.get_item(&self.key).await? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the persisted blob with `entries`.
    pub async fn persist(&self, entries: &[Entry]) -> Result<(), AppError> {
        let blob = serde_json::to_string(entries)
            .map_err(|e| AppError::Internal(format!("Failed to serialize entries: {}", e)))?;
        self.storage.set_item(&self.key, &blob).await
    }

    /// Validate `entry` and add it to the end of the register.
    pub async fn append(&self, entry: Entry) -> Result<Entry, AppError> {
        entry.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.list().await?;
        entries.push(entry.clone());
        self.persist(&entries).await?;

        tracing::debug!(id = %entry.id, total = entries.len(), "Entry appended");
        Ok(entry)
    }

    /// First entry whose id equals `id` exactly.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError> {
        let entries = self.list().await?;
        Ok(entries.into_iter().find(|entry| entry.id == id))
    }

    /// Remove every entry whose id equals `id` exactly and return how many went.
    ///
    /// Deleting an id that is not present still rewrites the register and succeeds.
    pub async fn delete_by_id(&self, id: &str) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;
        let entries = self.list().await?;
        let before = entries.len();

        let remaining: Vec<Entry> = entries.into_iter().filter(|entry| entry.id != id).collect();
        let removed = before - remaining.len();
        self.persist(&remaining).await?;

        tracing::debug!(id = %id, removed, "Entries deleted");
        Ok(removed)
    }

    /// Entries matching `filter`, in register order.
    pub async fn query(&self, filter: &EntryFilter) -> Result<Vec<Entry>, AppError> {
        let entries = self.list().await?;
        Ok(filter.apply(&entries))
    }

    /// Matching entries together with the shown/total summary.
    pub async fn listing(&self, filter: &EntryFilter) -> Result<EntryListing, AppError> {
        let entries = self.list().await?;
        let total = entries.len();
        Ok(EntryListing::new(filter.apply(&entries), total))
    }
}
