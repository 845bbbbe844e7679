//! In-memory key-value storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStorage;
use crate::errors::AppError;

/// Volatile storage, used in tests and when no database is wanted.
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that serves reads but fails every write, as a locked or
/// unreachable database would.
#[cfg(test)]
#[derive(Default)]
pub struct ReadOnlyStorage {
    inner: MemoryStorage,
}

#[cfg(test)]
impl ReadOnlyStorage {
    /// Storage already holding `value` under `key`.
    pub async fn holding(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.inner.set_item(key, value).await.unwrap();
        storage
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueStorage for ReadOnlyStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::StorageUnavailable(
            "attempt to write a readonly database".to_string(),
        ))
    }
}
