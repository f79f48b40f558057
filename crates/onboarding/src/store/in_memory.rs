use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::state_store::{StateStore, StoreError};

/// In-memory store.
///
/// Intended for tests and ephemeral hosts; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StoreError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STORAGE_KEY;

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load(STORAGE_KEY).await.unwrap(), None);

        store.save(STORAGE_KEY, "{}").await.unwrap();
        assert_eq!(store.load(STORAGE_KEY).await.unwrap().as_deref(), Some("{}"));

        store.clear(STORAGE_KEY).await.unwrap();
        assert_eq!(store.load(STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let store = MemoryStore::new();
        store.save(STORAGE_KEY, r#"{"a":1}"#).await.unwrap();
        store.save(STORAGE_KEY, r#"{"b":2}"#).await.unwrap();
        assert_eq!(
            store.load(STORAGE_KEY).await.unwrap().as_deref(),
            Some(r#"{"b":2}"#)
        );
    }
}
