use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

use super::{CacheError, CacheKey, CacheStore, CachedResult};

/// In-process store. Holds the same JSON payloads the persisted store writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Stores an arbitrary payload under a raw storage key.
    pub async fn insert_raw(&self, storage_key: &str, payload: &str) {
        self.entries
            .write()
            .await
            .insert(storage_key.to_string(), payload.to_string());
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResult>, CacheError> {
        let entries = self.entries.read().await;
        let Some(payload) = entries.get(&key.storage_key()) else {
            return Ok(None);
        };

        match CachedResult::from_json(payload) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &CacheKey, entry: &CachedResult) -> Result<(), CacheError> {
        let payload = entry.to_json()?;
        self.entries
            .write()
            .await
            .insert(key.storage_key(), payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::QueryKind;
    use crate::models::NormalizedTerm;

    fn key(kind: QueryKind, raw: &str) -> CacheKey {
        CacheKey::new(kind, NormalizedTerm::new(raw).unwrap())
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        let gin = key(QueryKind::Ingredient, "gin");

        store.set(&gin, &CachedResult::new(vec![], 1)).await.unwrap();
        store.set(&gin, &CachedResult::new(vec![], 2)).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&gin).await.unwrap().unwrap().timestamp, 2);
    }

    #[tokio::test]
    async fn test_kinds_do_not_collide() {
        let store = MemoryStore::new();
        store
            .set(&key(QueryKind::Ingredient, "gin"), &CachedResult::new(vec![], 1))
            .await
            .unwrap();

        assert!(store.get(&key(QueryKind::Name, "gin")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unreadable_payload_is_a_miss() {
        let store = MemoryStore::new();
        store.insert_raw("searchedDrinkName:gin", "not json").await;

        assert!(store.get(&key(QueryKind::Name, "gin")).await.unwrap().is_none());
    }
}
