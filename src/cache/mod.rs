//! Time-bounded cache for ingredient and name search results.
//!
//! Entries are keyed by query kind plus normalized term and stored as the
//! JSON document `{"drinks": [...], "timeStamp": <epoch ms>}`. Nothing is
//! ever evicted; a stale entry is simply overwritten by the next fetch.

mod clock;
mod memory;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::constants::cache::{INGREDIENT_KEY_PREFIX, NAME_KEY_PREFIX};
use crate::models::{Drink, NormalizedTerm};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Ingredient,
    Name,
}

impl QueryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Name => "name",
        }
    }

    const fn key_prefix(self) -> &'static str {
        match self {
            Self::Ingredient => INGREDIENT_KEY_PREFIX,
            Self::Name => NAME_KEY_PREFIX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: QueryKind,
    pub term: NormalizedTerm,
}

impl CacheKey {
    #[must_use]
    pub const fn new(kind: QueryKind, term: NormalizedTerm) -> Self {
        Self { kind, term }
    }

    /// Namespaced key, e.g. `searchedIngredient:gin`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}:{}", self.kind.key_prefix(), self.term)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResult {
    pub drinks: Vec<Drink>,
    /// Fetch time in epoch milliseconds.
    #[serde(rename = "timeStamp")]
    pub timestamp: i64,
}

impl CachedResult {
    #[must_use]
    pub const fn new(drinks: Vec<Drink>, timestamp: i64) -> Self {
        Self { drinks, timestamp }
    }

    #[must_use]
    pub const fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.timestamp)
    }

    #[must_use]
    pub fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        self.age_ms(now_ms) < ttl_ms
    }

    pub fn to_json(&self) -> Result<String, CacheError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(payload: &str) -> Result<Self, CacheError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Key-value store behind the lookup cache.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResult>, CacheError>;

    /// Overwrites any existing entry for `key`.
    async fn set(&self, key: &CacheKey, entry: &CachedResult) -> Result<(), CacheError>;

    /// Returns the entry only if it is younger than `ttl` at `now_ms`.
    async fn get_fresh(
        &self,
        key: &CacheKey,
        now_ms: i64,
        ttl: Duration,
    ) -> Result<Option<CachedResult>, CacheError> {
        Ok(self
            .get(key)
            .await?
            .filter(|entry| entry.is_fresh(now_ms, ttl)))
    }
}
