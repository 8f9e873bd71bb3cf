use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::cache::{CacheError, CacheKey, CacheStore, CachedResult};

pub mod migrator;
pub mod repositories;

/// SQLite-backed persistence for search results that survive across runs.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Each pooled connection to :memory: would see its own empty database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Cache database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn search_cache_repo(&self) -> repositories::search_cache::SearchCacheRepository {
        repositories::search_cache::SearchCacheRepository::new(self.conn.clone())
    }

    pub async fn cached_entry_count(&self) -> Result<u64> {
        Ok(self.search_cache_repo().count().await?)
    }
}

#[async_trait]
impl CacheStore for Store {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResult>, CacheError> {
        let Some(row) = self.search_cache_repo().get(&key.storage_key()).await? else {
            return Ok(None);
        };

        match CachedResult::from_json(&row.payload) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &CacheKey, entry: &CachedResult) -> Result<(), CacheError> {
        let payload = entry.to_json()?;
        self.search_cache_repo()
            .upsert(&key.storage_key(), payload, entry.timestamp)
            .await?;
        Ok(())
    }
}
