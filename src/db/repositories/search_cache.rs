use crate::entities::search_cache;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

pub struct SearchCacheRepository {
    conn: DatabaseConnection,
}

impl SearchCacheRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, cache_key: &str) -> Result<Option<search_cache::Model>, DbErr> {
        search_cache::Entity::find_by_id(cache_key.to_string())
            .one(&self.conn)
            .await
    }

    /// Inserts or supersedes the row for `cache_key`.
    pub async fn upsert(&self, cache_key: &str, payload: String, fetched_at: i64) -> Result<(), DbErr> {
        let active_model = search_cache::ActiveModel {
            cache_key: Set(cache_key.to_string()),
            payload: Set(payload),
            fetched_at: Set(fetched_at),
        };

        search_cache::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(search_cache::Column::CacheKey)
                    .update_columns([
                        search_cache::Column::Payload,
                        search_cache::Column::FetchedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        search_cache::Entity::find().count(&self.conn).await
    }
}
