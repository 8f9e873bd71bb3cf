use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SearchCache::CacheKey)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SearchCache::Payload).text().not_null())
                    .col(ColumnDef::new(SearchCache::FetchedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SearchCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SearchCache {
    Table,
    CacheKey,
    Payload,
    FetchedAt,
}
