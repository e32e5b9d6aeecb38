use sea_orm_migration::prelude::*;

use crate::m20220101_000021_create_contact_submissions::ContactSubmissions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col((ContactSubmissions::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .to_owned(),
            )
            .await
    }
}
