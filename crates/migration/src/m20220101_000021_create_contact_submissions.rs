//! Create `contact_submissions` table.
//! Rows are insert-only; id and created_at are filled in by the database
//! (`gen_random_uuid()` is built in from PostgreSQL 13).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(
                        uuid(ContactSubmissions::Id)
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(string_len(ContactSubmissions::Name, 255).not_null())
                    .col(string_len(ContactSubmissions::LastName, 255).not_null())
                    .col(string_len(ContactSubmissions::Email, 320).not_null())
                    .col(string_len_null(ContactSubmissions::Department, 255))
                    .col(
                        string_len(ContactSubmissions::Category, 32)
                            .not_null()
                            .check(Expr::col(ContactSubmissions::Category).is_in(["feedback", "suggestion", "problem"])),
                    )
                    .col(text(ContactSubmissions::Message).not_null())
                    .col(
                        timestamp_with_time_zone(ContactSubmissions::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactSubmissions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum ContactSubmissions {
    Table,
    Id,
    Name,
    LastName,
    Email,
    Department,
    Category,
    Message,
    CreatedAt,
}
