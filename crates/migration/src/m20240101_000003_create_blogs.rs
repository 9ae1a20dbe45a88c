//! Create `blogs` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(pk_auto(Blogs::Id))
                    .col(text(Blogs::Title).not_null())
                    .col(text(Blogs::Description).not_null())
                    .col(text(Blogs::Slug).not_null())
                    .col(text(Blogs::ImageUrl).not_null())
                    .col(boolean(Blogs::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Blogs::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Blogs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Blogs { Table, Id, Title, Description, Slug, ImageUrl, IsActive, CreatedAt }
