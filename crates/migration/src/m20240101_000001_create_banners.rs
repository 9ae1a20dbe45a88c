//! Create `banners` table.
//!
//! Hero images for the landing page; rows carry only the CDN URL and a flag.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(pk_auto(Banners::Id))
                    .col(text(Banners::ImageUrl).not_null())
                    .col(boolean(Banners::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Banners::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Banners { Table, Id, ImageUrl, IsActive }
