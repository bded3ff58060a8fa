//! Create `menu_items` table.
//!
//! The only table of the service; `id` is an auto-increment key and
//! `created_at` is written once on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItems::Id))
                    .col(string(MenuItems::Name))
                    .col(text(MenuItems::Description))
                    .col(double(MenuItems::Price))
                    .col(string(MenuItems::Category))
                    .col(string_null(MenuItems::Image))
                    .col(boolean(MenuItems::Popular).default(false))
                    .col(timestamp_with_time_zone(MenuItems::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Category listing in the view tool and clients filter by it
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_category")
                    .table(MenuItems::Table)
                    .col(MenuItems::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    Image,
    Popular,
    CreatedAt,
}
