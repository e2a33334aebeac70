//! Create `product` table.
//! Scalar aggregate root; title and slug are alternate unique lookup keys.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len_uniq(Product::Title, 256))
                    .col(string_len_uniq(Product::Slug, 256))
                    .col(double(Product::Price).not_null().default(0.0))
                    .col(text_null(Product::Description))
                    .col(integer(Product::Stock).not_null().default(0))
                    .col(json(Product::Sizes).not_null())
                    .col(string_len(Product::Gender, 16).not_null())
                    .col(json(Product::Tags).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Title,
    Slug,
    Price,
    Description,
    Stock,
    Sizes,
    Gender,
    Tags,
    CreatedAt,
    UpdatedAt,
}
