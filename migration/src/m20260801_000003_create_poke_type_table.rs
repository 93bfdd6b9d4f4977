use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokeType::Table)
                    .if_not_exists()
                    .col(pk_auto(PokeType::Id))
                    .col(string(PokeType::Name))
                    .col(string_uniq(PokeType::Slug))
                    .col(text_null(PokeType::Description))
                    .col(string_null(PokeType::ColorHex))
                    .col(timestamp_with_time_zone(PokeType::CreatedAt))
                    .col(timestamp_with_time_zone(PokeType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokeType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokeType {
    Table,
    Id,
    Name,
    Slug,
    Description,
    ColorHex,
    CreatedAt,
    UpdatedAt,
}
