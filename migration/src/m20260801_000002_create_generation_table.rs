use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Generation::Table)
                    .if_not_exists()
                    .col(pk_auto(Generation::Id))
                    .col(string(Generation::Name))
                    .col(integer_uniq(Generation::Number))
                    .col(text_null(Generation::Description))
                    .col(date_null(Generation::ReleasedAt))
                    .col(timestamp_with_time_zone(Generation::CreatedAt))
                    .col(timestamp_with_time_zone(Generation::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Generation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Generation {
    Table,
    Id,
    Name,
    Number,
    Description,
    ReleasedAt,
    CreatedAt,
    UpdatedAt,
}
