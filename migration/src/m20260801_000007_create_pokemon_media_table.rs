use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000005_create_pokemon_table::Pokemon;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonMedia::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonMedia::Id))
                    .col(integer(PokemonMedia::PokemonId))
                    .col(string(PokemonMedia::Kind))
                    .col(string(PokemonMedia::Url))
                    .col(string_null(PokemonMedia::Title))
                    .col(boolean(PokemonMedia::IsPrimary))
                    .col(timestamp_with_time_zone(PokemonMedia::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_media_pokemon_id")
                            .from(PokemonMedia::Table, PokemonMedia::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonMedia::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonMedia {
    Table,
    Id,
    PokemonId,
    Kind,
    Url,
    Title,
    IsPrimary,
    CreatedAt,
}
