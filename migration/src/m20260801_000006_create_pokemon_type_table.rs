use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000003_create_poke_type_table::PokeType,
    m20260801_000005_create_pokemon_table::Pokemon,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonType::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonType::Id))
                    .col(integer(PokemonType::PokemonId))
                    .col(integer(PokemonType::TypeId))
                    .col(integer(PokemonType::Slot))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_type_pokemon_id")
                            .from(PokemonType::Table, PokemonType::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_type_type_id")
                            .from(PokemonType::Table, PokemonType::TypeId)
                            .to(PokeType::Table, PokeType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_type_pokemon_slot")
                    .table(PokemonType::Table)
                    .col(PokemonType::PokemonId)
                    .col(PokemonType::Slot)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_type_pokemon_type")
                    .table(PokemonType::Table)
                    .col(PokemonType::PokemonId)
                    .col(PokemonType::TypeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonType {
    Table,
    Id,
    PokemonId,
    TypeId,
    Slot,
}
