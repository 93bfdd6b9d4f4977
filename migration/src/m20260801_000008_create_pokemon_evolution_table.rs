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
                    .table(PokemonEvolution::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonEvolution::Id))
                    .col(integer(PokemonEvolution::FromPokemonId))
                    // Unique: a Pokemon has at most one pre-evolution edge.
                    .col(integer_uniq(PokemonEvolution::ToPokemonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_evolution_from_pokemon_id")
                            .from(PokemonEvolution::Table, PokemonEvolution::FromPokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_evolution_to_pokemon_id")
                            .from(PokemonEvolution::Table, PokemonEvolution::ToPokemonId)
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
            .drop_table(Table::drop().table(PokemonEvolution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonEvolution {
    Table,
    Id,
    FromPokemonId,
    ToPokemonId,
}
