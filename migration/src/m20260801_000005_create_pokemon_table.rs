use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000002_create_generation_table::Generation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(string(Pokemon::Name))
                    .col(string_uniq(Pokemon::Slug))
                    .col(integer_uniq(Pokemon::IndexNumber))
                    .col(integer(Pokemon::GenerationId))
                    .col(string_null(Pokemon::Classification))
                    .col(text_null(Pokemon::Description))
                    .col(double_null(Pokemon::HeightMeters))
                    .col(double_null(Pokemon::WeightKilograms))
                    .col(boolean(Pokemon::IsLegendary))
                    .col(boolean(Pokemon::IsMythical))
                    .col(integer_null(Pokemon::BaseHp))
                    .col(integer_null(Pokemon::BaseAttack))
                    .col(integer_null(Pokemon::BaseDefense))
                    .col(integer_null(Pokemon::BaseSpAttack))
                    .col(integer_null(Pokemon::BaseSpDefense))
                    .col(integer_null(Pokemon::BaseSpeed))
                    .col(integer_null(Pokemon::PrimaryImageMediaId))
                    .col(integer_null(Pokemon::PrimaryAudioMediaId))
                    .col(integer_null(Pokemon::CreatedById))
                    .col(integer_null(Pokemon::UpdatedById))
                    .col(timestamp_with_time_zone(Pokemon::CreatedAt))
                    .col(timestamp_with_time_zone(Pokemon::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_generation_id")
                            .from(Pokemon::Table, Pokemon::GenerationId)
                            .to(Generation::Table, Generation::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_created_by_id")
                            .from(Pokemon::Table, Pokemon::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_updated_by_id")
                            .from(Pokemon::Table, Pokemon::UpdatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    Table,
    Id,
    Name,
    Slug,
    IndexNumber,
    GenerationId,
    Classification,
    Description,
    HeightMeters,
    WeightKilograms,
    IsLegendary,
    IsMythical,
    BaseHp,
    BaseAttack,
    BaseDefense,
    BaseSpAttack,
    BaseSpDefense,
    BaseSpeed,
    PrimaryImageMediaId,
    PrimaryAudioMediaId,
    CreatedById,
    UpdatedById,
    CreatedAt,
    UpdatedAt,
}
