use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000003_create_poke_type_table::PokeType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TypeRelationship::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeRelationship::Id))
                    .col(integer(TypeRelationship::SourceTypeId))
                    .col(integer(TypeRelationship::TargetTypeId))
                    .col(string(TypeRelationship::Relation))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_relationship_source_type_id")
                            .from(TypeRelationship::Table, TypeRelationship::SourceTypeId)
                            .to(PokeType::Table, PokeType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_relationship_target_type_id")
                            .from(TypeRelationship::Table, TypeRelationship::TargetTypeId)
                            .to(PokeType::Table, PokeType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_type_relationship_source_target_relation")
                    .table(TypeRelationship::Table)
                    .col(TypeRelationship::SourceTypeId)
                    .col(TypeRelationship::TargetTypeId)
                    .col(TypeRelationship::Relation)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TypeRelationship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TypeRelationship {
    Table,
    Id,
    SourceTypeId,
    TargetTypeId,
    Relation,
}
