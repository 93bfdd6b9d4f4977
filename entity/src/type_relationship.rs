use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "type_relationship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_type_id: i32,
    pub target_type_id: i32,
    /// Stored as "STRONG_AGAINST", "WEAK_AGAINST" or "IMMUNE_TO"; parsed into
    /// a domain enum at the repository boundary.
    pub relation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::poke_type::Entity",
        from = "Column::SourceTypeId",
        to = "super::poke_type::Column::Id"
    )]
    SourceType,
    #[sea_orm(
        belongs_to = "super::poke_type::Entity",
        from = "Column::TargetTypeId",
        to = "super::poke_type::Column::Id"
    )]
    TargetType,
}

impl ActiveModelBehavior for ActiveModel {}
