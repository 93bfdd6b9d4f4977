use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "poke_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Normalized on write: upper-case with a leading '#'.
    pub color_hex: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pokemon_type::Entity")]
    PokemonType,
}

impl Related<super::pokemon_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokemonType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
