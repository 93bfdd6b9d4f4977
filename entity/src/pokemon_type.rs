use sea_orm::entity::prelude::*;

/// Join row assigning a type to a Pokemon at a 1-based slot (max 2 slots).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pokemon_id: i32,
    pub type_id: i32,
    pub slot: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::PokemonId",
        to = "super::pokemon::Column::Id"
    )]
    Pokemon,
    #[sea_orm(
        belongs_to = "super::poke_type::Entity",
        from = "Column::TypeId",
        to = "super::poke_type::Column::Id"
    )]
    PokeType,
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pokemon.def()
    }
}

impl Related<super::poke_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
