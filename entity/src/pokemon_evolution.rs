use sea_orm::entity::prelude::*;

/// Directed evolution edge: `from_pokemon_id` evolves into `to_pokemon_id`.
///
/// `to_pokemon_id` is unique so a Pokemon has at most one pre-evolution.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon_evolution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub from_pokemon_id: i32,
    #[sea_orm(unique)]
    pub to_pokemon_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::FromPokemonId",
        to = "super::pokemon::Column::Id"
    )]
    FromPokemon,
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::ToPokemonId",
        to = "super::pokemon::Column::Id"
    )]
    ToPokemon,
}

impl ActiveModelBehavior for ActiveModel {}
