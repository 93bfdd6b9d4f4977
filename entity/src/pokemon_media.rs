use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon_media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pokemon_id: i32,
    /// Stored as "IMAGE" or "AUDIO"; parsed into a domain enum at the
    /// repository boundary.
    pub kind: String,
    pub url: String,
    pub title: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::PokemonId",
        to = "super::pokemon::Column::Id"
    )]
    Pokemon,
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pokemon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
