use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    /// National index number, unique across all Pokemon.
    #[sea_orm(unique)]
    pub index_number: i32,
    pub generation_id: i32,
    pub classification: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub height_meters: Option<f64>,
    pub weight_kilograms: Option<f64>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub base_hp: Option<i32>,
    pub base_attack: Option<i32>,
    pub base_defense: Option<i32>,
    pub base_sp_attack: Option<i32>,
    pub base_sp_defense: Option<i32>,
    pub base_speed: Option<i32>,
    /// Must point at an owned media row of the matching kind, or be absent.
    pub primary_image_media_id: Option<i32>,
    pub primary_audio_media_id: Option<i32>,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::generation::Entity",
        from = "Column::GenerationId",
        to = "super::generation::Column::Id"
    )]
    Generation,
    #[sea_orm(has_many = "super::pokemon_type::Entity")]
    PokemonType,
    #[sea_orm(has_many = "super::pokemon_media::Entity")]
    PokemonMedia,
}

impl Related<super::generation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Generation.def()
    }
}

impl Related<super::pokemon_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokemonType.def()
    }
}

impl Related<super::pokemon_media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokemonMedia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
