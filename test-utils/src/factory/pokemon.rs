use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating bare test Pokemon rows with customizable fields.
///
/// Creates only the Pokemon row itself; type slots, media and evolution
/// edges are managed by the repository under test.
pub struct PokemonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    index_number: i32,
    generation_id: i32,
}

impl<'a> PokemonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, generation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pokemon {}", id),
            slug: format!("pokemon-{}", id),
            index_number: id,
            generation_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn index_number(mut self, index_number: i32) -> Self {
        self.index_number = index_number;
        self
    }

    pub async fn build(self) -> Result<entity::pokemon::Model, DbErr> {
        let now = Utc::now();
        entity::pokemon::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            index_number: ActiveValue::Set(self.index_number),
            generation_id: ActiveValue::Set(self.generation_id),
            classification: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            height_meters: ActiveValue::Set(None),
            weight_kilograms: ActiveValue::Set(None),
            is_legendary: ActiveValue::Set(false),
            is_mythical: ActiveValue::Set(false),
            base_hp: ActiveValue::Set(None),
            base_attack: ActiveValue::Set(None),
            base_defense: ActiveValue::Set(None),
            base_sp_attack: ActiveValue::Set(None),
            base_sp_defense: ActiveValue::Set(None),
            base_speed: ActiveValue::Set(None),
            primary_image_media_id: ActiveValue::Set(None),
            primary_audio_media_id: ActiveValue::Set(None),
            created_by_id: ActiveValue::Set(None),
            updated_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Pokemon row with default values in the given generation.
pub async fn create_pokemon(
    db: &DatabaseConnection,
    generation_id: i32,
) -> Result<entity::pokemon::Model, DbErr> {
    PokemonFactory::new(db, generation_id).build().await
}
