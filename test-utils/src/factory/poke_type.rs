use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test types with customizable fields.
///
/// Defaults: name `Type {id}` with a matching unique slug and no color.
pub struct PokeTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    color_hex: Option<String>,
}

impl<'a> PokeTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Type {}", id),
            slug: format!("type-{}", id),
            color_hex: None,
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

    pub fn color_hex(mut self, color_hex: Option<String>) -> Self {
        self.color_hex = color_hex;
        self
    }

    pub async fn build(self) -> Result<entity::poke_type::Model, DbErr> {
        let now = Utc::now();
        entity::poke_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            color_hex: ActiveValue::Set(self.color_hex),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a type with default values.
pub async fn create_type(db: &DatabaseConnection) -> Result<entity::poke_type::Model, DbErr> {
    PokeTypeFactory::new(db).build().await
}
