use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test generations with customizable fields.
///
/// Defaults: name `Generation {id}` and a unique ordinal number.
pub struct GenerationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    number: i32,
    description: Option<String>,
}

impl<'a> GenerationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Generation {}", id),
            number: id,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::generation::Model, DbErr> {
        let now = Utc::now();
        entity::generation::ActiveModel {
            name: ActiveValue::Set(self.name),
            number: ActiveValue::Set(self.number),
            description: ActiveValue::Set(self.description),
            released_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a generation with default values.
pub async fn create_generation(db: &DatabaseConnection) -> Result<entity::generation::Model, DbErr> {
    GenerationFactory::new(db).build().await
}
