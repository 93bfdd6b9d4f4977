use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::generation::{
    CreateGenerationParams, Generation, UpdateGenerationParams,
};

pub struct GenerationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenerationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGenerationParams) -> Result<Generation, DbErr> {
        let now = Utc::now();

        let entity = entity::generation::ActiveModel {
            name: ActiveValue::Set(params.name),
            number: ActiveValue::Set(params.number),
            description: ActiveValue::Set(params.description),
            released_at: ActiveValue::Set(params.released_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Generation::from_entity(entity))
    }

    /// All generations ordered by their ordinal number.
    pub async fn get_all(&self) -> Result<Vec<Generation>, DbErr> {
        let entities = entity::prelude::Generation::find()
            .order_by_asc(entity::generation::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Generation::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Generation>, DbErr> {
        let entity = entity::prelude::Generation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Generation::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Generation::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the updated generation, or `None` when the id does not exist.
    pub async fn update(
        &self,
        params: UpdateGenerationParams,
    ) -> Result<Option<Generation>, DbErr> {
        let Some(entity) = entity::prelude::Generation::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::generation::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(number) = params.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(released_at) = params.released_at {
            active.released_at = ActiveValue::Set(released_at);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Generation::from_entity(updated)))
    }

    /// Returns `true` when a row was deleted. Referential checks belong to
    /// the service layer and must run before this.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Generation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of Pokemon belonging to this generation.
    pub async fn count_pokemon_usage(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::GenerationId.eq(id))
            .count(self.db)
            .await
    }
}
