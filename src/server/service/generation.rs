use sea_orm::DatabaseConnection;

use crate::server::{
    data::generation::GenerationRepository,
    error::AppError,
    model::generation::{CreateGenerationParams, Generation, UpdateGenerationParams},
};

pub struct GenerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGenerationParams) -> Result<Generation, AppError> {
        let repo = GenerationRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Generation>, AppError> {
        let repo = GenerationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Generation>, AppError> {
        let repo = GenerationRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Returns `None` when the generation doesn't exist.
    pub async fn update(
        &self,
        params: UpdateGenerationParams,
    ) -> Result<Option<Generation>, AppError> {
        let repo = GenerationRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Refuses with a conflict while any Pokemon still belongs to the
    /// generation; nothing is changed in that case. Returns `false` when the
    /// generation doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = GenerationRepository::new(self.db);

        let usage = repo.count_pokemon_usage(id).await?;
        if usage > 0 {
            return Err(AppError::Conflict(
                "Generation is associated with Pokemon and cannot be deleted".to_string(),
            ));
        }

        Ok(repo.delete(id).await?)
    }
}
