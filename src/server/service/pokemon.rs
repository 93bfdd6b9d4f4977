use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        generation::GenerationRepository, poke_type::PokeTypeRepository,
        pokemon::PokemonRepository,
    },
    error::AppError,
    model::pokemon::{
        CreatePokemonParams, ListPokemonParams, Pokemon, PokemonPage, UpdatePokemonParams,
    },
    service::poke_type::join_ids,
    util::slug::slugify,
};

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the Pokemon with its type slots, media and evolution edges,
    /// then re-reads it through the view mapper so the response shape matches
    /// subsequent reads exactly.
    pub async fn create(
        &self,
        params: CreatePokemonParams,
        audit_user_id: Option<i32>,
    ) -> Result<Pokemon, AppError> {
        let repo = PokemonRepository::new(self.db);

        self.check_generation(params.generation_id).await?;
        self.check_types(&params.type_ids).await?;

        let mut referenced = params.next_evolution_ids.clone();
        if let Some(pre_evolution_id) = params.pre_evolution_id {
            referenced.push(pre_evolution_id);
        }
        self.check_pokemon_refs(&repo, &referenced).await?;
        self.check_evolution_conflicts(&repo, &params.next_evolution_ids, None)
            .await?;

        let slug = slugify(params.slug.as_deref().unwrap_or(&params.name));

        let id = repo.create(params, slug, audit_user_id).await?;

        let related = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pokemon not found after creation".to_string()))?;

        Ok(Pokemon::from_related(related)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pokemon>, AppError> {
        let repo = PokemonRepository::new(self.db);

        let related = repo.get_by_id(id).await?;

        related
            .map(Pokemon::from_related)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn list(&self, params: ListPokemonParams) -> Result<PokemonPage, AppError> {
        let repo = PokemonRepository::new(self.db);

        let (related, total) = repo.get_filtered_paginated(&params).await?;

        let results = related
            .into_iter()
            .map(Pokemon::from_related)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PokemonPage {
            total,
            page: params.page,
            page_size: params.page_size,
            results,
        })
    }

    /// Returns `None` when the Pokemon doesn't exist.
    pub async fn update(
        &self,
        params: UpdatePokemonParams,
        audit_user_id: Option<i32>,
    ) -> Result<Option<Pokemon>, AppError> {
        let repo = PokemonRepository::new(self.db);

        if let Some(generation_id) = params.generation_id {
            self.check_generation(generation_id).await?;
        }
        if let Some(type_ids) = &params.type_ids {
            self.check_types(type_ids).await?;
        }

        let mut referenced = Vec::new();
        if let Some(next_evolution_ids) = &params.next_evolution_ids {
            referenced.extend_from_slice(next_evolution_ids);
        }
        if let Some(Some(pre_evolution_id)) = params.pre_evolution {
            referenced.push(pre_evolution_id);
        }
        if referenced.contains(&params.id) {
            return Err(AppError::BadRequest(
                "A Pokemon cannot be part of its own evolution chain".to_string(),
            ));
        }
        self.check_pokemon_refs(&repo, &referenced).await?;
        if let Some(next_evolution_ids) = &params.next_evolution_ids {
            self.check_evolution_conflicts(&repo, next_evolution_ids, Some(params.id))
                .await?;
        }

        let slug = params
            .slug
            .as_deref()
            .map(slugify)
            .or_else(|| params.name.as_deref().map(slugify));

        let id = params.id;
        if !repo.update(params, slug, audit_user_id).await? {
            return Ok(None);
        }

        let related = repo.get_by_id(id).await?;

        related
            .map(Pokemon::from_related)
            .transpose()
            .map_err(Into::into)
    }

    /// Cascades the Pokemon's own media/type/evolution rows transactionally.
    /// Returns `false` when the Pokemon doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PokemonRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    async fn check_generation(&self, generation_id: i32) -> Result<(), AppError> {
        let repo = GenerationRepository::new(self.db);

        if !repo.exists(generation_id).await? {
            return Err(AppError::BadRequest(format!(
                "Unknown generation id: {}",
                generation_id
            )));
        }

        Ok(())
    }

    async fn check_types(&self, type_ids: &[i32]) -> Result<(), AppError> {
        let repo = PokeTypeRepository::new(self.db);

        let missing = repo.find_missing(type_ids).await?;
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown type id(s): {}",
                join_ids(&missing)
            )));
        }

        Ok(())
    }

    async fn check_pokemon_refs(
        &self,
        repo: &PokemonRepository<'_>,
        ids: &[i32],
    ) -> Result<(), AppError> {
        let missing = repo.find_missing(ids).await?;
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown Pokemon id(s): {}",
                join_ids(&missing)
            )));
        }

        Ok(())
    }

    async fn check_evolution_conflicts(
        &self,
        repo: &PokemonRepository<'_>,
        target_ids: &[i32],
        exclude_source: Option<i32>,
    ) -> Result<(), AppError> {
        let conflicts = repo.evolution_conflicts(target_ids, exclude_source).await?;
        if !conflicts.is_empty() {
            return Err(AppError::Conflict(format!(
                "Pokemon id(s) {} already have a pre-evolution",
                join_ids(&conflicts)
            )));
        }

        Ok(())
    }
}
