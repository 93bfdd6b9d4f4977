use sea_orm::DatabaseConnection;

use crate::server::{
    data::poke_type::PokeTypeRepository,
    error::AppError,
    model::poke_type::{CreateTypeParams, PokeType, TypeRelations, UpdateTypeParams},
    util::slug::slugify,
};

pub struct PokeTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokeTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTypeParams) -> Result<PokeType, AppError> {
        let repo = PokeTypeRepository::new(self.db);

        check_relation_targets(&repo, &params.relations).await?;

        let slug = slugify(params.slug.as_deref().unwrap_or(&params.name));

        let id = repo.create(params, slug).await?;

        let related = repo
            .get_by_id_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Type not found after creation".to_string()))?;

        Ok(PokeType::from_related(related)?)
    }

    /// All types ordered by name.
    pub async fn get_all(&self) -> Result<Vec<PokeType>, AppError> {
        let repo = PokeTypeRepository::new(self.db);

        let types = repo.get_all_with_relations().await?;

        types
            .into_iter()
            .map(PokeType::from_related)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PokeType>, AppError> {
        let repo = PokeTypeRepository::new(self.db);

        let related = repo.get_by_id_with_relations(id).await?;

        related
            .map(PokeType::from_related)
            .transpose()
            .map_err(Into::into)
    }

    /// Returns `None` when the type doesn't exist.
    pub async fn update(&self, params: UpdateTypeParams) -> Result<Option<PokeType>, AppError> {
        let repo = PokeTypeRepository::new(self.db);

        if let Some(relations) = &params.relations {
            check_relation_targets(&repo, relations).await?;
        }

        // An explicit slug wins; otherwise a renamed type gets a re-derived one.
        let slug = params
            .slug
            .as_deref()
            .map(slugify)
            .or_else(|| params.name.as_deref().map(slugify));

        let id = params.id;
        if !repo.update(params, slug).await? {
            return Ok(None);
        }

        let related = repo.get_by_id_with_relations(id).await?;

        related
            .map(PokeType::from_related)
            .transpose()
            .map_err(Into::into)
    }

    /// Refuses with a conflict while any Pokemon still holds the type;
    /// nothing is changed in that case. Returns `false` when the type
    /// doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PokeTypeRepository::new(self.db);

        let usage = repo.count_pokemon_usage(id).await?;
        if usage > 0 {
            return Err(AppError::Conflict(
                "Type is in use by Pokemon and cannot be deleted".to_string(),
            ));
        }

        Ok(repo.delete(id).await?)
    }
}

async fn check_relation_targets(
    repo: &PokeTypeRepository<'_>,
    relations: &TypeRelations,
) -> Result<(), AppError> {
    let missing = repo.find_missing(&relations.referenced_ids()).await?;
    if missing.is_empty() {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "Unknown type id(s): {}",
        join_ids(&missing)
    )))
}

pub(crate) fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
