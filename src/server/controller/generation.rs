use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        generation::{CreateGenerationDto, GenerationDto, UpdateGenerationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::generation::{CreateGenerationParams, UpdateGenerationParams},
        service::generation::GenerationService,
        state::AppState,
        util::response::json_success,
    },
};

/// Tag for grouping generation endpoints in OpenAPI documentation
pub static GENERATION_TAG: &str = "generation";

/// List all generations ordered by number.
#[utoipa::path(
    get,
    path = "/api/generations",
    tag = GENERATION_TAG,
    responses(
        (status = 200, description = "All generations ordered by number", body = Vec<GenerationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_generations(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = GenerationService::new(&state.db);

    let generations = service.get_all().await?;

    Ok(json_success(
        StatusCode::OK,
        generations
            .into_iter()
            .map(|g| g.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a new generation. Admin only.
#[utoipa::path(
    post,
    path = "/api/generations",
    tag = GENERATION_TAG,
    request_body = CreateGenerationDto,
    responses(
        (status = 201, description = "Successfully created generation", body = GenerationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_generation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGenerationDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateGenerationParams::from_dto(payload)?;

    let service = GenerationService::new(&state.db);
    let generation = service.create(params).await?;

    Ok(json_success(StatusCode::CREATED, generation.into_dto()))
}

/// Get a generation by id.
#[utoipa::path(
    get,
    path = "/api/generations/{id}",
    tag = GENERATION_TAG,
    params(("id" = i32, Path, description = "Generation ID")),
    responses(
        (status = 200, description = "Generation found", body = GenerationDto),
        (status = 404, description = "Generation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_generation_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let service = GenerationService::new(&state.db);

    let generation = service.get_by_id(id).await?;

    match generation {
        Some(generation) => Ok(json_success(StatusCode::OK, generation.into_dto())),
        None => Err(AppError::NotFound("Generation not found".to_string())),
    }
}

/// Partially update a generation. Admin only.
#[utoipa::path(
    put,
    path = "/api/generations/{id}",
    tag = GENERATION_TAG,
    params(("id" = i32, Path, description = "Generation ID")),
    request_body = UpdateGenerationDto,
    responses(
        (status = 200, description = "Successfully updated generation", body = GenerationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Generation not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_generation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenerationDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateGenerationParams::from_dto(id, payload)?;

    let service = GenerationService::new(&state.db);
    let generation = service.update(params).await?;

    match generation {
        Some(generation) => Ok(json_success(StatusCode::OK, generation.into_dto())),
        None => Err(AppError::NotFound("Generation not found".to_string())),
    }
}

/// Delete a generation. Admin only; refused with 409 while referenced.
#[utoipa::path(
    delete,
    path = "/api/generations/{id}",
    tag = GENERATION_TAG,
    params(("id" = i32, Path, description = "Generation ID")),
    responses(
        (status = 204, description = "Successfully deleted generation"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Generation not found", body = ErrorDto),
        (status = 409, description = "Generation still referenced by Pokemon", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_generation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = GenerationService::new(&state.db);
    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(AppError::NotFound("Generation not found".to_string()))
    }
}
