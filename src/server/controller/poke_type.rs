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
        poke_type::{CreateTypeDto, TypeDto, UpdateTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::poke_type::{CreateTypeParams, UpdateTypeParams},
        service::poke_type::PokeTypeService,
        state::AppState,
        util::response::json_success,
    },
};

/// Tag for grouping type endpoints in OpenAPI documentation
pub static TYPE_TAG: &str = "type";

/// List all types ordered by name, each with its four effectiveness lists.
#[utoipa::path(
    get,
    path = "/api/types",
    tag = TYPE_TAG,
    responses(
        (status = 200, description = "All types ordered by name", body = Vec<TypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_types(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = PokeTypeService::new(&state.db);

    let types = service.get_all().await?;

    Ok(json_success(
        StatusCode::OK,
        types.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a new type with its relationship edges. Admin only.
#[utoipa::path(
    post,
    path = "/api/types",
    tag = TYPE_TAG,
    request_body = CreateTypeDto,
    responses(
        (status = 201, description = "Successfully created type", body = TypeDto),
        (status = 400, description = "Unknown relation target", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTypeDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateTypeParams::from_dto(payload)?;

    let service = PokeTypeService::new(&state.db);
    let poke_type = service.create(params).await?;

    Ok(json_success(StatusCode::CREATED, poke_type.into_dto()))
}

/// Get a type by id.
#[utoipa::path(
    get,
    path = "/api/types/{id}",
    tag = TYPE_TAG,
    params(("id" = i32, Path, description = "Type ID")),
    responses(
        (status = 200, description = "Type found", body = TypeDto),
        (status = 404, description = "Type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let service = PokeTypeService::new(&state.db);

    let poke_type = service.get_by_id(id).await?;

    match poke_type {
        Some(poke_type) => Ok(json_success(StatusCode::OK, poke_type.into_dto())),
        None => Err(AppError::NotFound("Type not found".to_string())),
    }
}

/// Partially update a type; a present `relations` object replaces every
/// outgoing edge. Admin only.
#[utoipa::path(
    put,
    path = "/api/types/{id}",
    tag = TYPE_TAG,
    params(("id" = i32, Path, description = "Type ID")),
    request_body = UpdateTypeDto,
    responses(
        (status = 200, description = "Successfully updated type", body = TypeDto),
        (status = 400, description = "Unknown relation target", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Type not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTypeDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateTypeParams::from_dto(id, payload)?;

    let service = PokeTypeService::new(&state.db);
    let poke_type = service.update(params).await?;

    match poke_type {
        Some(poke_type) => Ok(json_success(StatusCode::OK, poke_type.into_dto())),
        None => Err(AppError::NotFound("Type not found".to_string())),
    }
}

/// Delete a type. Admin only; refused with 409 while any Pokemon holds it.
#[utoipa::path(
    delete,
    path = "/api/types/{id}",
    tag = TYPE_TAG,
    params(("id" = i32, Path, description = "Type ID")),
    responses(
        (status = 204, description = "Successfully deleted type"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Type not found", body = ErrorDto),
        (status = 409, description = "Type still in use by Pokemon", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = PokeTypeService::new(&state.db);
    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(AppError::NotFound("Type not found".to_string()))
    }
}
