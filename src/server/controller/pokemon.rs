use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pokemon::{
            CreatePokemonDto, PaginatedPokemonsDto, PokemonDto, PokemonQueryDto, UpdatePokemonDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pokemon::{CreatePokemonParams, ListPokemonParams, UpdatePokemonParams},
        service::pokemon::PokemonService,
        state::AppState,
        util::response::json_success,
    },
};

/// Tag for grouping Pokemon endpoints in OpenAPI documentation
pub static POKEMON_TAG: &str = "pokemon";

/// List Pokemon with combinable filters, ordered by generation number then
/// index number, paginated.
#[utoipa::path(
    get,
    path = "/api/pokemons",
    tag = POKEMON_TAG,
    params(PokemonQueryDto),
    responses(
        (status = 200, description = "One page of matching Pokemon", body = PaginatedPokemonsDto),
        (status = 422, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemons(
    State(state): State<AppState>,
    Query(query): Query<PokemonQueryDto>,
) -> Result<Response, AppError> {
    let params = ListPokemonParams::from_dto(query)?;

    let service = PokemonService::new(&state.db);
    let page = service.list(params).await?;

    Ok(json_success(StatusCode::OK, page.into_dto()))
}

/// Create a new Pokemon with its types, media and evolution edges. Admin only.
#[utoipa::path(
    post,
    path = "/api/pokemons",
    tag = POKEMON_TAG,
    request_body = CreatePokemonDto,
    responses(
        (status = 201, description = "Successfully created Pokemon", body = PokemonDto),
        (status = 400, description = "Unknown generation/type/Pokemon reference", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Evolution target already has a pre-evolution", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePokemonDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreatePokemonParams::from_dto(payload)?;

    let service = PokemonService::new(&state.db);
    let pokemon = service.create(params, Some(user.id)).await?;

    Ok(json_success(StatusCode::CREATED, pokemon.into_dto()))
}

/// Get a Pokemon by id with its full view.
#[utoipa::path(
    get,
    path = "/api/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Pokemon found", body = PokemonDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let service = PokemonService::new(&state.db);

    let pokemon = service.get_by_id(id).await?;

    match pokemon {
        Some(pokemon) => Ok(json_success(StatusCode::OK, pokemon.into_dto())),
        None => Err(AppError::NotFound("Pokemon not found".to_string())),
    }
}

/// Partially update a Pokemon. Present collection fields (`typeIds`, `media`,
/// `nextEvolutionIds`) are replaced wholesale in one transaction. Admin only.
#[utoipa::path(
    put,
    path = "/api/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    request_body = UpdatePokemonDto,
    responses(
        (status = 200, description = "Successfully updated Pokemon", body = PokemonDto),
        (status = 400, description = "Unknown generation/type/Pokemon reference", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 409, description = "Evolution target already has a pre-evolution", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePokemonDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdatePokemonParams::from_dto(id, payload)?;

    let service = PokemonService::new(&state.db);
    let pokemon = service.update(params, Some(user.id)).await?;

    match pokemon {
        Some(pokemon) => Ok(json_success(StatusCode::OK, pokemon.into_dto())),
        None => Err(AppError::NotFound("Pokemon not found".to_string())),
    }
}

/// Delete a Pokemon, cascading its own media/type/evolution rows. Admin only.
#[utoipa::path(
    delete,
    path = "/api/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 204, description = "Successfully deleted Pokemon"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = PokemonService::new(&state.db);
    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(AppError::NotFound("Pokemon not found".to_string()))
    }
}
