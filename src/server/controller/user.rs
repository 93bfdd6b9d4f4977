use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, LoginCodeDto, PaginatedUsersDto, UpdateUserRoleDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{parse_role_field, CreateUserParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::response::json_success,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// List users, paginated. Admin only.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);
    let page = service.get_paginated(params.page, params.entries).await?;

    Ok(json_success(StatusCode::OK, page.into_dto()))
}

/// Create a dashboard account. Admin only.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;

    let service = UserService::new(&state.db);
    let user = service.create(params).await?;

    Ok(json_success(StatusCode::CREATED, user.into_dto()))
}

/// Change a user's role. Admin only.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Successfully updated role", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = parse_role_field(&payload.role)?;

    let service = UserService::new(&state.db);
    let user = service.set_role(id, role).await?;

    match user {
        Some(user) => Ok(json_success(StatusCode::OK, user.into_dto())),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Issue a one-time login code for an existing user. Admin only.
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/login-code",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 201, description = "One-time login code issued", body = LoginCodeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_login_code(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AuthService::new(&state.db, &state.login_codes);
    let code = service.issue_user_code(id).await?;

    match code {
        Some(code) => Ok(json_success(
            StatusCode::CREATED,
            LoginCodeDto {
                code,
                expires_in_seconds: state.login_codes.ttl_seconds(),
            },
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
