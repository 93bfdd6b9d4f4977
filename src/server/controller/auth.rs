use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::LoginDto,
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::LoginParams,
        service::auth::AuthService,
        state::AppState,
        util::response::json_success,
    },
};

/// Consumes a one-time login code and establishes the session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let service = AuthService::new(&state.db, &state.login_codes);
    let user = service.login(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(json_success(StatusCode::OK, user.into_dto()))
}

/// Clears the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the currently authenticated user, or 401 without a session.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(json_success(StatusCode::OK, user.into_dto()))
}
