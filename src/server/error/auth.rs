use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session: the request is unauthenticated.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the capability required by the endpoint.
    #[error("User {user_id} denied: {reason}")]
    AccessDenied { user_id: i32, reason: String },

    /// Login attempted with a code that is unknown, already used, or expired.
    #[error("Login attempted with an invalid or expired code")]
    InvalidLoginCode,

    /// Bootstrap login attempted without the claiming email address.
    #[error("Bootstrap login attempted without an email address")]
    MissingBootstrapEmail,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::AccessDenied { user_id, reason } => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You are not allowed to perform this action",
                    )),
                )
                    .into_response()
            }
            Self::InvalidLoginCode => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid or expired login code")),
            )
                .into_response(),
            Self::MissingBootstrapEmail => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(
                    "An email address is required to claim the admin account",
                )),
            )
                .into_response(),
        }
    }
}
