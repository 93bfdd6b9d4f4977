//! Authentication and authorization guard.
//!
//! Every protected endpoint resolves the session user through `AuthGuard`
//! before touching storage. A missing session fails with 401, an
//! insufficient role with 403.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{User, UserRole},
};

/// Capabilities an endpoint can require.
pub enum Permission {
    /// Requires exactly the ADMIN role.
    Admin,
    /// Accepts ADMIN or EDITOR.
    Editor,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            reason: "endpoint requires the admin role".to_string(),
                        }
                        .into());
                    }
                }
                Permission::Editor => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Editor) {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            reason: "endpoint requires the editor capability".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
