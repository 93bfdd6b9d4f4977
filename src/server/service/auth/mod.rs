pub mod code;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, User, UserRole},
    service::auth::code::{CodeGrant, LoginCodeService},
};

/// Code-based login: consumes a one-time code and resolves it to a user.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    codes: &'a LoginCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, codes: &'a LoginCodeService) -> Self {
        Self { db, codes }
    }

    /// Consumes the login code and returns the user it grants access to.
    ///
    /// A bootstrap code claims (or promotes) the admin account for the
    /// supplied email; a user-bound code logs that user in. The caller is
    /// responsible for establishing the session afterwards.
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let Some(grant) = self.codes.validate_and_consume(&params.code).await else {
            return Err(AuthError::InvalidLoginCode.into());
        };

        let repo = UserRepository::new(self.db);

        match grant {
            CodeGrant::BootstrapAdmin => {
                let email = params.email.ok_or(AuthError::MissingBootstrapEmail)?;

                if let Some(existing) = repo.find_by_email(&email).await? {
                    let promoted = repo.set_role(existing.id, UserRole::Admin).await?;
                    return promoted
                        .ok_or_else(|| AuthError::UserNotInDatabase(existing.id).into());
                }

                let name = params
                    .name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| default_name_from_email(&email));

                Ok(repo
                    .create(CreateUserParams {
                        email,
                        name,
                        role: UserRole::Admin,
                    })
                    .await?)
            }
            CodeGrant::User(user_id) => {
                let user = repo.find_by_id(user_id).await?;

                // The account may have been removed since the code was issued.
                user.ok_or_else(|| AuthError::InvalidLoginCode.into())
            }
        }
    }

    /// Issues a one-time login code for an existing user. Returns `None`
    /// when the user doesn't exist.
    pub async fn issue_user_code(&self, user_id: i32) -> Result<Option<String>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(self.codes.issue(CodeGrant::User(user_id)).await))
    }
}

fn default_name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("Admin")
        .to_string()
}
