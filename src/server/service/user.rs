use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User, UserPage, UserRole},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<UserPage, AppError> {
        let repo = UserRepository::new(self.db);

        let (users, total) = repo.get_all_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(UserPage {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Returns `None` when the user doesn't exist.
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.set_role(id, role).await?)
    }
}
