use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::error::validation::{IssueList, ValidationError, ValidationIssue},
};

/// Capability set for dashboard accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Editor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "EDITOR" => Some(Self::Editor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the entity to a domain model at the repository boundary.
    ///
    /// An unknown role string means corrupted data and surfaces as an error
    /// rather than being silently coerced.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = UserRole::parse(&entity.role)
            .ok_or_else(|| DbErr::Custom(format!("Unknown user role '{}'", entity.role)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if !looks_like_email(&dto.email) {
            issues.push("email", "must be a valid email address");
        }
        if dto.name.trim().is_empty() {
            issues.push("name", "must not be empty");
        }
        let role = match UserRole::parse(&dto.role) {
            Some(role) => role,
            None => {
                issues.push("role", "must be one of ADMIN, EDITOR");
                UserRole::Editor
            }
        };

        issues.into_result()?;

        Ok(Self {
            email: dto.email,
            name: dto.name,
            role,
        })
    }
}

/// Parses a role field from a request payload, failing with a structured
/// validation issue instead of a generic message.
pub fn parse_role_field(value: &str) -> Result<UserRole, ValidationError> {
    match UserRole::parse(value) {
        Some(role) => Ok(role),
        None => Err(ValidationError {
            issues: vec![ValidationIssue {
                path: "role".to_string(),
                message: "must be one of ADMIN, EDITOR".to_string(),
            }],
        }),
    }
}

/// One page of the user listing.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl UserPage {
    pub fn into_dto(self) -> crate::model::user::PaginatedUsersDto {
        crate::model::user::PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Validated login payload: the one-time code plus, for bootstrap logins,
/// the email/name claiming the admin account.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub code: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl LoginParams {
    pub fn from_dto(dto: crate::model::user::LoginDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if dto.code.trim().is_empty() {
            issues.push("code", "must not be empty");
        }
        if let Some(email) = &dto.email {
            if !looks_like_email(email) {
                issues.push("email", "must be a valid email address");
            }
        }

        issues.into_result()?;

        Ok(Self {
            code: dto.code,
            email: dto.email,
            name: dto.name,
        })
    }
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && domain.len() >= 3,
        None => false,
    }
}
