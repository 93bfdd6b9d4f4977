use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::generation::{CreateGenerationDto, GenerationDto, UpdateGenerationDto},
    server::error::validation::{IssueList, ValidationError},
};

#[derive(Debug, Clone)]
pub struct Generation {
    pub id: i32,
    pub name: String,
    pub number: i32,
    pub description: Option<String>,
    pub released_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Generation {
    pub fn from_entity(entity: entity::generation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            number: entity.number,
            description: entity.description,
            released_at: entity.released_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GenerationDto {
        GenerationDto {
            id: self.id,
            name: self.name,
            number: self.number,
            description: self.description,
            released_at: self.released_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGenerationParams {
    pub name: String,
    pub number: i32,
    pub description: Option<String>,
    pub released_at: Option<NaiveDate>,
}

impl CreateGenerationParams {
    pub fn from_dto(dto: CreateGenerationDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if dto.name.chars().count() < 2 {
            issues.push("name", "must have at least 2 characters");
        }
        if dto.number < 1 {
            issues.push("number", "must be at least 1");
        }

        issues.into_result()?;

        Ok(Self {
            name: dto.name,
            number: dto.number,
            description: dto.description,
            released_at: dto.released_at,
        })
    }
}

/// Partial update: `None` leaves a field untouched; the double-wrapped fields
/// carry an explicit clear as `Some(None)`.
#[derive(Debug, Clone)]
pub struct UpdateGenerationParams {
    pub id: i32,
    pub name: Option<String>,
    pub number: Option<i32>,
    pub description: Option<Option<String>>,
    pub released_at: Option<Option<NaiveDate>>,
}

impl UpdateGenerationParams {
    pub fn from_dto(id: i32, dto: UpdateGenerationDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if let Some(name) = &dto.name {
            if name.chars().count() < 2 {
                issues.push("name", "must have at least 2 characters");
            }
        }
        if let Some(number) = dto.number {
            if number < 1 {
                issues.push("number", "must be at least 1");
            }
        }

        issues.into_result()?;

        Ok(Self {
            id,
            name: dto.name,
            number: dto.number,
            description: dto.description,
            released_at: dto.released_at,
        })
    }
}
