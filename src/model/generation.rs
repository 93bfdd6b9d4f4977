use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationDto {
    pub id: i32,
    pub name: String,
    pub number: i32,
    pub description: Option<String>,
    pub released_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenerationDto {
    pub name: String,
    pub number: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
}

/// Partial update payload. Absent fields leave the stored value untouched;
/// for nullable fields an explicit `null` clears the value, which is why the
/// nullable ones are double-wrapped.
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGenerationDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<Option<NaiveDate>>,
}
