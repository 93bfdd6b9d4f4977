use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Compact type reference used inside effectiveness lists and Pokemon views.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub color_hex: Option<String>,
}

/// Full type view with the four derived effectiveness lists.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color_hex: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub strengths: Vec<TypeSummaryDto>,
    pub weaknesses: Vec<TypeSummaryDto>,
    pub resistances: Vec<TypeSummaryDto>,
    pub immunities: Vec<TypeSummaryDto>,
}

/// Outgoing relationship edges to create for a type, keyed by relation kind.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeRelationsDto {
    #[serde(default)]
    pub strong_against: Vec<i32>,
    #[serde(default)]
    pub weak_against: Vec<i32>,
    #[serde(default)]
    pub immune_to: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTypeDto {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub relations: Option<TypeRelationsDto>,
}

/// Partial update payload. A present `relations` object replaces every
/// outgoing relationship edge; an absent one keeps them.
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTypeDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<Option<String>>,
    #[serde(default)]
    pub relations: Option<TypeRelationsDto>,
}
