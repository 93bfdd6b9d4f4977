use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::generation::GenerationDto;

/// A type assigned to a Pokemon together with its 1-based slot.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonTypeSlotDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub color_hex: Option<String>,
    pub slot: i32,
}

/// The six base stats. Every field is serialized, with `null` for stats that
/// were never specified, so "absent" stays distinguishable from any value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseStatsDto {
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub sp_attack: Option<i32>,
    pub sp_defense: Option<i32>,
    pub speed: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: i32,
    pub kind: String,
    pub url: String,
    pub title: Option<String>,
    pub is_primary: bool,
}

/// Media item supplied on create/update. The whole media list is replaced
/// when this appears in a payload.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaInputDto {
    /// `IMAGE` or `AUDIO`.
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

/// Compact reference to another Pokemon in an evolution chain.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub index_number: i32,
    pub generation: Option<GenerationDto>,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub height_meters: Option<f64>,
    pub weight_kilograms: Option<f64>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Sorted ascending by slot.
    pub types: Vec<PokemonTypeSlotDto>,
    pub media: Vec<MediaDto>,
    pub primary_image_media: Option<MediaDto>,
    pub primary_audio_media: Option<MediaDto>,
    pub base_stats: BaseStatsDto,
    pub pre_evolution: Option<PokemonSummaryDto>,
    pub evolutions: Vec<PokemonSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBaseStatsDto {
    #[serde(default)]
    pub hp: Option<i32>,
    #[serde(default)]
    pub attack: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
    #[serde(default)]
    pub sp_attack: Option<i32>,
    #[serde(default)]
    pub sp_defense: Option<i32>,
    #[serde(default)]
    pub speed: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonDto {
    pub name: String,
    pub index_number: i32,
    pub generation_id: i32,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub height_meters: Option<f64>,
    #[serde(default)]
    pub weight_kilograms: Option<f64>,
    #[serde(default)]
    pub is_legendary: Option<bool>,
    #[serde(default)]
    pub is_mythical: Option<bool>,
    /// 1 or 2 type ids; payload order becomes slot order.
    pub type_ids: Vec<i32>,
    #[serde(default)]
    pub base_stats: Option<CreateBaseStatsDto>,
    #[serde(default)]
    pub media: Option<Vec<MediaInputDto>>,
    #[serde(default)]
    pub pre_evolution_id: Option<i32>,
    #[serde(default)]
    pub next_evolution_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Per-stat patch: absent keeps the stored value, explicit `null` clears it.
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBaseStatsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_attack: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_defense: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Option<i32>>,
}

/// Partial update payload. Scalar fields: absent keeps, present overwrites
/// (explicit `null` clears nullable ones). Collection fields (`typeIds`,
/// `media`, `nextEvolutionIds`): a present array replaces every stored row of
/// that kind in one transaction, an absent field keeps them.
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePokemonDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub index_number: Option<i32>,
    #[serde(default)]
    pub generation_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_meters: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kilograms: Option<Option<f64>>,
    #[serde(default)]
    pub is_legendary: Option<bool>,
    #[serde(default)]
    pub is_mythical: Option<bool>,
    #[serde(default)]
    pub type_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub base_stats: Option<UpdateBaseStatsDto>,
    #[serde(default)]
    pub media: Option<Vec<MediaInputDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_evolution_id: Option<Option<i32>>,
    #[serde(default)]
    pub next_evolution_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Query string for the Pokemon listing. All filters are combinable.
#[derive(Serialize, Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct PokemonQueryDto {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub generation_id: Option<i32>,
    /// Pokemon holding the given type.
    pub type_id: Option<i32>,
    /// Pokemon holding a type the given type is STRONG_AGAINST.
    pub weak_to_type_id: Option<i32>,
    /// Pokemon holding a type with a STRONG_AGAINST edge targeting the given type.
    pub strong_against_type_id: Option<i32>,
    /// 1-based page number, default 1.
    pub page: Option<u64>,
    /// Page size, default 20, capped at 100.
    pub page_size: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPokemonsDto {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<PokemonDto>,
}
