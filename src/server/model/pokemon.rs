//! Pokemon domain models, operation parameters and the view-assembly mapper.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::pokemon::{
        BaseStatsDto, CreatePokemonDto, MediaDto, MediaInputDto, PokemonDto, PokemonQueryDto,
        PokemonSummaryDto, PokemonTypeSlotDto, UpdatePokemonDto,
    },
    server::{
        error::validation::{IssueList, ValidationError},
        model::generation::Generation,
    },
};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Audio => "AUDIO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "IMAGE" => Some(Self::Image),
            "AUDIO" => Some(Self::Audio),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Media {
    pub id: i32,
    pub kind: MediaKind,
    pub url: String,
    pub title: Option<String>,
    pub is_primary: bool,
}

impl Media {
    pub fn from_entity(entity: entity::pokemon_media::Model) -> Result<Self, DbErr> {
        let kind = MediaKind::parse(&entity.kind)
            .ok_or_else(|| DbErr::Custom(format!("Unknown media kind '{}'", entity.kind)))?;

        Ok(Self {
            id: entity.id,
            kind,
            url: entity.url,
            title: entity.title,
            is_primary: entity.is_primary,
        })
    }

    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            url: self.url,
            title: self.title,
            is_primary: self.is_primary,
        }
    }
}

/// Validated media item from a create/update payload, in payload order.
#[derive(Debug, Clone)]
pub struct MediaInput {
    pub kind: MediaKind,
    pub url: String,
    pub title: Option<String>,
    pub is_primary: bool,
}

/// Indexes (into the ordered input list) of the media items that become the
/// primary image and primary audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryMediaSelection {
    pub image: Option<usize>,
    pub audio: Option<usize>,
}

/// Deterministic primary-media reducer over the ordered input list.
///
/// Per kind, the first item flagged `is_primary` wins; when none is flagged,
/// the first item of that kind becomes primary by default. Depends only on
/// payload order, never on storage order.
pub fn select_primary_media(media: &[MediaInput]) -> PrimaryMediaSelection {
    let mut selection = PrimaryMediaSelection::default();

    for (index, item) in media.iter().enumerate() {
        let slot = match item.kind {
            MediaKind::Image => &mut selection.image,
            MediaKind::Audio => &mut selection.audio,
        };
        match slot {
            None => *slot = Some(index),
            Some(current) => {
                if item.is_primary && !media[*current].is_primary {
                    *slot = Some(index);
                }
            }
        }
    }

    selection
}

/// The six base stats as stored; `None` means "not specified".
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStats {
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub sp_attack: Option<i32>,
    pub sp_defense: Option<i32>,
    pub speed: Option<i32>,
}

impl BaseStats {
    pub fn into_dto(self) -> BaseStatsDto {
        BaseStatsDto {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            sp_attack: self.sp_attack,
            sp_defense: self.sp_defense,
            speed: self.speed,
        }
    }
}

/// Per-stat patch: outer `None` keeps, `Some(None)` clears, `Some(Some(v))`
/// sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStatsPatch {
    pub hp: Option<Option<i32>>,
    pub attack: Option<Option<i32>>,
    pub defense: Option<Option<i32>>,
    pub sp_attack: Option<Option<i32>>,
    pub sp_defense: Option<Option<i32>>,
    pub speed: Option<Option<i32>>,
}

/// A type occupying one of the Pokemon's two slots.
#[derive(Debug, Clone)]
pub struct TypeSlot {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub color_hex: Option<String>,
    pub slot: i32,
}

impl TypeSlot {
    pub fn into_dto(self) -> PokemonTypeSlotDto {
        PokemonTypeSlotDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            color_hex: self.color_hex,
            slot: self.slot,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PokemonSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl PokemonSummary {
    pub fn from_entity(entity: entity::pokemon::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }

    pub fn into_dto(self) -> PokemonSummaryDto {
        PokemonSummaryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

/// A Pokemon row with everything the view needs, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct PokemonRelated {
    pub pokemon: entity::pokemon::Model,
    pub generation: Option<entity::generation::Model>,
    /// Slot rows with the joined type; join order is not significant.
    pub types: Vec<(entity::pokemon_type::Model, Option<entity::poke_type::Model>)>,
    pub media: Vec<entity::pokemon_media::Model>,
    /// Incoming evolution edges with the joined source Pokemon.
    pub incoming: Vec<(entity::pokemon_evolution::Model, Option<entity::pokemon::Model>)>,
    /// Outgoing evolution edges with the joined target Pokemon.
    pub outgoing: Vec<(entity::pokemon_evolution::Model, Option<entity::pokemon::Model>)>,
}

/// The public Pokemon view.
#[derive(Debug, Clone)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub index_number: i32,
    pub generation: Option<Generation>,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub height_meters: Option<f64>,
    pub weight_kilograms: Option<f64>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub types: Vec<TypeSlot>,
    pub media: Vec<Media>,
    pub primary_image_media: Option<Media>,
    pub primary_audio_media: Option<Media>,
    pub base_stats: BaseStats,
    pub pre_evolution: Option<PokemonSummary>,
    pub evolutions: Vec<PokemonSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pokemon {
    /// Assembles the public view from the loaded rows. Pure and side-effect
    /// free; create, update and read all go through here so the three return
    /// identical shapes.
    pub fn from_related(related: PokemonRelated) -> Result<Self, DbErr> {
        // Slot order is authoritative, not join order.
        let mut types: Vec<TypeSlot> = related
            .types
            .into_iter()
            .filter_map(|(slot_row, poke_type)| {
                poke_type.map(|t| TypeSlot {
                    id: t.id,
                    name: t.name,
                    slug: t.slug,
                    color_hex: t.color_hex,
                    slot: slot_row.slot,
                })
            })
            .collect();
        types.sort_by_key(|t| t.slot);

        let media = related
            .media
            .into_iter()
            .map(Media::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let find_media = |id: Option<i32>| -> Option<Media> {
            id.and_then(|id| media.iter().find(|m| m.id == id).cloned())
        };
        let primary_image_media = find_media(related.pokemon.primary_image_media_id);
        let primary_audio_media = find_media(related.pokemon.primary_audio_media_id);

        // The schema allows at most one incoming edge; lowest edge id wins
        // deterministically on legacy data that predates the constraint.
        let mut incoming = related.incoming;
        incoming.sort_by_key(|(edge, _)| edge.id);
        let pre_evolution = incoming
            .into_iter()
            .find_map(|(_, source)| source.map(PokemonSummary::from_entity));

        // Outgoing targets ordered by edge id, dangling references dropped.
        let mut outgoing = related.outgoing;
        outgoing.sort_by_key(|(edge, _)| edge.id);
        let evolutions = outgoing
            .into_iter()
            .filter_map(|(_, target)| target.map(PokemonSummary::from_entity))
            .collect();

        let entity = related.pokemon;
        Ok(Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            index_number: entity.index_number,
            generation: related.generation.map(Generation::from_entity),
            classification: entity.classification,
            description: entity.description,
            height_meters: entity.height_meters,
            weight_kilograms: entity.weight_kilograms,
            is_legendary: entity.is_legendary,
            is_mythical: entity.is_mythical,
            types,
            media,
            primary_image_media,
            primary_audio_media,
            base_stats: BaseStats {
                hp: entity.base_hp,
                attack: entity.base_attack,
                defense: entity.base_defense,
                sp_attack: entity.base_sp_attack,
                sp_defense: entity.base_sp_defense,
                speed: entity.base_speed,
            },
            pre_evolution,
            evolutions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PokemonDto {
        PokemonDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            index_number: self.index_number,
            generation: self.generation.map(Generation::into_dto),
            classification: self.classification,
            description: self.description,
            height_meters: self.height_meters,
            weight_kilograms: self.weight_kilograms,
            is_legendary: self.is_legendary,
            is_mythical: self.is_mythical,
            types: self.types.into_iter().map(TypeSlot::into_dto).collect(),
            media: self.media.into_iter().map(Media::into_dto).collect(),
            primary_image_media: self.primary_image_media.map(Media::into_dto),
            primary_audio_media: self.primary_audio_media.map(Media::into_dto),
            base_stats: self.base_stats.into_dto(),
            pre_evolution: self.pre_evolution.map(PokemonSummary::into_dto),
            evolutions: self.evolutions.into_iter().map(PokemonSummary::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePokemonParams {
    pub name: String,
    pub slug: Option<String>,
    pub index_number: i32,
    pub generation_id: i32,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub height_meters: Option<f64>,
    pub weight_kilograms: Option<f64>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Payload order becomes slot order (1-based).
    pub type_ids: Vec<i32>,
    pub base_stats: BaseStats,
    pub media: Vec<MediaInput>,
    pub pre_evolution_id: Option<i32>,
    pub next_evolution_ids: Vec<i32>,
}

impl CreatePokemonParams {
    pub fn from_dto(dto: CreatePokemonDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if dto.name.chars().count() < 2 {
            issues.push("name", "must have at least 2 characters");
        }
        if dto.index_number < 1 {
            issues.push("indexNumber", "must be at least 1");
        }
        check_type_ids(&dto.type_ids, &mut issues);
        check_dimension(dto.height_meters, 0.0, 100.0, "heightMeters", &mut issues);
        check_dimension(dto.weight_kilograms, 0.0, 1000.0, "weightKilograms", &mut issues);

        let stats = dto.base_stats.unwrap_or_default();
        let base_stats = BaseStats {
            hp: check_stat(stats.hp, "baseStats.hp", &mut issues),
            attack: check_stat(stats.attack, "baseStats.attack", &mut issues),
            defense: check_stat(stats.defense, "baseStats.defense", &mut issues),
            sp_attack: check_stat(stats.sp_attack, "baseStats.spAttack", &mut issues),
            sp_defense: check_stat(stats.sp_defense, "baseStats.spDefense", &mut issues),
            speed: check_stat(stats.speed, "baseStats.speed", &mut issues),
        };

        let media = validate_media(dto.media.unwrap_or_default(), &mut issues);

        issues.into_result()?;

        Ok(Self {
            name: dto.name,
            slug: dto.slug,
            index_number: dto.index_number,
            generation_id: dto.generation_id,
            classification: dto.classification,
            description: dto.description,
            height_meters: dto.height_meters,
            weight_kilograms: dto.weight_kilograms,
            is_legendary: dto.is_legendary.unwrap_or(false),
            is_mythical: dto.is_mythical.unwrap_or(false),
            type_ids: dto.type_ids,
            base_stats,
            media,
            pre_evolution_id: dto.pre_evolution_id,
            next_evolution_ids: dto.next_evolution_ids.unwrap_or_default(),
        })
    }
}

/// Partial update. Scalars: `None` keeps, double-wrapped `Some(None)` clears.
/// Collections: `None` keeps every stored row, `Some(list)` replaces them
/// wholesale (empty list clears).
#[derive(Debug, Clone)]
pub struct UpdatePokemonParams {
    pub id: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub index_number: Option<i32>,
    pub generation_id: Option<i32>,
    pub classification: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub height_meters: Option<Option<f64>>,
    pub weight_kilograms: Option<Option<f64>>,
    pub is_legendary: Option<bool>,
    pub is_mythical: Option<bool>,
    pub type_ids: Option<Vec<i32>>,
    pub base_stats: BaseStatsPatch,
    pub media: Option<Vec<MediaInput>>,
    /// `Some(None)` clears the incoming edge, `Some(Some(id))` replaces it.
    pub pre_evolution: Option<Option<i32>>,
    pub next_evolution_ids: Option<Vec<i32>>,
}

impl UpdatePokemonParams {
    pub fn from_dto(id: i32, dto: UpdatePokemonDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if let Some(name) = &dto.name {
            if name.chars().count() < 2 {
                issues.push("name", "must have at least 2 characters");
            }
        }
        if let Some(index_number) = dto.index_number {
            if index_number < 1 {
                issues.push("indexNumber", "must be at least 1");
            }
        }
        if let Some(type_ids) = &dto.type_ids {
            check_type_ids(type_ids, &mut issues);
        }
        if let Some(height) = dto.height_meters.flatten() {
            check_dimension(Some(height), 0.0, 100.0, "heightMeters", &mut issues);
        }
        if let Some(weight) = dto.weight_kilograms.flatten() {
            check_dimension(Some(weight), 0.0, 1000.0, "weightKilograms", &mut issues);
        }

        let stats = dto.base_stats.unwrap_or_default();
        let base_stats = BaseStatsPatch {
            hp: check_stat_patch(stats.hp, "baseStats.hp", &mut issues),
            attack: check_stat_patch(stats.attack, "baseStats.attack", &mut issues),
            defense: check_stat_patch(stats.defense, "baseStats.defense", &mut issues),
            sp_attack: check_stat_patch(stats.sp_attack, "baseStats.spAttack", &mut issues),
            sp_defense: check_stat_patch(stats.sp_defense, "baseStats.spDefense", &mut issues),
            speed: check_stat_patch(stats.speed, "baseStats.speed", &mut issues),
        };

        let media = dto.media.map(|media| validate_media(media, &mut issues));

        issues.into_result()?;

        Ok(Self {
            id,
            name: dto.name,
            slug: dto.slug,
            index_number: dto.index_number,
            generation_id: dto.generation_id,
            classification: dto.classification,
            description: dto.description,
            height_meters: dto.height_meters,
            weight_kilograms: dto.weight_kilograms,
            is_legendary: dto.is_legendary,
            is_mythical: dto.is_mythical,
            type_ids: dto.type_ids,
            base_stats,
            media,
            pre_evolution: dto.pre_evolution_id,
            next_evolution_ids: dto.next_evolution_ids,
        })
    }
}

/// One page of the Pokemon listing.
#[derive(Debug, Clone)]
pub struct PokemonPage {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<Pokemon>,
}

impl PokemonPage {
    pub fn into_dto(self) -> crate::model::pokemon::PaginatedPokemonsDto {
        crate::model::pokemon::PaginatedPokemonsDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            results: self.results.into_iter().map(Pokemon::into_dto).collect(),
        }
    }
}

/// Validated listing filters and pagination.
#[derive(Debug, Clone, Default)]
pub struct ListPokemonParams {
    pub search: Option<String>,
    pub generation_id: Option<i32>,
    pub type_id: Option<i32>,
    pub weak_to_type_id: Option<i32>,
    pub strong_against_type_id: Option<i32>,
    /// 1-based.
    pub page: u64,
    pub page_size: u64,
}

impl ListPokemonParams {
    pub fn from_dto(dto: PokemonQueryDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        let page = dto.page.unwrap_or(1);
        if page < 1 {
            issues.push("page", "must be at least 1");
        }
        let page_size = dto.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            issues.push("pageSize", "must be between 1 and 100");
        }

        issues.into_result()?;

        Ok(Self {
            search: dto.search.filter(|s| !s.is_empty()),
            generation_id: dto.generation_id,
            type_id: dto.type_id,
            weak_to_type_id: dto.weak_to_type_id,
            strong_against_type_id: dto.strong_against_type_id,
            page,
            page_size,
        })
    }
}

fn check_type_ids(type_ids: &[i32], issues: &mut IssueList) {
    if type_ids.is_empty() {
        issues.push("typeIds", "must contain at least 1 type");
    } else if type_ids.len() > 2 {
        issues.push("typeIds", "must contain at most 2 types");
    }
}

fn check_stat(value: Option<i32>, path: &str, issues: &mut IssueList) -> Option<i32> {
    if let Some(v) = value {
        if !(1..=300).contains(&v) {
            issues.push(path, "must be between 1 and 300");
        }
    }
    value
}

fn check_stat_patch(
    value: Option<Option<i32>>,
    path: &str,
    issues: &mut IssueList,
) -> Option<Option<i32>> {
    if let Some(Some(v)) = value {
        if !(1..=300).contains(&v) {
            issues.push(path, "must be between 1 and 300");
        }
    }
    value
}

fn check_dimension(value: Option<f64>, min: f64, max: f64, path: &str, issues: &mut IssueList) {
    if let Some(v) = value {
        if !(min..=max).contains(&v) {
            issues.push(path, format!("must be between {} and {}", min, max));
        }
    }
}

fn validate_media(media: Vec<MediaInputDto>, issues: &mut IssueList) -> Vec<MediaInput> {
    let mut validated = Vec::with_capacity(media.len());

    for (index, item) in media.into_iter().enumerate() {
        let kind = match MediaKind::parse(&item.kind) {
            Some(kind) => kind,
            None => {
                issues.push(format!("media.{}.kind", index), "must be one of IMAGE, AUDIO");
                continue;
            }
        };
        if url::Url::parse(&item.url).is_err() {
            issues.push(format!("media.{}.url", index), "must be a valid URL");
        }
        if let Some(title) = &item.title {
            if title.chars().count() > 120 {
                issues.push(
                    format!("media.{}.title", index),
                    "must have at most 120 characters",
                );
            }
        }

        validated.push(MediaInput {
            kind,
            url: item.url,
            title: item.title,
            is_primary: item.is_primary.unwrap_or(false),
        });
    }

    validated
}
