use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::poke_type::{
        CreateTypeDto, TypeDto, TypeRelationsDto, TypeSummaryDto, UpdateTypeDto,
    },
    server::error::validation::{IssueList, ValidationError},
};

/// Directed effectiveness relation between two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRelation {
    StrongAgainst,
    WeakAgainst,
    ImmuneTo,
}

impl TypeRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrongAgainst => "STRONG_AGAINST",
            Self::WeakAgainst => "WEAK_AGAINST",
            Self::ImmuneTo => "IMMUNE_TO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STRONG_AGAINST" => Some(Self::StrongAgainst),
            "WEAK_AGAINST" => Some(Self::WeakAgainst),
            "IMMUNE_TO" => Some(Self::ImmuneTo),
            _ => None,
        }
    }
}

/// Compact type reference used in effectiveness lists.
#[derive(Debug, Clone)]
pub struct TypeSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub color_hex: Option<String>,
}

impl TypeSummary {
    pub fn from_entity(entity: entity::poke_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            color_hex: entity.color_hex,
        }
    }

    pub fn into_dto(self) -> TypeSummaryDto {
        TypeSummaryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            color_hex: self.color_hex,
        }
    }
}

/// A type row with both directions of its relationship edges, as loaded by
/// the repository. Each edge carries the joined type on its far side; a
/// `None` there is a dangling reference and is skipped by the mapper.
#[derive(Debug, Clone)]
pub struct TypeWithRelations {
    pub poke_type: entity::poke_type::Model,
    /// Edges where this type is the source, with the target type joined.
    pub outgoing: Vec<(entity::type_relationship::Model, Option<entity::poke_type::Model>)>,
    /// Edges where this type is the target, with the source type joined.
    pub incoming: Vec<(entity::type_relationship::Model, Option<entity::poke_type::Model>)>,
}

/// Full type view: the row plus the four effectiveness lists derived from
/// edge direction and relation kind.
#[derive(Debug, Clone)]
pub struct PokeType {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color_hex: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub strengths: Vec<TypeSummary>,
    pub weaknesses: Vec<TypeSummary>,
    pub resistances: Vec<TypeSummary>,
    pub immunities: Vec<TypeSummary>,
}

impl PokeType {
    /// Partitions relationship edges into the four effectiveness lists.
    ///
    /// Strengths come from outgoing STRONG_AGAINST edges; weaknesses,
    /// resistances and immunities from incoming STRONG_AGAINST, WEAK_AGAINST
    /// and IMMUNE_TO edges respectively. The partition is derived purely from
    /// direction and relation kind, never from a stored category.
    pub fn from_related(related: TypeWithRelations) -> Result<Self, DbErr> {
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        let mut resistances = Vec::new();
        let mut immunities = Vec::new();

        for (edge, target) in related.outgoing {
            let Some(target) = target else { continue };
            if parse_relation(&edge.relation)? == TypeRelation::StrongAgainst {
                strengths.push(TypeSummary::from_entity(target));
            }
        }

        for (edge, source) in related.incoming {
            let Some(source) = source else { continue };
            match parse_relation(&edge.relation)? {
                TypeRelation::StrongAgainst => weaknesses.push(TypeSummary::from_entity(source)),
                TypeRelation::WeakAgainst => resistances.push(TypeSummary::from_entity(source)),
                TypeRelation::ImmuneTo => immunities.push(TypeSummary::from_entity(source)),
            }
        }

        let entity = related.poke_type;
        Ok(Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            color_hex: entity.color_hex,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            strengths,
            weaknesses,
            resistances,
            immunities,
        })
    }

    pub fn into_dto(self) -> TypeDto {
        TypeDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            color_hex: self.color_hex,
            created_at: self.created_at,
            updated_at: self.updated_at,
            strengths: self.strengths.into_iter().map(TypeSummary::into_dto).collect(),
            weaknesses: self.weaknesses.into_iter().map(TypeSummary::into_dto).collect(),
            resistances: self.resistances.into_iter().map(TypeSummary::into_dto).collect(),
            immunities: self.immunities.into_iter().map(TypeSummary::into_dto).collect(),
        }
    }
}

fn parse_relation(value: &str) -> Result<TypeRelation, DbErr> {
    TypeRelation::parse(value)
        .ok_or_else(|| DbErr::Custom(format!("Unknown type relation '{}'", value)))
}

/// Outgoing relationship edges grouped by relation kind.
#[derive(Debug, Clone, Default)]
pub struct TypeRelations {
    pub strong_against: Vec<i32>,
    pub weak_against: Vec<i32>,
    pub immune_to: Vec<i32>,
}

impl From<TypeRelationsDto> for TypeRelations {
    fn from(dto: TypeRelationsDto) -> Self {
        Self {
            strong_against: dto.strong_against,
            weak_against: dto.weak_against,
            immune_to: dto.immune_to,
        }
    }
}

impl TypeRelations {
    /// Flattens into `(target_type_id, relation)` pairs for insertion.
    pub fn edges(&self) -> Vec<(i32, TypeRelation)> {
        let mut edges = Vec::new();
        edges.extend(self.strong_against.iter().map(|id| (*id, TypeRelation::StrongAgainst)));
        edges.extend(self.weak_against.iter().map(|id| (*id, TypeRelation::WeakAgainst)));
        edges.extend(self.immune_to.iter().map(|id| (*id, TypeRelation::ImmuneTo)));
        edges
    }

    pub fn referenced_ids(&self) -> Vec<i32> {
        self.edges().into_iter().map(|(id, _)| id).collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreateTypeParams {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    /// Already normalized: upper-case with a leading '#'.
    pub color_hex: Option<String>,
    pub relations: TypeRelations,
}

impl CreateTypeParams {
    pub fn from_dto(dto: CreateTypeDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if dto.name.chars().count() < 2 {
            issues.push("name", "must have at least 2 characters");
        }
        if let Some(color) = &dto.color_hex {
            if !is_hex_color(color) {
                issues.push("colorHex", "must be a 6-digit hex color");
            }
        }

        issues.into_result()?;

        Ok(Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            color_hex: dto.color_hex.as_deref().map(normalize_color_hex),
            relations: dto.relations.map(Into::into).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTypeParams {
    pub id: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    /// Outer `None` keeps the stored color; `Some(None)` clears it.
    pub color_hex: Option<Option<String>>,
    /// A present value replaces every outgoing relationship edge.
    pub relations: Option<TypeRelations>,
}

impl UpdateTypeParams {
    pub fn from_dto(id: i32, dto: UpdateTypeDto) -> Result<Self, ValidationError> {
        let mut issues = IssueList::new();

        if let Some(name) = &dto.name {
            if name.chars().count() < 2 {
                issues.push("name", "must have at least 2 characters");
            }
        }
        if let Some(Some(color)) = &dto.color_hex {
            if !is_hex_color(color) {
                issues.push("colorHex", "must be a 6-digit hex color");
            }
        }

        issues.into_result()?;

        Ok(Self {
            id,
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            color_hex: dto
                .color_hex
                .map(|color| color.as_deref().map(normalize_color_hex)),
            relations: dto.relations.map(Into::into),
        })
    }
}

/// Accepts exactly six hex digits, with or without a leading '#'.
pub fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Canonical stored form: upper-case with a leading '#'.
pub fn normalize_color_hex(value: &str) -> String {
    let digits = value.strip_prefix('#').unwrap_or(value);
    format!("#{}", digits.to_uppercase())
}
