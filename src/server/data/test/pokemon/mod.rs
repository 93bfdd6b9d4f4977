use crate::server::{
    data::pokemon::PokemonRepository,
    model::pokemon::{
        BaseStats, BaseStatsPatch, CreatePokemonParams, ListPokemonParams, MediaInput, MediaKind,
        Pokemon, UpdatePokemonParams,
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
mod get_filtered_paginated;
mod update;

fn create_params(
    name: &str,
    index_number: i32,
    generation_id: i32,
    type_ids: Vec<i32>,
) -> CreatePokemonParams {
    CreatePokemonParams {
        name: name.to_string(),
        slug: None,
        index_number,
        generation_id,
        classification: None,
        description: None,
        height_meters: None,
        weight_kilograms: None,
        is_legendary: false,
        is_mythical: false,
        type_ids,
        base_stats: BaseStats::default(),
        media: vec![],
        pre_evolution_id: None,
        next_evolution_ids: vec![],
    }
}

fn empty_update(id: i32) -> UpdatePokemonParams {
    UpdatePokemonParams {
        id,
        name: None,
        slug: None,
        index_number: None,
        generation_id: None,
        classification: None,
        description: None,
        height_meters: None,
        weight_kilograms: None,
        is_legendary: None,
        is_mythical: None,
        type_ids: None,
        base_stats: BaseStatsPatch::default(),
        media: None,
        pre_evolution: None,
        next_evolution_ids: None,
    }
}

fn media_input(kind: MediaKind, url: &str, is_primary: bool) -> MediaInput {
    MediaInput {
        kind,
        url: url.to_string(),
        title: None,
        is_primary,
    }
}

fn list_params() -> ListPokemonParams {
    ListPokemonParams {
        search: None,
        generation_id: None,
        type_id: None,
        weak_to_type_id: None,
        strong_against_type_id: None,
        page: 1,
        page_size: 20,
    }
}

async fn add_strong_against_edge(
    db: &sea_orm::DatabaseConnection,
    source_type_id: i32,
    target_type_id: i32,
) -> Result<(), DbErr> {
    entity::type_relationship::ActiveModel {
        source_type_id: ActiveValue::Set(source_type_id),
        target_type_id: ActiveValue::Set(target_type_id),
        relation: ActiveValue::Set("STRONG_AGAINST".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}
