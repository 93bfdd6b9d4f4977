use crate::server::{
    data::poke_type::PokeTypeRepository,
    model::poke_type::{CreateTypeParams, TypeRelations, UpdateTypeParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;

fn create_params(name: &str, relations: TypeRelations) -> CreateTypeParams {
    CreateTypeParams {
        name: name.to_string(),
        slug: None,
        description: None,
        color_hex: None,
        relations,
    }
}

fn empty_update(id: i32) -> UpdateTypeParams {
    UpdateTypeParams {
        id,
        name: None,
        slug: None,
        description: None,
        color_hex: None,
        relations: None,
    }
}
