use crate::server::{
    data::generation::GenerationRepository,
    model::generation::{CreateGenerationParams, UpdateGenerationParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
