//! Business logic orchestration between controllers and the data layer.

pub mod auth;
pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod upload;
pub mod user;
