//! HTTP request handlers.
//!
//! Each controller composes the same pipeline: auth guard (where the endpoint
//! is protected) → validation pass (`*Params::from_dto`) → service call →
//! DTO conversion into the response envelope.

pub mod auth;
pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod upload;
pub mod user;
