//! Domain models and operation parameter types.
//!
//! Sits between the API DTOs (`crate::model`) and the entity layer. Parameter
//! types are produced from request DTOs by an explicit validation pass
//! (`from_dto`), and domain models are assembled from entity rows at the
//! repository boundary (`from_entity` / `from_related`) before being converted
//! to DTOs for responses.

pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod upload;
pub mod user;
