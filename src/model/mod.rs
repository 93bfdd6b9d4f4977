//! API data transfer objects.
//!
//! Wire-facing request and response types for the REST API. All DTOs serialize
//! with camelCase field names. Responses are wrapped in the standard envelope:
//! `{ "success": true, "data": ... }` on success and
//! `{ "success": false, "error": { "message", "issues"? } }` on failure.

pub mod api;
pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod upload;
pub mod user;
