//! Factory methods for creating test data.
//!
//! Each factory inserts an entity with unique defaults that can be overridden
//! through a small builder. Convenience `create_*` functions exist for the
//! common default case.

pub mod generation;
pub mod helpers;
pub mod poke_type;
pub mod pokemon;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use generation::create_generation;
pub use poke_type::create_type;
pub use pokemon::create_pokemon;
pub use user::{create_admin, create_user};
