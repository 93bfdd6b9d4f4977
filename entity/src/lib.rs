pub mod prelude;

pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod pokemon_evolution;
pub mod pokemon_media;
pub mod pokemon_type;
pub mod type_relationship;
pub mod user;
