pub use super::generation::Entity as Generation;
pub use super::poke_type::Entity as PokeType;
pub use super::pokemon::Entity as Pokemon;
pub use super::pokemon_evolution::Entity as PokemonEvolution;
pub use super::pokemon_media::Entity as PokemonMedia;
pub use super::pokemon_type::Entity as PokemonType;
pub use super::type_relationship::Entity as TypeRelationship;
pub use super::user::Entity as User;
