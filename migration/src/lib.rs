pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_generation_table;
mod m20260801_000003_create_poke_type_table;
mod m20260801_000004_create_type_relationship_table;
mod m20260801_000005_create_pokemon_table;
mod m20260801_000006_create_pokemon_type_table;
mod m20260801_000007_create_pokemon_media_table;
mod m20260801_000008_create_pokemon_evolution_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_generation_table::Migration),
            Box::new(m20260801_000003_create_poke_type_table::Migration),
            Box::new(m20260801_000004_create_type_relationship_table::Migration),
            Box::new(m20260801_000005_create_pokemon_table::Migration),
            Box::new(m20260801_000006_create_pokemon_type_table::Migration),
            Box::new(m20260801_000007_create_pokemon_media_table::Migration),
            Box::new(m20260801_000008_create_pokemon_evolution_table::Migration),
        ]
    }
}
