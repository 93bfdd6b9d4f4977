use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entities with the SQLite backend and
/// created in the order they were added, so add referenced tables before the
/// tables referencing them.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity's table to the schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the pokedex schema in dependency order.
    pub fn with_pokedex_tables(self) -> Self {
        self.with_table(User)
            .with_table(Generation)
            .with_table(PokeType)
            .with_table(TypeRelationship)
            .with_table(Pokemon)
            .with_table(PokemonType)
            .with_table(PokemonMedia)
            .with_table(PokemonEvolution)
    }

    /// Connects to an in-memory SQLite database and creates the configured
    /// tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
